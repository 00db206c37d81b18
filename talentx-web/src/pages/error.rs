use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// `ErrorPage` page component
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="max-w-3xl mx-auto px-4 py-20 text-center space-y-6">
            <h1 class="text-5xl font-bold">{"404"}</h1>
            <p class="text-base-content/70">{"The page you are looking for does not exist."}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                {"Back to Home"}
            </Link<MainRoute>>
        </div>
    }
}
