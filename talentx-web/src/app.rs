use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;

use crate::routes::MainRoute;
use crate::session::use_session_controller;

/// Root application component: kicks off the one-time session bootstrap
/// and mounts the router. Every view below reads the session store; the
/// route guard keeps gated views from rendering before bootstrap settles.
#[function_component(App)]
pub fn app() -> Html {
    let controller = use_session_controller();

    use_effect_with((), move |_| {
        spawn_local(async move {
            controller.bootstrap().await;
        });
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={crate::routes::switch} />
        </BrowserRouter>
    }
}
