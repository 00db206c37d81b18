use yew::{Html, function_component, html};

/// Neutral full-page placeholder shown while the session bootstrap is in
/// flight. Rendered by the route guard before any navigation decision.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-base-200">
            <div class="bg-base-100 p-6 rounded-lg shadow-md flex flex-col items-center">
                <div class="text-xl font-medium flex items-center gap-2">
                    <i class="fa-solid fa-briefcase text-primary"></i>
                    <span>{"TalentX"}</span>
                </div>
                <div class="mt-3 flex items-center gap-2">
                    <span class="loading loading-spinner loading-sm"></span>
                    <span>{"Loading"}</span>
                </div>
            </div>
        </div>
    }
}
