use yew::{Html, function_component, html};

/// Placeholder card shown while a list is being fetched.
#[function_component(CardSkeleton)]
pub fn card_skeleton() -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body gap-3">
                <div class="skeleton h-5 w-2/3"></div>
                <div class="skeleton h-4 w-1/3"></div>
                <div class="flex gap-2">
                    <div class="skeleton h-6 w-16"></div>
                    <div class="skeleton h-6 w-16"></div>
                    <div class="skeleton h-6 w-16"></div>
                </div>
            </div>
        </div>
    }
}
