use shared::models::UserRole;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store_value;

use crate::components::loading::Loading;
use crate::routes::{MainRoute, NavigationDecision, authorize};
use crate::session::Session;

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    /// Role the signed-in account must hold, if the view is role-gated on
    /// top of requiring authentication.
    #[prop_or_default]
    pub required_role: Option<UserRole>,
    pub children: Children,
}

/// Gate a view behind the session state.
///
/// Re-evaluated on every render: while bootstrap is loading a neutral
/// placeholder is shown, anonymous visitors are sent to the login view and
/// role mismatches are sent home, both replacing the history entry so
/// back-navigation does not return to the guarded view.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_store_value::<Session>();

    match authorize(&session, props.required_role) {
        NavigationDecision::Loading => html! { <Loading /> },
        NavigationDecision::RedirectTo(route) => html! { <Redirect<MainRoute> to={route} /> },
        NavigationDecision::Render => html! { <>{ props.children.clone() }</> },
    }
}
