use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

use crate::routes::MainRoute;
use crate::session::{Session, use_session_controller};

/// Account dropdown in the navbar: identity summary plus logout.
#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator().unwrap();
    let (i18n, ..) = use_translation();
    let controller = use_session_controller();
    let user_state = use_selector(|state: &Session| state.user.clone());
    let Some(user) = (*user_state).clone() else {
        return html! {};
    };

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            controller.logout();
            navigator.push(&MainRoute::Login);
        });
        html! {
            <li><a {onclick}>{i18n.t("header.logout")}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <i class="fa-solid fa-user text-lg"></i>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ &user.name }</div>
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                    <span class="badge badge-primary badge-sm capitalize mt-1">{ user.role.as_str() }</span>
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
