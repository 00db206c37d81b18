use shared::models::UserRole;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_bool_toggle;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

use crate::routes::MainRoute;
use crate::session::use_session_controller;

/// Sign-in form. On success the session controller has already persisted
/// the token and user; the destination is keyed on the account role.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let show_password = use_bool_toggle(false);
    let navigator = use_navigator();
    let controller = use_session_controller();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let controller = controller.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            let password_value = (*password_handle).clone();
            loading_handle.set(true);
            error_handle.set(None);
            let controller = controller.clone();
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                match controller.login(email_value, password_value).await {
                    Ok(user) => {
                        let destination = if user.role == UserRole::Employer {
                            MainRoute::Dashboard
                        } else {
                            MainRoute::Jobs
                        };
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&destination);
                        }
                    }
                    Err(err) => {
                        error_ref.set(Some(err.to_string()));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
                error.set(None);
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
                error.set(None);
            }
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            show_password.toggle();
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Welcome Back"}</h2>
                    <p class="text-base-content/60">{"Sign in to continue to TalentX"}</p>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email Address"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            placeholder="you@example.com"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <div class="join w-full">
                            <input
                                id="password"
                                class="input input-bordered join-item w-full"
                                type={if *show_password { "text" } else { "password" }}
                                required=true
                                value={(*password).clone()}
                                oninput={on_password_change}
                            />
                            <button class="btn join-item" type="button" onclick={toggle_password}>
                                <i class={if *show_password { "fa-solid fa-eye-slash" } else { "fa-solid fa-eye" }}></i>
                            </button>
                        </div>
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Signing in..." } else { "Sign In" }}
                        </button>
                    </div>
                    <p class="text-center text-base-content/60 mt-4">
                        {"Don't have an account? "}
                        <Link<MainRoute> to={MainRoute::Signup} classes="link link-primary">
                            {"Create Account"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
