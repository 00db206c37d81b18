use once_cell::sync::Lazy;
use regex::Regex;
use shared::models::{SignupRequest, UserRole};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

use crate::routes::MainRoute;
use crate::session::use_session_controller;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Registration form. The chosen role switches between a company-name
/// field (employer) and a comma-separated skills field (jobseeker); the
/// backend enforces the password policy.
#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let role = use_state(|| UserRole::Jobseeker);
    let company_name = use_state(String::new);
    let skills = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let controller = use_session_controller();

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
                error.set(None);
            }
        })
    };

    let on_name_change = text_input(&name);
    let on_email_change = text_input(&email);
    let on_password_change = text_input(&password);
    let on_company_change = text_input(&company_name);
    let on_skills_change = text_input(&skills);

    let pick_role = |value: UserRole| {
        let role = role.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            role.set(value);
        })
    };

    let onsubmit = {
        let name_handle = name.clone();
        let email_handle = email.clone();
        let password_handle = password.clone();
        let role_handle = role.clone();
        let company_handle = company_name.clone();
        let skills_handle = skills.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let controller = controller.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email_handle).clone();
            if !EMAIL_RE.is_match(&email_value) {
                error_handle.set(Some("Enter a valid email address".to_string()));
                return;
            }
            let selected_role = *role_handle;
            let request = SignupRequest {
                name: (*name_handle).clone(),
                email: email_value,
                password: (*password_handle).clone(),
                role: selected_role,
                company_name: (selected_role == UserRole::Employer)
                    .then(|| (*company_handle).clone()),
                skills: (selected_role == UserRole::Jobseeker).then(|| {
                    (*skills_handle)
                        .split(',')
                        .map(str::trim)
                        .filter(|skill| !skill.is_empty())
                        .map(str::to_string)
                        .collect()
                }),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let controller = controller.clone();
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                match controller.signup(request).await {
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

    let role_card = |value: UserRole, label: &str, desc: &str, icon: IconId| {
        let active = *role == value;
        let card_class = if active {
            "border-primary bg-primary/10"
        } else {
            "border-base-300 hover:border-base-content/30"
        };
        html! {
            <button
                type="button"
                class={classes!("p-4", "rounded-xl", "border-2", "text-left", "transition-all", card_class)}
                onclick={pick_role(value)}
            >
                <Icon icon_id={icon} class="w-6 h-6" />
                <p class="font-medium mt-2">{label}</p>
                <p class="text-xs text-base-content/60">{desc}</p>
            </button>
        }
    };

    let is_busy = *loading;
    let disable_submit =
        (*name).is_empty() || (*email).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200 py-8">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create Account"}</h2>
                    <p class="text-base-content/60">{"Join TalentX and find your perfect match"}</p>

                    <div class="mt-2">
                        <label class="label"><span class="label-text">{"I am a..."}</span></label>
                        <div class="grid grid-cols-2 gap-3">
                            { role_card(
                                UserRole::Jobseeker,
                                "I'm looking for jobs",
                                "Find your dream AI/ML role",
                                IconId::HeroiconsOutlineUserCircle,
                            ) }
                            { role_card(
                                UserRole::Employer,
                                "I'm hiring",
                                "Find top AI/ML talent",
                                IconId::HeroiconsOutlineBuildingOffice2,
                            ) }
                        </div>
                    </div>

                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="name">
                            <span class="label-text">{"Full Name"}</span>
                        </label>
                        <input
                            id="name"
                            class="input input-bordered"
                            type="text"
                            placeholder="John Doe"
                            required=true
                            value={(*name).clone()}
                            oninput={on_name_change}
                        />
                    </div>
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
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            placeholder="Min. 8 characters"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    {
                        if *role == UserRole::Employer {
                            html! {
                                <div class="form-control">
                                    <label class="label" for="company">
                                        <span class="label-text">{"Company Name"}</span>
                                    </label>
                                    <input
                                        id="company"
                                        class="input input-bordered"
                                        type="text"
                                        placeholder="Acme Inc."
                                        required=true
                                        value={(*company_name).clone()}
                                        oninput={on_company_change}
                                    />
                                </div>
                            }
                        } else {
                            html! {
                                <div class="form-control">
                                    <label class="label" for="skills">
                                        <span class="label-text">{"Skills"}</span>
                                    </label>
                                    <input
                                        id="skills"
                                        class="input input-bordered"
                                        type="text"
                                        placeholder="Python, Machine Learning, TensorFlow"
                                        required=true
                                        value={(*skills).clone()}
                                        oninput={on_skills_change}
                                    />
                                </div>
                            }
                        }
                    }
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Creating account..." } else { "Create Account" }}
                        </button>
                    </div>
                    <p class="text-center text-base-content/60 mt-4">
                        {"Already have an account? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link link-primary">
                            {"Sign In"}
                        </Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
