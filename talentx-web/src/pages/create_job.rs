use shared::models::CreateJobRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;

use crate::api::TalentXClient;
use crate::routes::MainRoute;

const TECH_STACK_OPTIONS: &[&str] = &[
    "Python",
    "TensorFlow",
    "PyTorch",
    "Scikit-learn",
    "Keras",
    "JavaScript",
    "React",
    "Node.js",
    "TypeScript",
    "SQL",
    "AWS",
    "Google Cloud",
    "Azure",
    "Docker",
    "Kubernetes",
    "Computer Vision",
    "NLP",
    "LLM",
    "RAG",
    "MLOps",
];

const STEP_LABELS: &[&str] = &["Job Details", "Tech Stack", "Review"];

/// Today's calendar date, used as the lower bound for the deadline picker.
fn today() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.get(..10).unwrap_or_default().to_string()
}

/// Three-step posting wizard: details, tech stack, review. The backend
/// generates the job description from the selected stack.
#[function_component(CreateJobPage)]
pub fn create_job_page() -> Html {
    let step = use_state(|| 1_u8);
    let title = use_state(String::new);
    let deadline = use_state(String::new);
    let tech_stack = use_state(Vec::<String>::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let go_to = |target: u8| {
        let step = step.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            step.set(target);
        })
    };

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                title.set(input.value());
            }
        })
    };

    let on_deadline_change = {
        let deadline = deadline.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                deadline.set(input.value());
            }
        })
    };

    let toggle_tech = {
        let tech_stack = tech_stack.clone();
        Callback::from(move |tech: String| {
            let mut stack = (*tech_stack).clone();
            if let Some(position) = stack.iter().position(|existing| existing == &tech) {
                stack.remove(position);
            } else {
                stack.push(tech);
            }
            tech_stack.set(stack);
        })
    };

    let onsubmit = {
        let title_handle = title.clone();
        let deadline_handle = deadline.clone();
        let tech_handle = tech_stack.clone();
        let error_handle = error.clone();
        let loading_handle = loading.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = CreateJobRequest {
                title: (*title_handle).clone(),
                tech_stack: (*tech_handle).clone(),
                deadline: (*deadline_handle).clone(),
            };
            loading_handle.set(true);
            error_handle.set(None);
            let loading_ref = loading_handle.clone();
            let error_ref = error_handle.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                match TalentXClient::shared().create_job(&request).await {
                    Ok(_) => {
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Dashboard);
                        }
                    }
                    Err(err) => {
                        error_ref.set(Some(err.to_string()));
                        loading_ref.set(false);
                    }
                }
            });
        })
    };

    let current = *step;
    let progress = html! {
        <ul class="steps w-full mb-8">
            { for STEP_LABELS.iter().enumerate().map(|(index, label)| {
                let class = if current as usize > index { "step step-primary" } else { "step" };
                html! { <li class={class}>{ *label }</li> }
            }) }
        </ul>
    };

    let details_step = html! {
        <div class="space-y-6">
            <div class="form-control">
                <label class="label" for="title">
                    <span class="label-text">{"Job Title"}</span>
                </label>
                <input
                    id="title"
                    class="input input-bordered"
                    type="text"
                    placeholder="e.g. Senior ML Engineer"
                    required=true
                    value={(*title).clone()}
                    oninput={on_title_change}
                />
            </div>
            <div class="form-control">
                <label class="label" for="deadline">
                    <span class="label-text">{"Application Deadline"}</span>
                </label>
                <input
                    id="deadline"
                    class="input input-bordered"
                    type="date"
                    min={today()}
                    required=true
                    value={(*deadline).clone()}
                    oninput={on_deadline_change}
                />
            </div>
            <div class="flex justify-end pt-4">
                <button
                    class="btn btn-primary"
                    type="button"
                    onclick={go_to(2)}
                    disabled={(*title).is_empty() || (*deadline).is_empty()}
                >
                    {"Next: Select Tech Stack"}
                    <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-4 h-4" />
                </button>
            </div>
        </div>
    };

    let stack_step = html! {
        <div>
            <div class="mb-6">
                <h3 class="text-lg font-medium">{"Required Tech Stack"}</h3>
                <p class="text-sm text-base-content/60">{"AI will match talents based on these skills"}</p>
            </div>
            <div class="flex flex-wrap gap-2 mb-8">
                { for TECH_STACK_OPTIONS.iter().map(|tech| {
                    let selected = tech_stack.iter().any(|existing| existing == tech);
                    let toggle_tech = toggle_tech.clone();
                    let value = (*tech).to_string();
                    let onclick = Callback::from(move |event: MouseEvent| {
                        event.prevent_default();
                        toggle_tech.emit(value.clone());
                    });
                    let class = if selected { "btn btn-primary btn-sm" } else { "btn btn-ghost btn-sm bg-base-200" };
                    html! {
                        <button type="button" {class} {onclick}>{ *tech }</button>
                    }
                }) }
            </div>
            <div class="flex justify-between pt-4">
                <button class="btn" type="button" onclick={go_to(1)}>
                    <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-4 h-4" />
                    {"Back"}
                </button>
                <button
                    class="btn btn-primary"
                    type="button"
                    onclick={go_to(3)}
                    disabled={tech_stack.is_empty()}
                >
                    {"Next: Review"}
                    <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-4 h-4" />
                </button>
            </div>
        </div>
    };

    let review_step = html! {
        <div>
            <h3 class="text-lg font-medium mb-4">{"Review Job Posting"}</h3>
            <div class="space-y-4 mb-6">
                <div class="p-4 rounded-xl bg-base-200">
                    <p class="text-sm text-base-content/60">{"Job Title"}</p>
                    <p class="font-medium">{ (*title).clone() }</p>
                </div>
                <div class="p-4 rounded-xl bg-base-200">
                    <p class="text-sm text-base-content/60">{"Deadline"}</p>
                    <p class="font-medium">{ (*deadline).clone() }</p>
                </div>
                <div class="p-4 rounded-xl bg-base-200">
                    <p class="text-sm text-base-content/60 mb-2">
                        { format!("Tech Stack ({} skills)", tech_stack.len()) }
                    </p>
                    <div class="flex flex-wrap gap-2">
                        { for tech_stack.iter().map(|tech| html! {
                            <span class="badge badge-primary badge-outline">{ tech }</span>
                        }) }
                    </div>
                </div>
            </div>
            <div class="flex justify-between pt-4">
                <button class="btn" type="button" onclick={go_to(2)}>
                    <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-4 h-4" />
                    {"Back"}
                </button>
                <button class="btn btn-primary" type="submit" disabled={*loading}>
                    <Icon icon_id={IconId::HeroiconsOutlineSparkles} class="w-4 h-4" />
                    {if *loading { "Posting..." } else { "Post Job" }}
                </button>
            </div>
        </div>
    };

    html! {
        <div class="max-w-3xl mx-auto px-4 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">{"Post a New Job"}</h1>
                <p class="text-base-content/60">{"AI will generate a perfect job description for you"}</p>
            </div>

            { progress }

            <div class="card bg-base-100 shadow">
                <form class="card-body" onsubmit={onsubmit}>
                    if let Some(message) = &*error {
                        <div class="alert alert-error mb-4"><span>{ message.clone() }</span></div>
                    }
                    {
                        match current {
                            1 => details_step,
                            2 => stack_step,
                            _ => review_step,
                        }
                    }
                </form>
            </div>
        </div>
    }
}
