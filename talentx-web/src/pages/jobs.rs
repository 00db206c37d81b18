use gloo_timers::callback::Timeout;
use shared::models::{CreateApplicationRequest, Job, UserRole};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_store_value;

use crate::api::TalentXClient;
use crate::components::job_card::JobCard;
use crate::components::skeleton::CardSkeleton;
use crate::routes::MainRoute;
use crate::session::{Session, use_session_controller};

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Public job list: debounced search, a detail panel, an apply action for
/// signed-in jobseekers and an AI-matched strip on top.
#[function_component(JobsPage)]
pub fn jobs_page() -> Html {
    let jobs = use_state(Vec::<Job>::new);
    let matched = use_state(Vec::<Job>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let search = use_state(String::new);
    let query = use_state(String::new);
    let selected = use_state(|| None::<Job>);
    let applied = use_state(|| None::<String>);
    let apply_error = use_state(|| None::<String>);
    let debounce = use_mut_ref(|| None::<Timeout>);
    let session = use_store_value::<Session>();
    let controller = use_session_controller();

    {
        let jobs = jobs.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((*query).clone(), move |query| {
            let query = query.clone();
            loading.set(true);
            spawn_local(async move {
                let client = TalentXClient::shared();
                let search = if query.is_empty() {
                    None
                } else {
                    Some(query.as_str())
                };
                match client.jobs(search).await {
                    Ok(response) => {
                        jobs.set(response.jobs);
                        error.set(None);
                    }
                    Err(err) => {
                        log::error!("failed to fetch jobs: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    {
        let matched = matched.clone();
        let role = session
            .role()
            .filter(|_| session.is_authenticated);
        use_effect_with(role, move |role| {
            if *role == Some(UserRole::Jobseeker) {
                let matched = matched.clone();
                spawn_local(async move {
                    match TalentXClient::shared().matched_jobs().await {
                        Ok(response) => matched.set(response.jobs),
                        Err(err) => log::warn!("failed to fetch matched jobs: {err}"),
                    }
                });
            }
            || ()
        });
    }

    let on_search_input = {
        let search = search.clone();
        let query = query.clone();
        let debounce = debounce.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                search.set(value.clone());
                let query = query.clone();
                // Restarting the timeout drops (and cancels) the pending one.
                let task = Timeout::new(SEARCH_DEBOUNCE_MS, move || query.set(value));
                *debounce.borrow_mut() = Some(task);
            }
        })
    };

    let on_select = {
        let selected = selected.clone();
        let applied = applied.clone();
        let apply_error = apply_error.clone();
        Callback::from(move |job: Job| {
            selected.set(Some(job));
            applied.set(None);
            apply_error.set(None);
        })
    };

    let on_apply = {
        let selected = selected.clone();
        let applied = applied.clone();
        let apply_error = apply_error.clone();
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(job) = (*selected).clone() else {
                return;
            };
            let applied = applied.clone();
            let apply_error = apply_error.clone();
            let controller = controller.clone();
            spawn_local(async move {
                let request = CreateApplicationRequest {
                    job_id: job.id.clone(),
                };
                match TalentXClient::shared().create_application(&request).await {
                    Ok(_) => {
                        applied.set(Some(format!("Application submitted for {}", job.title)));
                        apply_error.set(None);
                    }
                    Err(err) if err.is_authentication() => controller.logout(),
                    Err(err) => {
                        apply_error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let is_jobseeker = session.is_authenticated && session.role() == Some(UserRole::Jobseeker);

    let detail_panel = (*selected).clone().map_or_else(
        || {
            html! {
                <div class="card bg-base-100 shadow text-center py-12">
                    <div class="card-body items-center">
                        <Icon icon_id={IconId::HeroiconsOutlineBriefcase} class="w-12 h-12 text-base-content/30" />
                        <p class="text-base-content/60">{"Select a job to view details"}</p>
                    </div>
                </div>
            }
        },
        |job: Job| {
            html! {
                <div class="card bg-base-100 shadow sticky top-24">
                    <div class="card-body">
                        <h2 class="card-title">{ &job.title }</h2>
                        <p class="text-base-content/70">{ &job.company_name }</p>
                        if let Some(deadline) = &job.deadline {
                            <div class="flex items-center gap-2 text-sm text-base-content/70 mt-2">
                                <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4" />
                                { format!("Deadline: {}", deadline.format_date()) }
                            </div>
                        }
                        <div class="mt-2">
                            <p class="text-sm font-medium mb-2">{"Required Skills"}</p>
                            <div class="flex flex-wrap gap-2">
                                { for job.tech_stack.iter().map(|tech| html! {
                                    <span class="badge badge-primary badge-outline">{ tech }</span>
                                }) }
                            </div>
                        </div>
                        if let Some(description) = &job.description {
                            <div class="mt-2">
                                <p class="text-sm font-medium mb-1">{"Description"}</p>
                                <p class="text-sm text-base-content/70 leading-relaxed">{ description }</p>
                            </div>
                        }
                        if let Some(message) = &*applied {
                            <div class="alert alert-success mt-2"><span>{ message.clone() }</span></div>
                        }
                        if let Some(message) = &*apply_error {
                            <div class="alert alert-error mt-2"><span>{ message.clone() }</span></div>
                        }
                        <div class="card-actions mt-4">
                            {
                                if is_jobseeker {
                                    html! {
                                        <button class="btn btn-primary w-full" onclick={on_apply.clone()} disabled={applied.is_some()}>
                                            <Icon icon_id={IconId::HeroiconsOutlineSparkles} class="w-4 h-4" />
                                            {"Apply Now"}
                                        </button>
                                    }
                                } else if !session.is_authenticated && !session.is_loading {
                                    html! {
                                        <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary w-full">
                                            {"Sign in to apply"}
                                        </Link<MainRoute>>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>
                </div>
            }
        },
    );

    html! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">{"Find AI/ML Jobs"}</h1>
                <p class="text-base-content/60">{"Discover opportunities that match your skills"}</p>
            </div>

            if is_jobseeker && !matched.is_empty() {
                <div class="mb-8">
                    <h2 class="text-lg font-semibold flex items-center gap-2 mb-3">
                        <Icon icon_id={IconId::HeroiconsOutlineSparkles} class="w-5 h-5 text-primary" />
                        {"Recommended for you"}
                    </h2>
                    <div class="flex gap-4 overflow-x-auto pb-2">
                        { for matched.iter().map(|job| {
                            let on_select = on_select.clone();
                            let selected_job = job.clone();
                            let onclick = Callback::from(move |_: MouseEvent| on_select.emit(selected_job.clone()));
                            html! {
                                <button class="card bg-base-100 shadow min-w-60 text-left hover:shadow-lg transition-shadow" {onclick}>
                                    <div class="card-body p-4">
                                        <p class="font-semibold">{ &job.title }</p>
                                        <p class="text-sm text-base-content/60">{ &job.company_name }</p>
                                    </div>
                                </button>
                            }
                        }) }
                    </div>
                </div>
            }

            <div class="flex flex-col md:flex-row gap-4 mb-8">
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-5 h-5 text-base-content/40" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search jobs by title or skill..."
                        value={(*search).clone()}
                        oninput={on_search_input}
                    />
                </label>
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-error mb-6"><span>{ message.clone() }</span></div>
            }

            <div class="grid lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2 space-y-4">
                    {
                        if *loading {
                            html! { <>{ for (0..5).map(|_| html! { <CardSkeleton /> }) }</> }
                        } else if jobs.is_empty() {
                            html! {
                                <div class="card bg-base-100 shadow text-center py-12">
                                    <div class="card-body items-center">
                                        <Icon icon_id={IconId::HeroiconsOutlineBriefcase} class="w-12 h-12 text-base-content/30" />
                                        <p class="text-base-content/60">{"No jobs found"}</p>
                                    </div>
                                </div>
                            }
                        } else {
                            html! {
                                <>{ for jobs.iter().map(|job| {
                                    let is_selected = (*selected)
                                        .as_ref()
                                        .is_some_and(|current| current.id == job.id);
                                    html! {
                                        <JobCard
                                            job={job.clone()}
                                            selected={is_selected}
                                            on_select={on_select.clone()}
                                        />
                                    }
                                }) }</>
                            }
                        }
                    }
                </div>
                <div class="lg:col-span-1">
                    { detail_panel }
                </div>
            </div>
        </div>
    }
}
