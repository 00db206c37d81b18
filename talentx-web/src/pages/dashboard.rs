use i18nrs::yew::use_translation;
use shared::models::{Job, JobStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::api::TalentXClient;
use crate::components::skeleton::CardSkeleton;
use crate::routes::MainRoute;
use crate::session::{Session, use_session_controller};

/// Employer dashboard: aggregate stats over the account's postings and a
/// card per posting linking to its applications.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, ..) = use_translation();
    let user = use_selector(|state: &Session| state.user.clone());
    let controller = use_session_controller();
    let jobs = use_state(Vec::<Job>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let jobs = jobs.clone();
        let loading = loading.clone();
        let error = error.clone();
        let controller = controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match TalentXClient::shared().my_posted_jobs().await {
                    Ok(response) => jobs.set(response.jobs),
                    Err(err) if err.is_authentication() => {
                        // The token went stale mid-session; drop it and let
                        // the guard redirect.
                        controller.logout();
                    }
                    Err(err) => {
                        log::error!("failed to fetch posted jobs: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let active_jobs = jobs
        .iter()
        .filter(|job| job.status == JobStatus::Active)
        .count();
    let total_applications: u32 = jobs.iter().map(|job| job.applications_count).sum();
    let ai_matches = jobs.len() * 3;

    let stat = |title: String, value: String, icon: IconId| {
        html! {
            <div class="stat">
                <div class="stat-figure text-primary">
                    <Icon icon_id={icon} class="w-8 h-8" />
                </div>
                <div class="stat-title">{ title }</div>
                <div class="stat-value text-primary">{ value }</div>
            </div>
        }
    };

    let welcome = user
        .as_ref()
        .as_ref()
        .map_or_else(String::new, |user| {
            format!("{}, {}", i18n.t("dashboard.welcome"), user.name)
        });

    html! {
        <div class="max-w-7xl mx-auto px-4 py-8 space-y-6">
            <div>
                <h1 class="text-3xl font-bold">{ i18n.t("dashboard.title") }</h1>
                <p class="text-base-content/60">{ welcome }</p>
            </div>

            <div class="stats shadow w-full bg-base-100">
                { stat(
                    i18n.t("dashboard.stats.active_jobs"),
                    active_jobs.to_string(),
                    IconId::HeroiconsOutlineBriefcase,
                ) }
                { stat(
                    i18n.t("dashboard.stats.total_applications"),
                    total_applications.to_string(),
                    IconId::HeroiconsOutlineUsers,
                ) }
                { stat(
                    i18n.t("dashboard.stats.ai_matches"),
                    ai_matches.to_string(),
                    IconId::HeroiconsOutlineSparkles,
                ) }
            </div>

            <div class="flex items-center justify-between">
                <h2 class="text-xl font-semibold">{ i18n.t("dashboard.posted_jobs") }</h2>
                <Link<MainRoute> to={MainRoute::CreateJob} classes="btn btn-primary">
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-4 h-4" />
                    { i18n.t("dashboard.post_new_job") }
                </Link<MainRoute>>
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{ message.clone() }</span></div>
            }

            {
                if *loading {
                    html! {
                        <div class="grid md:grid-cols-2 gap-6">
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                    }
                } else if jobs.is_empty() {
                    html! {
                        <div class="card bg-base-100 shadow text-center py-12">
                            <div class="card-body items-center">
                                <Icon icon_id={IconId::HeroiconsOutlineBriefcase} class="w-12 h-12 text-base-content/30" />
                                <h3 class="text-lg font-medium">{"No jobs posted yet"}</h3>
                                <p class="text-base-content/60">{"Start by posting your first AI/ML job opening"}</p>
                                <Link<MainRoute> to={MainRoute::CreateJob} classes="btn btn-primary mt-2">
                                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-4 h-4" />
                                    { i18n.t("dashboard.post_new_job") }
                                </Link<MainRoute>>
                            </div>
                        </div>
                    }
                } else {
                    html! {
                        <div class="grid md:grid-cols-2 gap-6">
                            { for jobs.iter().map(|job| {
                                let status_badge = match job.status {
                                    JobStatus::Active => html! { <span class="badge badge-success">{"active"}</span> },
                                    JobStatus::Closed => html! { <span class="badge badge-ghost">{"closed"}</span> },
                                };
                                html! {
                                    <div class="card bg-base-100 shadow">
                                        <div class="card-body">
                                            <div class="flex items-start justify-between">
                                                <div>
                                                    <h3 class="card-title text-lg">{ &job.title }</h3>
                                                    <p class="text-base-content/70">{ &job.company_name }</p>
                                                </div>
                                                { status_badge }
                                            </div>
                                            <div class="flex flex-wrap gap-2">
                                                { for job.tech_stack.iter().take(3).map(|tech| html! {
                                                    <span class="badge badge-primary badge-outline">{ tech }</span>
                                                }) }
                                            </div>
                                            <div class="flex items-center justify-between border-t border-base-200 pt-4 mt-2">
                                                <div class="flex items-center gap-4 text-sm text-base-content/60">
                                                    <span class="flex items-center gap-1">
                                                        <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-4 h-4" />
                                                        { job.applications_count }
                                                    </span>
                                                    if let Some(deadline) = &job.deadline {
                                                        <span class="flex items-center gap-1">
                                                            <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4" />
                                                            { deadline.format_date() }
                                                        </span>
                                                    }
                                                </div>
                                                <Link<MainRoute>
                                                    to={MainRoute::JobApplications { id: job.id.clone() }}
                                                    classes="btn btn-ghost btn-sm"
                                                >
                                                    {"View"}
                                                    <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-4 h-4" />
                                                </Link<MainRoute>>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                    }
                }
            }
        </div>
    }
}
