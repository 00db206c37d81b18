use shared::models::{Application, ApplicationStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::api::TalentXClient;
use crate::components::skeleton::CardSkeleton;
use crate::session::use_session_controller;

/// Jobseeker view of submitted applications and their review state.
#[function_component(MyApplicationsPage)]
pub fn my_applications_page() -> Html {
    let applications = use_state(Vec::<Application>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let controller = use_session_controller();

    {
        let applications = applications.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match TalentXClient::shared().my_applications().await {
                    Ok(response) => applications.set(response.applications),
                    Err(err) if err.is_authentication() => controller.logout(),
                    Err(err) => {
                        log::error!("failed to fetch applications: {err}");
                        error.set(Some(
                            "Failed to load your applications. Please try again.".to_string(),
                        ));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let status_badge = |status: ApplicationStatus| match status {
        ApplicationStatus::Reviewed => html! { <span class="badge badge-primary">{"Reviewed"}</span> },
        ApplicationStatus::Pending => html! { <span class="badge badge-ghost">{"Pending"}</span> },
    };

    html! {
        <div class="max-w-5xl mx-auto px-4 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">{"My Applications"}</h1>
                <p class="text-base-content/60">{"Track your job applications"}</p>
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-error mb-6">
                    <Icon icon_id={IconId::HeroiconsOutlineExclamationCircle} class="w-5 h-5" />
                    <span>{ message.clone() }</span>
                </div>
            }

            <div class="space-y-4">
                {
                    if *loading {
                        html! { <>{ for (0..3).map(|_| html! { <CardSkeleton /> }) }</> }
                    } else if applications.is_empty() {
                        html! {
                            <div class="card bg-base-100 shadow text-center py-12">
                                <div class="card-body items-center">
                                    <Icon icon_id={IconId::HeroiconsOutlineBriefcase} class="w-12 h-12 text-base-content/30" />
                                    <h3 class="text-lg font-semibold">{"No Applications Yet"}</h3>
                                    <p class="text-base-content/60">
                                        {"You haven't applied to any jobs yet. Browse jobs to start applying!"}
                                    </p>
                                </div>
                            </div>
                        }
                    } else {
                        html! {
                            <>{ for applications.iter().map(|application| {
                                let job_title = application
                                    .job
                                    .as_ref()
                                    .map_or("Job Title Unavailable", |job| job.title.as_str());
                                let company = application
                                    .job
                                    .as_ref()
                                    .map_or("Company Unavailable", |job| job.company_name.as_str());
                                html! {
                                    <div class="card bg-base-100 shadow">
                                        <div class="card-body">
                                            <div class="flex items-start justify-between">
                                                <div>
                                                    <h3 class="card-title text-lg">{ job_title }</h3>
                                                    <div class="flex items-center gap-2 text-base-content/70">
                                                        <Icon icon_id={IconId::HeroiconsOutlineBuildingOffice2} class="w-4 h-4" />
                                                        <span>{ company }</span>
                                                    </div>
                                                </div>
                                                { status_badge(application.status) }
                                            </div>
                                            <div class="flex flex-wrap gap-2">
                                                { for application.talent_skills.iter().take(4).map(|skill| html! {
                                                    <span class="badge badge-ghost">{ skill }</span>
                                                }) }
                                            </div>
                                            <div class="flex items-center gap-4 text-sm text-base-content/60">
                                                if let Some(created_at) = &application.created_at {
                                                    <span class="flex items-center gap-1">
                                                        <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4" />
                                                        { format!("Applied on: {}", created_at.format_date()) }
                                                    </span>
                                                }
                                                if let Some(deadline) = application.job.as_ref().and_then(|job| job.deadline.as_ref()) {
                                                    <span class="flex items-center gap-1">
                                                        <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4" />
                                                        { format!("Deadline: {}", deadline.format_date()) }
                                                    </span>
                                                }
                                            </div>
                                        </div>
                                    </div>
                                }
                            }) }</>
                        }
                    }
                }
            </div>
        </div>
    }
}
