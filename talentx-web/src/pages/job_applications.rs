use shared::models::{Application, CreateInvitationRequest, MatchedTalent};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::api::TalentXClient;
use crate::components::skeleton::CardSkeleton;
use crate::routes::MainRoute;
use crate::session::use_session_controller;

#[derive(Properties, PartialEq)]
pub struct JobApplicationsProps {
    /// Identifier of the posting whose applications are shown.
    pub id: String,
}

/// Employer view of one posting: applications received plus AI-matched
/// candidates who can be invited to apply.
#[function_component(JobApplicationsPage)]
pub fn job_applications_page(props: &JobApplicationsProps) -> Html {
    let applications = use_state(Vec::<Application>::new);
    let talents = use_state(Vec::<MatchedTalent>::new);
    let invited = use_state(Vec::<String>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let controller = use_session_controller();

    {
        let applications = applications.clone();
        let talents = talents.clone();
        let loading = loading.clone();
        let error = error.clone();
        let controller = controller.clone();
        use_effect_with(props.id.clone(), move |job_id| {
            let job_id = job_id.clone();
            loading.set(true);
            spawn_local(async move {
                let client = TalentXClient::shared();
                match client.job_applications(&job_id).await {
                    Ok(response) => applications.set(response.applications),
                    Err(err) if err.is_authentication() => {
                        controller.logout();
                        loading.set(false);
                        return;
                    }
                    Err(err) => {
                        log::error!("failed to fetch applications: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
                // Matches are best-effort; the applications list stands on
                // its own if the matcher is unavailable.
                match client.matched_talents(&job_id).await {
                    Ok(response) => talents.set(response.talents),
                    Err(err) => log::warn!("failed to fetch matched talents: {err}"),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let invite = {
        let invited = invited.clone();
        let error = error.clone();
        let job_id = props.id.clone();
        Callback::from(move |talent_id: String| {
            let invited = invited.clone();
            let error = error.clone();
            let request = CreateInvitationRequest {
                job_id: job_id.clone(),
                talent_id: talent_id.clone(),
            };
            spawn_local(async move {
                match TalentXClient::shared().create_invitation(&request).await {
                    Ok(_) => {
                        let mut sent = (*invited).clone();
                        sent.push(talent_id);
                        invited.set(sent);
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <div class="max-w-5xl mx-auto px-4 py-8">
            <div class="mb-6">
                <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-ghost btn-sm">
                    <Icon icon_id={IconId::HeroiconsOutlineArrowLeft} class="w-4 h-4" />
                    {"Back to Dashboard"}
                </Link<MainRoute>>
            </div>
            <h1 class="text-3xl font-bold mb-8">{"Job Applications"}</h1>

            if let Some(message) = &*error {
                <div class="alert alert-error mb-6"><span>{ message.clone() }</span></div>
            }

            {
                if *loading {
                    html! {
                        <div class="space-y-4">
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                    }
                } else if applications.is_empty() {
                    html! {
                        <div class="card bg-base-100 shadow text-center py-12">
                            <div class="card-body items-center">
                                <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-12 h-12 text-base-content/30" />
                                <p class="text-base-content/60">{"No applications for this job yet"}</p>
                            </div>
                        </div>
                    }
                } else {
                    html! {
                        <div class="space-y-4">
                            { for applications.iter().map(|application| html! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <div class="flex items-start justify-between">
                                            <div class="flex flex-wrap gap-2">
                                                { for application.talent_skills.iter().map(|skill| html! {
                                                    <span class="badge badge-ghost">{ skill }</span>
                                                }) }
                                            </div>
                                            <span class="badge badge-ghost capitalize">
                                                { format!("{:?}", application.status).to_lowercase() }
                                            </span>
                                        </div>
                                        if let Some(created_at) = &application.created_at {
                                            <p class="text-sm text-base-content/60">
                                                { format!("Applied: {}", created_at.format_date()) }
                                            </p>
                                        }
                                    </div>
                                </div>
                            }) }
                        </div>
                    }
                }
            }

            if !talents.is_empty() {
                <div class="mt-10">
                    <h2 class="text-xl font-semibold flex items-center gap-2 mb-4">
                        <Icon icon_id={IconId::HeroiconsOutlineSparkles} class="w-5 h-5 text-primary" />
                        {"AI-Matched Talents"}
                    </h2>
                    <div class="grid md:grid-cols-2 gap-4">
                        { for talents.iter().map(|talent| {
                            let already_invited = invited.iter().any(|id| id == &talent.id);
                            let onclick = {
                                let invite = invite.clone();
                                let talent_id = talent.id.clone();
                                Callback::from(move |_: MouseEvent| invite.emit(talent_id.clone()))
                            };
                            html! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <div class="flex items-start justify-between">
                                            <div>
                                                <h3 class="font-semibold">{ &talent.name }</h3>
                                                <p class="text-sm text-base-content/60">{ &talent.email }</p>
                                            </div>
                                            if let Some(score) = talent.score {
                                                <span class="badge badge-primary">
                                                    { format!("{:.0}% match", score * 100.0) }
                                                </span>
                                            }
                                        </div>
                                        <div class="flex flex-wrap gap-2">
                                            { for talent.skills.iter().take(4).map(|skill| html! {
                                                <span class="badge badge-ghost">{ skill }</span>
                                            }) }
                                        </div>
                                        <div class="card-actions justify-end">
                                            <button class="btn btn-primary btn-sm" {onclick} disabled={already_invited}>
                                                <Icon icon_id={IconId::HeroiconsOutlineEnvelope} class="w-4 h-4" />
                                                { if already_invited { "Invited" } else { "Invite to Apply" } }
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            }
        </div>
    }
}
