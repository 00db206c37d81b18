use shared::models::{Invitation, InvitationStatus};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::api::TalentXClient;
use crate::components::skeleton::CardSkeleton;
use crate::session::use_session_controller;

/// Jobseeker view of invitations received from employers, with
/// accept/decline actions.
#[function_component(InvitationsPage)]
pub fn invitations_page() -> Html {
    let invitations = use_state(Vec::<Invitation>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let controller = use_session_controller();

    {
        let invitations = invitations.clone();
        let loading = loading.clone();
        let error = error.clone();
        let controller = controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match TalentXClient::shared().my_invitations().await {
                    Ok(response) => invitations.set(response.invitations),
                    Err(err) if err.is_authentication() => controller.logout(),
                    Err(err) => {
                        log::error!("failed to fetch invitations: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let respond = {
        let invitations = invitations.clone();
        let error = error.clone();
        Callback::from(move |(id, status): (String, InvitationStatus)| {
            let invitations = invitations.clone();
            let error = error.clone();
            spawn_local(async move {
                match TalentXClient::shared().respond_invitation(&id, status).await {
                    Ok(_) => {
                        let updated = (*invitations)
                            .clone()
                            .into_iter()
                            .map(|mut invitation| {
                                if invitation.id == id {
                                    invitation.status = status;
                                }
                                invitation
                            })
                            .collect();
                        invitations.set(updated);
                    }
                    Err(err) => {
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let status_badge = |status: InvitationStatus| match status {
        InvitationStatus::Pending => html! { <span class="badge badge-ghost">{"Pending"}</span> },
        InvitationStatus::Accepted => html! { <span class="badge badge-success">{"Accepted"}</span> },
        InvitationStatus::Declined => html! { <span class="badge badge-error">{"Declined"}</span> },
    };

    html! {
        <div class="max-w-5xl mx-auto px-4 py-8">
            <div class="mb-8">
                <h1 class="text-3xl font-bold">{"Invitations"}</h1>
                <p class="text-base-content/60">{"Employers who want you to apply"}</p>
            </div>

            if let Some(message) = &*error {
                <div class="alert alert-error mb-6"><span>{ message.clone() }</span></div>
            }

            <div class="space-y-4">
                {
                    if *loading {
                        html! { <>{ for (0..3).map(|_| html! { <CardSkeleton /> }) }</> }
                    } else if invitations.is_empty() {
                        html! {
                            <div class="card bg-base-100 shadow text-center py-12">
                                <div class="card-body items-center">
                                    <Icon icon_id={IconId::HeroiconsOutlineEnvelope} class="w-12 h-12 text-base-content/30" />
                                    <h3 class="text-lg font-semibold">{"No Invitations"}</h3>
                                    <p class="text-base-content/60">{"Invitations from employers will show up here."}</p>
                                </div>
                            </div>
                        }
                    } else {
                        html! {
                            <>{ for invitations.iter().map(|invitation| {
                                let job_title = invitation
                                    .job
                                    .as_ref()
                                    .map_or("Job Unavailable", |job| job.title.as_str());
                                let company = invitation
                                    .job
                                    .as_ref()
                                    .map_or("", |job| job.company_name.as_str());
                                let actions = if invitation.status == InvitationStatus::Pending {
                                    let accept = {
                                        let respond = respond.clone();
                                        let id = invitation.id.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            respond.emit((id.clone(), InvitationStatus::Accepted));
                                        })
                                    };
                                    let decline = {
                                        let respond = respond.clone();
                                        let id = invitation.id.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            respond.emit((id.clone(), InvitationStatus::Declined));
                                        })
                                    };
                                    html! {
                                        <div class="card-actions justify-end">
                                            <button class="btn btn-success btn-sm" onclick={accept}>
                                                <Icon icon_id={IconId::HeroiconsOutlineCheckCircle} class="w-4 h-4" />
                                                {"Accept"}
                                            </button>
                                            <button class="btn btn-ghost btn-sm" onclick={decline}>{"Decline"}</button>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                };
                                html! {
                                    <div class="card bg-base-100 shadow">
                                        <div class="card-body">
                                            <div class="flex items-start justify-between">
                                                <div>
                                                    <h3 class="card-title text-lg">{ job_title }</h3>
                                                    <p class="text-base-content/70">{ company }</p>
                                                </div>
                                                { status_badge(invitation.status) }
                                            </div>
                                            if let Some(created_at) = &invitation.created_at {
                                                <p class="text-sm text-base-content/60">
                                                    { format!("Received: {}", created_at.format_date()) }
                                                </p>
                                            }
                                            { actions }
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
