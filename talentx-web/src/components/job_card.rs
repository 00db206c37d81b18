use shared::models::Job;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct JobCardProps {
    pub job: Job,
    #[prop_or_default]
    pub selected: bool,
    pub on_select: Callback<Job>,
}

/// Summary card in the job list; clicking selects the posting for the
/// detail panel.
#[function_component(JobCard)]
pub fn job_card(props: &JobCardProps) -> Html {
    let job = props.job.clone();
    let onclick = {
        let job = job.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(job.clone()))
    };

    let ring = if props.selected { "ring-2 ring-primary" } else { "" };
    let shown_skills = job.tech_stack.iter().take(4).cloned().collect::<Vec<_>>();
    let extra_skills = job.tech_stack.len().saturating_sub(4);

    html! {
        <div class={classes!("card", "bg-base-100", "shadow", "cursor-pointer", "hover:shadow-lg", "transition-shadow", ring)} {onclick}>
            <div class="card-body">
                <div class="flex items-start justify-between">
                    <div>
                        <h3 class="card-title text-lg">{ &job.title }</h3>
                        <p class="text-base-content/70">{ &job.company_name }</p>
                    </div>
                    <span class="badge badge-primary">{"Active"}</span>
                </div>
                <div class="flex flex-wrap gap-2">
                    { for shown_skills.iter().map(|tech| html! {
                        <span class="badge badge-ghost">{ tech }</span>
                    }) }
                    if extra_skills > 0 {
                        <span class="badge badge-ghost">{ format!("+{extra_skills}") }</span>
                    }
                </div>
                <div class="flex items-center gap-4 text-sm text-base-content/60">
                    if let Some(deadline) = &job.deadline {
                        <span class="flex items-center gap-1">
                            <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4" />
                            { format!("Deadline: {}", deadline.format_date()) }
                        </span>
                    }
                    <span class="flex items-center gap-1">
                        <Icon icon_id={IconId::HeroiconsOutlineBriefcase} class="w-4 h-4" />
                        { format!("{} applications", job.applications_count) }
                    </span>
                </div>
            </div>
        </div>
    }
}
