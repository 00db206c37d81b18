use i18nrs::yew::use_translation;
use shared::models::UserRole;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::components::user_dropdown::UserDropdown;
use crate::routes::MainRoute;
use crate::session::Session;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

/// Navigation links shown in the navbar for the given role. Anonymous
/// visitors only see the public job list.
fn nav_links(role: Option<UserRole>) -> Vec<(MainRoute, &'static str, IconId)> {
    match role {
        Some(UserRole::Employer) => vec![
            (
                MainRoute::Dashboard,
                "nav.dashboard",
                IconId::HeroiconsOutlineSquares2X2,
            ),
            (
                MainRoute::CreateJob,
                "nav.post_job",
                IconId::HeroiconsOutlineBriefcase,
            ),
        ],
        Some(UserRole::Jobseeker) => vec![
            (
                MainRoute::Jobs,
                "nav.find_jobs",
                IconId::HeroiconsOutlineBriefcase,
            ),
            (
                MainRoute::MyApplications,
                "nav.my_applications",
                IconId::HeroiconsOutlineUserCircle,
            ),
            (
                MainRoute::Invitations,
                "nav.invitations",
                IconId::HeroiconsOutlineEnvelope,
            ),
        ],
        None => vec![(
            MainRoute::Jobs,
            "nav.find_jobs",
            IconId::HeroiconsOutlineBriefcase,
        )],
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let session = use_selector(|state: &Session| state.clone());
    let user_opt = session.user.clone();
    let is_authenticated = session.is_authenticated;

    let render_links = || -> Html {
        html! {
            { for nav_links(session.role()).into_iter().map(|(route, label, icon)| {
                let active_class = if props.current_route.as_ref() == Some(&route) {
                    "btn-soft"
                } else {
                    ""
                };
                html! {
                    <li>
                        <Link<MainRoute> to={route} classes={classes!("btn", "btn-ghost", "gap-2", active_class)}>
                            <Icon icon_id={icon} class="w-4 h-4" />
                            {i18n.t(label)}
                        </Link<MainRoute>>
                    </li>
                }
            }) }
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-100 border-b border-base-300 sticky top-0 z-50">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="flex items-center gap-2 text-lg font-bold">
                    <Icon icon_id={IconId::HeroiconsSolidBriefcase} class="w-6 h-6 text-primary" />
                    {i18n.t("app.title")}
                </Link<MainRoute>>
            </a>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft">
                    <i class="fa-solid fa-bars text-lg"></i>
                </button>
                <ul
                    tabindex="0"
                    class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                    { render_links() }
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                { render_links() }
            </ul>
            <div class="hidden sm:flex items-center gap-2">
                {
                    user_opt.as_ref().map_or_else(
                        || html! {
                            <>
                                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-sm">
                                    {i18n.t("header.login")}
                                </Link<MainRoute>>
                                <Link<MainRoute> to={MainRoute::Signup} classes="btn btn-primary btn-sm">
                                    {i18n.t("header.signup")}
                                </Link<MainRoute>>
                            </>
                        },
                        |user| html! {
                            <>
                                <span class="text-sm text-base-content/80 mr-2">{ &user.name }</span>
                                <UserDropdown />
                            </>
                        },
                    )
                }
            </div>
            <div class="sm:hidden flex items-center gap-2">
                {
                    if is_authenticated {
                        html! { <UserDropdown /> }
                    } else {
                        html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-ghost btn-sm">
                                <i class="fa-solid fa-right-to-bracket text-lg"></i>
                            </Link<MainRoute>>
                        }
                    }
                }
            </div>
        </nav>
    }
}
