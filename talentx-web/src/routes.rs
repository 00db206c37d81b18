//! Route table, navigation decisions and the main switch.

use shared::models::UserRole;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::containers::layout::Layout;
use crate::pages::*;
use crate::session::Session;

/// The navigable routes of the application.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/jobs")]
    Jobs,
    #[at("/dashboard")]
    Dashboard,
    #[at("/jobs/create")]
    CreateJob,
    #[at("/jobs/:id/applications")]
    JobApplications { id: String },
    #[at("/my-applications")]
    MyApplications,
    #[at("/invitations")]
    Invitations,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// The role an account must hold to visit this route, if the route is
    /// gated at all.
    pub fn required_role(&self) -> Option<UserRole> {
        match self {
            Self::Dashboard | Self::CreateJob | Self::JobApplications { .. } => {
                Some(UserRole::Employer)
            }
            Self::MyApplications | Self::Invitations => Some(UserRole::Jobseeker),
            Self::Home | Self::Login | Self::Signup | Self::Jobs | Self::NotFound => None,
        }
    }
}

/// Outcome of a route-guard evaluation, decoupled from rendering so it can
/// be tested without a UI harness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Bootstrap has not settled yet; show a neutral placeholder.
    Loading,
    /// Render the guarded content.
    Render,
    /// Replace the current history entry with this route.
    RedirectTo(MainRoute),
}

/// Decide what a guarded view should do for the given session.
///
/// Evaluated per render, never cached; a role or session change is
/// reflected on the next render without a reload.
pub fn authorize(session: &Session, required_role: Option<UserRole>) -> NavigationDecision {
    if session.is_loading {
        return NavigationDecision::Loading;
    }
    if !session.is_authenticated {
        return NavigationDecision::RedirectTo(MainRoute::Login);
    }
    if let Some(required) = required_role {
        if session.role() != Some(required) {
            return NavigationDecision::RedirectTo(MainRoute::Home);
        }
    }
    NavigationDecision::Render
}

#[derive(Properties, PartialEq)]
struct MainRouteViewProps {
    route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    match props.route.clone() {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Signup => html! { <SignupPage /> },
        MainRoute::Jobs => html! {
            <Layout current_route={MainRoute::Jobs}>
                <JobsPage />
            </Layout>
        },
        MainRoute::Dashboard => guarded(MainRoute::Dashboard, html! { <DashboardPage /> }),
        MainRoute::CreateJob => guarded(MainRoute::CreateJob, html! { <CreateJobPage /> }),
        MainRoute::JobApplications { id } => guarded(
            MainRoute::JobApplications { id: id.clone() },
            html! { <JobApplicationsPage {id} /> },
        ),
        MainRoute::MyApplications => {
            guarded(MainRoute::MyApplications, html! { <MyApplicationsPage /> })
        }
        MainRoute::Invitations => guarded(MainRoute::Invitations, html! { <InvitationsPage /> }),
        MainRoute::NotFound => html! {
            <Layout current_route={MainRoute::NotFound}>
                <ErrorPage />
            </Layout>
        },
    }
}

fn guarded(route: MainRoute, content: Html) -> Html {
    let required_role = route.required_role();
    html! {
        <RouteGuard {required_role}>
            <Layout current_route={route}>
                {content}
            </Layout>
        </RouteGuard>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    html! { <MainRouteView {route} /> }
}
