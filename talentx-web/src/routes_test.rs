//! Tests for the routing system
//!
//! Validates route definitions, path recognition, role gates and the
//! navigation decision table driving the route guard.

#[cfg(test)]
mod tests {
    use crate::routes::{MainRoute, NavigationDecision, authorize};
    use crate::session::Session;
    use shared::models::{User, UserRole};
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    fn user(role: UserRole) -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role,
            company_name: None,
            skills: None,
        }
    }

    /// Tests route path recognition
    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
        assert_eq!(MainRoute::recognize("/signup"), Some(MainRoute::Signup));
        assert_eq!(MainRoute::recognize("/jobs"), Some(MainRoute::Jobs));
        assert_eq!(MainRoute::recognize("/dashboard"), Some(MainRoute::Dashboard));
        assert_eq!(MainRoute::recognize("/jobs/create"), Some(MainRoute::CreateJob));
        assert_eq!(
            MainRoute::recognize("/my-applications"),
            Some(MainRoute::MyApplications)
        );
        assert_eq!(
            MainRoute::recognize("/invitations"),
            Some(MainRoute::Invitations)
        );
    }

    /// Tests job-id parameter parsing
    #[test]
    fn test_job_applications_parameter() {
        let route = MainRoute::recognize("/jobs/64f1c0ffee/applications");
        assert_eq!(
            route,
            Some(MainRoute::JobApplications {
                id: "64f1c0ffee".to_string()
            })
        );
        let route = route.unwrap();
        assert_eq!(route.to_path(), "/jobs/64f1c0ffee/applications");
    }

    /// Unknown paths fall back to the not-found route
    #[test]
    fn test_unknown_path_falls_back() {
        assert_eq!(
            MainRoute::recognize("/does-not-exist"),
            Some(MainRoute::NotFound)
        );
    }

    /// Tests the role gate table
    #[test]
    fn test_required_roles() {
        for route in MainRoute::iter() {
            let expected = match route {
                MainRoute::Dashboard
                | MainRoute::CreateJob
                | MainRoute::JobApplications { .. } => Some(UserRole::Employer),
                MainRoute::MyApplications | MainRoute::Invitations => Some(UserRole::Jobseeker),
                _ => None,
            };
            assert_eq!(route.required_role(), expected, "route {route:?}");
        }
    }

    /// While loading, no navigation decision is made regardless of the
    /// rest of the state.
    #[test]
    fn test_authorize_loading() {
        let session = Session::default();
        assert_eq!(
            authorize(&session, Some(UserRole::Employer)),
            NavigationDecision::Loading
        );
        assert_eq!(authorize(&session, None), NavigationDecision::Loading);
    }

    /// Anonymous sessions always redirect to the login view.
    #[test]
    fn test_authorize_anonymous_redirects_to_login() {
        let session = Session::anonymous();
        assert_eq!(
            authorize(&session, None),
            NavigationDecision::RedirectTo(MainRoute::Login)
        );
        assert_eq!(
            authorize(&session, Some(UserRole::Jobseeker)),
            NavigationDecision::RedirectTo(MainRoute::Login)
        );
    }

    /// A role mismatch redirects home instead of rendering.
    #[test]
    fn test_authorize_role_mismatch_redirects_home() {
        let session = Session::authenticated(user(UserRole::Jobseeker));
        assert_eq!(
            authorize(&session, Some(UserRole::Employer)),
            NavigationDecision::RedirectTo(MainRoute::Home)
        );
    }

    /// A matching role renders the guarded content.
    #[test]
    fn test_authorize_matching_role_renders() {
        let session = Session::authenticated(user(UserRole::Employer));
        assert_eq!(
            authorize(&session, Some(UserRole::Employer)),
            NavigationDecision::Render
        );
        assert_eq!(authorize(&session, None), NavigationDecision::Render);
    }
}
