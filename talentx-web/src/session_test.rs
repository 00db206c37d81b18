//! Tests for session state transitions
//!
//! The pure transitions are exercised on the host; the logout path, which
//! touches browser storage, runs under wasm-bindgen-test.

#[cfg(test)]
mod tests {
    use crate::session::Session;
    use shared::models::{User, UserRole};

    fn employer() -> User {
        User {
            id: "u1".to_string(),
            name: "Acme HR".to_string(),
            email: "hr@acme.test".to_string(),
            role: UserRole::Employer,
            company_name: Some("Acme Inc.".to_string()),
            skills: None,
        }
    }

    /// The process starts loading; nothing may branch on
    /// `is_authenticated` yet.
    #[test]
    fn default_session_is_loading() {
        let session = Session::default();
        assert!(session.is_loading);
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
    }

    #[test]
    fn authenticated_session_carries_user() {
        let session = Session::authenticated(employer());
        assert!(session.is_authenticated);
        assert!(!session.is_loading);
        assert_eq!(session.role(), Some(UserRole::Employer));
        assert_eq!(session.user.unwrap().name, "Acme HR");
    }

    #[test]
    fn anonymous_session_is_settled_and_empty() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated);
        assert!(!session.is_loading);
        assert!(session.user.is_none());
        assert_eq!(session.role(), None);
    }

    /// `is_authenticated` implies a user record is present, in every
    /// constructible settled state.
    #[test]
    fn authenticated_implies_user_present() {
        for session in [
            Session::default(),
            Session::anonymous(),
            Session::authenticated(employer()),
        ] {
            if session.is_authenticated {
                assert!(session.user.is_some());
            }
        }
    }

    #[test]
    fn anonymous_is_idempotent() {
        assert_eq!(Session::anonymous(), Session::anonymous());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::api::TalentXClient;
    use crate::session::{Session, SessionController};
    use crate::storage;
    use wasm_bindgen_test::*;
    use yewdux::prelude::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn logout_clears_storage_and_state() {
        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<Session>::new(&cx);
        let controller = SessionController::new(TalentXClient::new("/api"), dispatch.clone());

        storage::set_token("tok-123");
        controller.logout();
        assert!(storage::token().is_none());
        assert!(storage::user().is_none());
        assert_eq!(*dispatch.get(), Session::anonymous());

        // Logging out twice has the same effect as once.
        controller.logout();
        assert_eq!(*dispatch.get(), Session::anonymous());
    }
}
