//! Persisted-session store.
//!
//! Two origin-scoped `LocalStorage` entries: the opaque bearer token and
//! the serialized user record. Purely mechanical persistence: nothing here
//! validates the token; a stored token is only trusted after the session
//! controller revalidates it against the backend.

use gloo_storage::{LocalStorage, Storage};
use shared::models::User;

const TOKEN_KEY: &str = "talentx.token";
const USER_KEY: &str = "talentx.user";

/// The persisted bearer token, if any.
pub fn token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

/// Persist the bearer token.
pub fn set_token(token: &str) {
    if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
        log::error!("failed to persist auth token: {err}");
    }
}

/// The persisted user record, if any.
pub fn user() -> Option<User> {
    LocalStorage::get(USER_KEY).ok()
}

/// Persist the user record.
pub fn set_user(user: &User) {
    if let Err(err) = LocalStorage::set(USER_KEY, user) {
        log::error!("failed to persist user record: {err}");
    }
}

/// Remove both entries. Idempotent.
pub fn clear() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::models::UserRole;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: UserRole::Jobseeker,
            company_name: None,
            skills: Some(vec!["Rust".to_string()]),
        }
    }

    #[wasm_bindgen_test]
    fn token_round_trip() {
        set_token("tok-123");
        assert_eq!(token().as_deref(), Some("tok-123"));
        clear();
    }

    #[wasm_bindgen_test]
    fn user_round_trip() {
        let stored = sample_user();
        set_user(&stored);
        assert_eq!(user(), Some(stored));
        clear();
    }

    #[wasm_bindgen_test]
    fn clear_removes_both_entries() {
        set_token("tok-123");
        set_user(&sample_user());
        clear();
        assert!(token().is_none());
        assert!(user().is_none());
        // Clearing twice has the same effect as clearing once.
        clear();
        assert!(token().is_none());
    }
}
