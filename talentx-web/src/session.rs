//! Session state and lifecycle.
//!
//! [`Session`] is the process-wide reactive record of the current
//! authenticated identity; [`SessionController`] owns every mutation of it
//! (bootstrap, login, signup, logout) and keeps the persisted store in
//! step. All other components only read the session through the store.
//!
//! Bootstrap, login and signup are the only suspending operations. They
//! are expected to run to completion before the UI issues the next
//! state-changing operation; if two overlap, whichever completion lands
//! last wins. That is an accepted last-write-wins hazard; the UI never
//! fires them concurrently in practice and no locking is added for it.

use shared::models::{AuthResponse, LoginRequest, SignupRequest, User, UserRole};
use yew::functional::hook;
use yewdux::prelude::*;

use crate::api::TalentXClient;
use crate::error::ApiError;
use crate::storage;

/// The current authenticated identity, shared through yewdux.
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct Session {
    /// The signed-in account, once validated.
    pub user: Option<User>,
    /// True iff `user` is present and the backend vouched for the token
    /// during this page load.
    pub is_authenticated: bool,
    /// True only while the initial bootstrap check is in flight. While
    /// set, `is_authenticated` must not be branched on.
    pub is_loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        // The process starts in the loading state: a persisted token is
        // not trusted until bootstrap has revalidated it.
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
        }
    }
}

impl Session {
    /// A settled session for a validated account.
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
        }
    }

    /// A settled session with nobody signed in.
    pub fn anonymous() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: false,
        }
    }

    /// The signed-in account's role, if any.
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().map(|user| user.role)
    }
}

/// Owns all session mutations. Obtained via [`use_session_controller`];
/// constructed explicitly in tests.
#[derive(Clone)]
pub struct SessionController {
    client: TalentXClient,
    dispatch: Dispatch<Session>,
}

impl SessionController {
    /// Create a controller over the given client and store handle.
    pub fn new(client: TalentXClient, dispatch: Dispatch<Session>) -> Self {
        Self { client, dispatch }
    }

    /// One-time startup check: revalidate any persisted token.
    ///
    /// Without a token this settles to anonymous without touching the
    /// backend. With one, `GET /auth/me` decides: success refreshes the
    /// persisted user record and authenticates the session; any failure
    /// (network or rejection) clears the persisted session entirely.
    pub async fn bootstrap(&self) {
        if storage::token().is_none() {
            self.dispatch.set(Session::anonymous());
            return;
        }
        match self.client.me().await {
            Ok(response) => {
                storage::set_user(&response.user);
                self.dispatch.set(Session::authenticated(response.user));
            }
            Err(err) => {
                log::warn!("session bootstrap failed, discarding stored token: {err}");
                storage::clear();
                self.dispatch.set(Session::anonymous());
            }
        }
    }

    /// Authenticate with credentials. On success the token and user are
    /// persisted and the session authenticated; the user record is
    /// returned so the caller can pick a role-keyed destination. On
    /// failure nothing changes and the error propagates.
    pub async fn login(&self, email: String, password: String) -> Result<User, ApiError> {
        let request = LoginRequest { email, password };
        let AuthResponse { token, user } = self.client.login(&request).await?;
        Ok(self.establish(&token, user))
    }

    /// Register a new account. Same contract as [`Self::login`].
    pub async fn signup(&self, request: SignupRequest) -> Result<User, ApiError> {
        let AuthResponse { token, user } = self.client.signup(&request).await?;
        Ok(self.establish(&token, user))
    }

    /// Drop the session. Synchronous, always succeeds, idempotent; the
    /// backend is not involved.
    pub fn logout(&self) {
        storage::clear();
        self.dispatch.set(Session::anonymous());
    }

    fn establish(&self, token: &str, user: User) -> User {
        storage::set_token(token);
        storage::set_user(&user);
        self.dispatch.set(Session::authenticated(user.clone()));
        user
    }
}

/// Controller handle over the shared API client and the session store of
/// the surrounding yewdux root.
#[hook]
pub fn use_session_controller() -> SessionController {
    let dispatch = use_dispatch::<Session>();
    SessionController::new(TalentXClient::shared(), dispatch)
}
