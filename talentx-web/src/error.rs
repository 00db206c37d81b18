//! Failure taxonomy for backend interactions.
//!
//! Service calls never catch errors; they surface an [`ApiError`] to the
//! calling page, which is responsible for turning it into user-visible
//! text. Role mismatches never reach this type; the route guard handles
//! them as silent redirects.

use reqwest::StatusCode;
use shared::models::ErrorResponse;
use thiserror::Error;

/// A failed backend interaction, classified for display.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response: transport failure,
    /// timeout, or an undecodable body.
    #[error("Unable to reach the server. Please try again.")]
    Network(#[from] reqwest::Error),

    /// The backend rejected the submitted data (4xx other than 401/403).
    #[error("{0}")]
    Validation(String),

    /// Bad credentials or an invalid/expired token (401).
    #[error("{0}")]
    Authentication(String),

    /// The authenticated account may not perform this operation (403).
    #[error("{0}")]
    Authorization(String),

    /// The backend failed internally (5xx).
    #[error("{0}")]
    Server(String),
}

impl ApiError {
    /// Classify a non-2xx response, preferring the backend's own message.
    pub fn from_status(status: StatusCode, body: Option<ErrorResponse>) -> Self {
        let message = body.map(|body| body.error);
        match status {
            StatusCode::UNAUTHORIZED => Self::Authentication(
                message.unwrap_or_else(|| "Invalid credentials".to_string()),
            ),
            StatusCode::FORBIDDEN => Self::Authorization(
                message.unwrap_or_else(|| "You do not have access to this resource".to_string()),
            ),
            status if status.is_client_error() => Self::Validation(
                message.unwrap_or_else(|| "The submitted data was rejected".to_string()),
            ),
            _ => Self::Server(
                message.unwrap_or_else(|| "Something went wrong. Please try again.".to_string()),
            ),
        }
    }

    /// Whether the failure means the presented token is no longer valid.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_authentication() {
        let error = ApiError::from_status(
            StatusCode::UNAUTHORIZED,
            Some(ErrorResponse::new("Invalid email or password")),
        );
        assert!(error.is_authentication());
        assert_eq!(error.to_string(), "Invalid email or password");
    }

    #[test]
    fn unauthorized_without_body_gets_generic_message() {
        let error = ApiError::from_status(StatusCode::UNAUTHORIZED, None);
        assert_eq!(error.to_string(), "Invalid credentials");
    }

    #[test]
    fn client_error_carries_backend_message_verbatim() {
        let error = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            Some(ErrorResponse::new("Password must be at least 8 characters")),
        );
        assert!(matches!(error, ApiError::Validation(_)));
        assert_eq!(error.to_string(), "Password must be at least 8 characters");
    }

    #[test]
    fn forbidden_maps_to_authorization() {
        let error = ApiError::from_status(StatusCode::FORBIDDEN, None);
        assert!(matches!(error, ApiError::Authorization(_)));
        assert!(!error.is_authentication());
    }

    #[test]
    fn server_error_falls_back_to_generic_message() {
        let error = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert!(matches!(error, ApiError::Server(_)));
        assert_eq!(error.to_string(), "Something went wrong. Please try again.");
    }
}
