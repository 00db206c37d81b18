use serde::{Deserialize, Serialize};

/// The error envelope returned by the backend on any non-2xx response.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The backend-provided error message.
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new error envelope with the given message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let error = ErrorResponse::new("Email already registered");
        assert_eq!(error.error, "Email already registered");
    }

    #[test]
    fn test_error_response_display() {
        let error = ErrorResponse::new("Invalid credentials");
        assert_eq!(error.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_error_response_deserialization() {
        let json = r#"{"error":"Password must be at least 8 characters"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.error, "Password must be at least 8 characters");
    }

    #[test]
    fn test_error_response_as_error() {
        let error = ErrorResponse::new("boom");
        let error_trait: &dyn std::error::Error = &error;
        assert_eq!(error_trait.to_string(), "boom");
    }
}
