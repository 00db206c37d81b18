use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Account role assigned at signup; immutable afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Employer,
    Jobseeker,
}

impl UserRole {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employer => "employer",
            Self::Jobseeker => "jobseeker",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "employer" => Ok(Self::Employer),
            "jobseeker" => Ok(Self::Jobseeker),
            _ => Err("unknown user role"),
        }
    }
}

/// Represents an account in the marketplace.
///
/// The backend stores documents with an `_id` key; both `id` and `_id`
/// are accepted when deserializing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user.
    #[serde(alias = "_id")]
    pub id: String,

    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// The account role.
    pub role: UserRole,

    /// Company name; present for employer accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Skill list; present for jobseeker accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// Registration payload for `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// The new user's display name.
    pub name: String,

    /// The new user's email address.
    pub email: String,

    /// The new user's password.
    pub password: String,

    /// The requested account role.
    pub role: UserRole,

    /// Company name; required by the backend for employer accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Skills; required by the backend for jobseeker accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// Credentials payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The account email address.
    pub email: String,

    /// The account password.
    pub password: String,
}

/// Response to a successful login or signup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Opaque bearer token issued by the backend.
    pub token: String,

    /// The authenticated account.
    pub user: User,
}

/// Response to `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeResponse {
    /// The account the presented token belongs to.
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobseeker() -> User {
        User {
            id: "64f1c0ffee".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: UserRole::Jobseeker,
            company_name: None,
            skills: Some(vec!["Python".to_string(), "PyTorch".to_string()]),
        }
    }

    #[test]
    fn user_role_roundtrip() {
        for (text, role) in [
            ("employer", UserRole::Employer),
            ("jobseeker", UserRole::Jobseeker),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(UserRole::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn user_role_invalid() {
        assert!(UserRole::from_str("admin").is_err());
        assert!(UserRole::from_str("talent").is_err());
    }

    #[test]
    fn user_deserializes_mongo_id() {
        let json = r#"{
            "_id": "64f1c0ffee",
            "name": "Ada",
            "email": "ada@example.com",
            "role": "jobseeker",
            "skills": ["Python", "PyTorch"]
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user, jobseeker());
    }

    #[test]
    fn user_serializes_camel_case() {
        let user = User {
            id: "1".to_string(),
            name: "Acme HR".to_string(),
            email: "hr@acme.test".to_string(),
            role: UserRole::Employer,
            company_name: Some("Acme Inc.".to_string()),
            skills: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"companyName\":\"Acme Inc.\""));
        assert!(json.contains("\"role\":\"employer\""));
        assert!(!json.contains("skills"));
    }

    #[test]
    fn signup_request_omits_absent_role_fields() {
        let request = SignupRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "correct horse".to_string(),
            role: UserRole::Jobseeker,
            company_name: None,
            skills: Some(vec!["Rust".to_string()]),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"skills\":[\"Rust\"]"));
        assert!(!json.contains("companyName"));
    }

    #[test]
    fn auth_response_roundtrip() {
        let response = AuthResponse {
            token: "tok-123".to_string(),
            user: jobseeker(),
        };
        let json = serde_json::to_string(&response).unwrap();
        let parsed: AuthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }
}
