use serde::{Deserialize, Serialize};

use super::{Job, Timestamp};

/// Review state of an application.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Reviewed,
}

/// A jobseeker's application to a posting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Unique identifier for the application.
    #[serde(alias = "_id")]
    pub id: String,

    /// The posting applied to; populated by the backend under `jobId`.
    #[serde(rename = "jobId", default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,

    /// Snapshot of the applicant's skills at submission time.
    #[serde(default)]
    pub talent_skills: Vec<String>,

    /// Review state.
    #[serde(default)]
    pub status: ApplicationStatus,

    /// Submission instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Payload for `POST /applications`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    /// Identifier of the posting to apply to.
    pub job_id: String,
}

/// Envelope for application list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationsResponse {
    pub applications: Vec<Application>,
}

/// Envelope returned when an application is created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplicationResponse {
    pub application: Application,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_deserializes_populated_job() {
        let json = r#"{
            "_id": "a1",
            "jobId": {"_id": "j1", "title": "ML Engineer", "companyName": "Acme Inc.",
                      "deadline": "2026-09-01T00:00:00Z"},
            "talentSkills": ["Python", "NLP"],
            "status": "pending",
            "createdAt": "2026-08-01T09:00:00Z"
        }"#;
        let application: Application = serde_json::from_str(json).unwrap();
        let job = application.job.as_ref().unwrap();
        assert_eq!(job.title, "ML Engineer");
        assert_eq!(application.talent_skills, vec!["Python", "NLP"]);
        assert_eq!(application.status, ApplicationStatus::Pending);
    }

    #[test]
    fn application_tolerates_missing_job() {
        let json = r#"{"_id": "a2", "status": "reviewed"}"#;
        let application: Application = serde_json::from_str(json).unwrap();
        assert!(application.job.is_none());
        assert_eq!(application.status, ApplicationStatus::Reviewed);
    }

    #[test]
    fn create_application_request_wire_format() {
        let request = CreateApplicationRequest {
            job_id: "j1".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"jobId":"j1"}"#
        );
    }
}
