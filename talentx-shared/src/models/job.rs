use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Lifecycle state of a posting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Active,
    Closed,
}

/// A job posting.
///
/// Listing endpoints return partially populated documents (e.g. an
/// application's `jobId` reference carries only title, company and
/// deadline), so everything beyond the identity fields is defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique identifier for the posting.
    #[serde(alias = "_id")]
    pub id: String,

    /// Job title.
    pub title: String,

    /// Name of the posting company.
    #[serde(default)]
    pub company_name: String,

    /// Generated job description, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Required skills.
    #[serde(default)]
    pub tech_stack: Vec<String>,

    /// Application deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Timestamp>,

    /// Posting state.
    #[serde(default)]
    pub status: JobStatus,

    /// Number of applications received so far.
    #[serde(default)]
    pub applications_count: u32,

    /// Creation instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Payload for `POST /jobs`. The deadline is a calendar date
/// (`YYYY-MM-DD`) as produced by the date input; the backend expands it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    /// Job title.
    pub title: String,

    /// Required skills used by the AI matcher.
    pub tech_stack: Vec<String>,

    /// Application deadline date.
    pub deadline: String,
}

/// Envelope for job list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
}

/// Envelope for single-job endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobResponse {
    pub job: Job,
}

/// A candidate surfaced by the AI matcher for a posting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchedTalent {
    /// Unique identifier of the candidate account.
    #[serde(alias = "_id")]
    pub id: String,

    /// Candidate display name.
    pub name: String,

    /// Candidate email address.
    pub email: String,

    /// Candidate skills.
    #[serde(default)]
    pub skills: Vec<String>,

    /// Match score assigned by the backend, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

/// Envelope for `GET /jobs/ai/matched-talents/:jobId`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchedTalentsResponse {
    pub talents: Vec<MatchedTalent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_deserializes_listing_document() {
        let json = r#"{
            "_id": "j1",
            "title": "Senior ML Engineer",
            "companyName": "Acme Inc.",
            "techStack": ["Python", "PyTorch", "MLOps"],
            "deadline": "2026-09-01T00:00:00.000Z",
            "status": "active",
            "applicationsCount": 4
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, "j1");
        assert_eq!(job.company_name, "Acme Inc.");
        assert_eq!(job.tech_stack.len(), 3);
        assert_eq!(job.status, JobStatus::Active);
        assert_eq!(job.applications_count, 4);
        assert!(job.description.is_none());
    }

    #[test]
    fn job_defaults_sparse_reference() {
        // The populated `jobId` reference inside an application carries
        // only a subset of fields.
        let json = r#"{"_id": "j2", "title": "Data Scientist"}"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.status, JobStatus::Active);
        assert!(job.tech_stack.is_empty());
        assert_eq!(job.applications_count, 0);
        assert!(job.deadline.is_none());
    }

    #[test]
    fn create_job_request_wire_format() {
        let request = CreateJobRequest {
            title: "ML Engineer".to_string(),
            tech_stack: vec!["Rust".to_string(), "LLM".to_string()],
            deadline: "2026-10-31".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"techStack\":[\"Rust\",\"LLM\"]"));
        assert!(json.contains("\"deadline\":\"2026-10-31\""));
    }

    #[test]
    fn job_status_rejects_unknown_value() {
        assert!(serde_json::from_str::<JobStatus>("\"archived\"").is_err());
    }

    #[test]
    fn matched_talents_envelope() {
        let json = r#"{"talents":[{"_id":"t1","name":"Ada","email":"ada@example.com","skills":["Python"],"score":0.92}]}"#;
        let response: MatchedTalentsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.talents.len(), 1);
        assert_eq!(response.talents[0].name, "Ada");
        assert!(response.talents[0].score.unwrap() > 0.9);
    }
}
