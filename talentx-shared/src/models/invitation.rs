use serde::{Deserialize, Serialize};

use super::{Job, Timestamp};

/// State of an invitation sent by an employer to a candidate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

/// An invitation to apply to a posting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    /// Unique identifier for the invitation.
    #[serde(alias = "_id")]
    pub id: String,

    /// The posting the candidate is invited to; populated under `jobId`.
    #[serde(rename = "jobId", default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,

    /// Current state.
    #[serde(default)]
    pub status: InvitationStatus,

    /// Creation instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Payload for `POST /invitations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationRequest {
    /// Posting the invitation is for.
    pub job_id: String,

    /// Candidate being invited.
    pub talent_id: String,
}

/// Payload for `PATCH /invitations/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateInvitationRequest {
    /// The new state; `accepted` or `declined`.
    pub status: InvitationStatus,
}

/// Envelope for `GET /invitations/my`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvitationsResponse {
    pub invitations: Vec<Invitation>,
}

/// Envelope returned when an invitation is created or updated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvitationResponse {
    pub invitation: Invitation,
}

/// Envelope for `GET /ai/matched-jobs`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchedJobsResponse {
    pub jobs: Vec<Job>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invitation_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&InvitationStatus::Accepted).unwrap(),
            "\"accepted\""
        );
        let status: InvitationStatus = serde_json::from_str("\"declined\"").unwrap();
        assert_eq!(status, InvitationStatus::Declined);
    }

    #[test]
    fn invitation_deserializes_with_defaults() {
        let json = r#"{"_id": "i1", "jobId": {"_id": "j1", "title": "ML Engineer"}}"#;
        let invitation: Invitation = serde_json::from_str(json).unwrap();
        assert_eq!(invitation.status, InvitationStatus::Pending);
        assert_eq!(invitation.job.unwrap().title, "ML Engineer");
    }

    #[test]
    fn update_request_wire_format() {
        let request = UpdateInvitationRequest {
            status: InvitationStatus::Accepted,
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"status":"accepted"}"#
        );
    }
}
