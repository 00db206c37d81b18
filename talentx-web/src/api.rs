//! REST client for the TalentX backend.
//!
//! A single configured [`reqwest::Client`] behind a thin wrapper: base URL
//! handling, JSON bodies, and a bearer credential attached to every request
//! from the persisted session token. Non-2xx responses are decoded as the
//! backend's error envelope and classified into [`ApiError`]. No retry and
//! no backoff: a failed call fails immediately and is the caller's
//! responsibility to surface.

use once_cell::unsync::OnceCell;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::models::{
    ApplicationResponse, ApplicationsResponse, AuthResponse, CreateApplicationRequest,
    CreateInvitationRequest, CreateJobRequest, ErrorResponse, InvitationResponse,
    InvitationStatus, InvitationsResponse, JobResponse, JobsResponse, LoginRequest,
    MatchedJobsResponse, MatchedTalentsResponse, MeResponse, SignupRequest,
    UpdateInvitationRequest,
};

use crate::config::FrontendConfig;
use crate::error::ApiError;
use crate::storage;

thread_local! {
    static SHARED_CLIENT: OnceCell<TalentXClient> = OnceCell::new();
}

/// Lightweight API client for TalentX backend interactions.
#[derive(Clone, Debug)]
pub struct TalentXClient {
    base_url: String,
    client: Client,
}

impl TalentXClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The process-wide client, configured from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build a request with the bearer credential attached when a token is
    /// currently persisted.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.client.request(method, self.api_url(path));
        match storage::token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // --- auth ---------------------------------------------------------

    /// Register a new account via `POST /auth/signup`.
    pub async fn signup(&self, payload: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .request(Method::POST, "auth/signup")
            .json(payload)
            .send()
            .await?;
        parse(response).await
    }

    /// Authenticate with email/password credentials via `POST /auth/login`.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .request(Method::POST, "auth/login")
            .json(payload)
            .send()
            .await?;
        parse(response).await
    }

    /// Retrieve the account the presented token belongs to.
    pub async fn me(&self) -> Result<MeResponse, ApiError> {
        let response = self.request(Method::GET, "auth/me").send().await?;
        parse(response).await
    }

    // --- jobs ---------------------------------------------------------

    /// List postings, optionally filtered by a search term.
    pub async fn jobs(&self, search: Option<&str>) -> Result<JobsResponse, ApiError> {
        let mut request = self.request(Method::GET, "jobs");
        if let Some(search) = search {
            if !search.is_empty() {
                request = request.query(&[("search", search)]);
            }
        }
        let response = request.send().await?;
        parse(response).await
    }

    /// Fetch a single posting.
    pub async fn job(&self, id: &str) -> Result<JobResponse, ApiError> {
        let response = self
            .request(Method::GET, &format!("jobs/{id}"))
            .send()
            .await?;
        parse(response).await
    }

    /// Create a posting via `POST /jobs`.
    pub async fn create_job(&self, payload: &CreateJobRequest) -> Result<JobResponse, ApiError> {
        let response = self
            .request(Method::POST, "jobs")
            .json(payload)
            .send()
            .await?;
        parse(response).await
    }

    /// List the authenticated employer's postings.
    pub async fn my_posted_jobs(&self) -> Result<JobsResponse, ApiError> {
        let response = self.request(Method::GET, "jobs/my/posted").send().await?;
        parse(response).await
    }

    /// Candidates surfaced by the AI matcher for a posting.
    pub async fn matched_talents(&self, job_id: &str) -> Result<MatchedTalentsResponse, ApiError> {
        let response = self
            .request(Method::GET, &format!("jobs/ai/matched-talents/{job_id}"))
            .send()
            .await?;
        parse(response).await
    }

    // --- applications -------------------------------------------------

    /// Apply to a posting via `POST /applications`.
    pub async fn create_application(
        &self,
        payload: &CreateApplicationRequest,
    ) -> Result<ApplicationResponse, ApiError> {
        let response = self
            .request(Method::POST, "applications")
            .json(payload)
            .send()
            .await?;
        parse(response).await
    }

    /// List the authenticated jobseeker's applications.
    pub async fn my_applications(&self) -> Result<ApplicationsResponse, ApiError> {
        let response = self.request(Method::GET, "applications/my").send().await?;
        parse(response).await
    }

    /// List applications received for one posting.
    pub async fn job_applications(&self, job_id: &str) -> Result<ApplicationsResponse, ApiError> {
        let response = self
            .request(Method::GET, &format!("applications/job/{job_id}"))
            .send()
            .await?;
        parse(response).await
    }

    // --- invitations --------------------------------------------------

    /// Invite a candidate to a posting via `POST /invitations`.
    pub async fn create_invitation(
        &self,
        payload: &CreateInvitationRequest,
    ) -> Result<InvitationResponse, ApiError> {
        let response = self
            .request(Method::POST, "invitations")
            .json(payload)
            .send()
            .await?;
        parse(response).await
    }

    /// List the authenticated jobseeker's invitations.
    pub async fn my_invitations(&self) -> Result<InvitationsResponse, ApiError> {
        let response = self.request(Method::GET, "invitations/my").send().await?;
        parse(response).await
    }

    /// Accept or decline an invitation via `PATCH /invitations/:id`.
    pub async fn respond_invitation(
        &self,
        id: &str,
        status: InvitationStatus,
    ) -> Result<InvitationResponse, ApiError> {
        let payload = UpdateInvitationRequest { status };
        let response = self
            .request(Method::PATCH, &format!("invitations/{id}"))
            .json(&payload)
            .send()
            .await?;
        parse(response).await
    }

    /// Postings surfaced by the AI matcher for the authenticated jobseeker.
    pub async fn matched_jobs(&self) -> Result<MatchedJobsResponse, ApiError> {
        let response = self.request(Method::GET, "ai/matched-jobs").send().await?;
        parse(response).await
    }
}

/// Decode a response: JSON body on 2xx, classified [`ApiError`] otherwise.
async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response.json::<T>().await.map_err(ApiError::from);
    }
    let body = response.json::<ErrorResponse>().await.ok();
    Err(ApiError::from_status(status, body))
}
