//! Tests for the API client
//!
//! Validates client construction and URL building for the endpoints the
//! feature pages depend on.

#[cfg(test)]
mod tests {
    use crate::api::TalentXClient;

    /// Tests API client creation
    #[test]
    fn test_api_client_creation() {
        let _client = TalentXClient::new("http://localhost:5000/api");
        // Client should be created successfully
    }

    /// Trailing slashes on the base URL must not double up.
    #[test]
    fn test_base_url_normalization() {
        let client = TalentXClient::new("http://localhost:5000/api/");
        assert_eq!(
            client.api_url("jobs"),
            "http://localhost:5000/api/jobs"
        );
        assert_eq!(
            client.api_url("/jobs"),
            "http://localhost:5000/api/jobs"
        );
    }

    /// URL building for the auth endpoints.
    #[test]
    fn test_auth_endpoint_urls() {
        let client = TalentXClient::new("/api");
        assert_eq!(client.api_url("auth/signup"), "/api/auth/signup");
        assert_eq!(client.api_url("auth/login"), "/api/auth/login");
        assert_eq!(client.api_url("auth/me"), "/api/auth/me");
    }

    /// URL building for parameterized endpoints.
    #[test]
    fn test_parameterized_endpoint_urls() {
        let client = TalentXClient::new("/api");
        let job_id = "64f1c0ffee";
        assert_eq!(
            client.api_url(&format!("jobs/{job_id}")),
            "/api/jobs/64f1c0ffee"
        );
        assert_eq!(
            client.api_url(&format!("applications/job/{job_id}")),
            "/api/applications/job/64f1c0ffee"
        );
        assert_eq!(
            client.api_url(&format!("jobs/ai/matched-talents/{job_id}")),
            "/api/jobs/ai/matched-talents/64f1c0ffee"
        );
    }

    /// The jobseeker-side collection endpoints.
    #[test]
    fn test_collection_endpoint_urls() {
        let client = TalentXClient::new("/api");
        assert_eq!(client.api_url("jobs/my/posted"), "/api/jobs/my/posted");
        assert_eq!(client.api_url("applications/my"), "/api/applications/my");
        assert_eq!(client.api_url("invitations/my"), "/api/invitations/my");
        assert_eq!(client.api_url("ai/matched-jobs"), "/api/ai/matched-jobs");
    }
}
