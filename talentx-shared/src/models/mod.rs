//! Data models exchanged with the TalentX backend.

pub mod application;
pub mod errors;
pub mod invitation;
pub mod job;
pub mod timestamp;
pub mod user;

pub use application::{
    Application, ApplicationResponse, ApplicationStatus, ApplicationsResponse,
    CreateApplicationRequest,
};
pub use errors::ErrorResponse;
pub use invitation::{
    CreateInvitationRequest, Invitation, InvitationResponse, InvitationStatus,
    InvitationsResponse, MatchedJobsResponse, UpdateInvitationRequest,
};
pub use job::{
    CreateJobRequest, Job, JobResponse, JobStatus, JobsResponse, MatchedTalent,
    MatchedTalentsResponse,
};
pub use timestamp::Timestamp;
pub use user::{AuthResponse, LoginRequest, MeResponse, SignupRequest, User, UserRole};
