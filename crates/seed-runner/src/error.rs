//! Seeding error types
//!
//! Every request failure is tagged with the workflow [`Step`] it happened in.

use std::fmt;

use seed_common::{ConfigError, PrintError};

/// A single request in the seeding workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CreateUser,
    Login,
    CreateWorkspace,
    AddMember,
    CreateChannel,
}

impl Step {
    /// All steps, in execution order
    pub const ALL: [Step; 5] = [
        Step::CreateUser,
        Step::Login,
        Step::CreateWorkspace,
        Step::AddMember,
        Step::CreateChannel,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateUser => "create_user",
            Self::Login => "login",
            Self::CreateWorkspace => "create_workspace",
            Self::AddMember => "add_member",
            Self::CreateChannel => "create_channel",
        }
    }

    /// Whether the request for this step carries the bearer token
    #[must_use]
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::CreateUser | Self::Login)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seeding error type
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("{step}: request failed: {source}")]
    Transport {
        step: Step,
        #[source]
        source: reqwest::Error,
    },

    #[error("{step}: backend responded with status {status}: {body}")]
    Status { step: Step, status: u16, body: String },

    #[error("{step}: response body is not the expected JSON: {source}")]
    Decode {
        step: Step,
        #[source]
        source: serde_json::Error,
    },

    #[error("{step}: response is missing field `{field}`")]
    MissingField { step: Step, field: &'static str },

    #[error("Failed to encode summary: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Print(#[from] PrintError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl SeedError {
    /// The workflow step that failed, if the error came from a request
    #[must_use]
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::Transport { step, .. }
            | Self::Status { step, .. }
            | Self::Decode { step, .. }
            | Self::MissingField { step, .. } => Some(*step),
            Self::Encode(_) | Self::Print(_) | Self::Config(_) | Self::Client(_) => None,
        }
    }

    /// Create a missing field error
    #[must_use]
    pub fn missing(step: Step, field: &'static str) -> Self {
        Self::MissingField { step, field }
    }
}

/// Result type alias for seeding operations
pub type SeedResult<T> = Result<T, SeedError>;
