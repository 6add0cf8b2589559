//! Response bodies read from the backend, and the final summary

use serde::{Deserialize, Serialize};

use crate::error::{SeedError, SeedResult, Step};

/// Any create response; only the identifier is read
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedResource {
    pub uuid: Option<String>,
}

impl CreatedResource {
    pub fn into_uuid(self, step: Step) -> SeedResult<String> {
        self.uuid.ok_or_else(|| SeedError::missing(step, "uuid"))
    }
}

/// `GET /auth/login` response
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub token: Option<String>,
}

impl SessionResponse {
    pub fn into_token(self) -> SeedResult<String> {
        self.token
            .ok_or_else(|| SeedError::missing(Step::Login, "token"))
    }
}

/// Identifiers collected by one seeding run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSummary {
    pub user: String,
    pub session_token: String,
    pub workspace: String,
    pub member: String,
    pub channel: String,
}

impl SeedSummary {
    pub fn to_json(&self) -> SeedResult<String> {
        serde_json::to_string(self).map_err(SeedError::Encode)
    }
}
