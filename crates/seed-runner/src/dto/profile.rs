//! Demo values used for the seeded resources

use crate::dto::CreateUserRequest;

/// Payload values for one seeding run
///
/// The defaults are the placeholder values the backend's API docs use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedProfile {
    pub user: CreateUserRequest,
    pub workspace_name: String,
    pub channel_name: String,
}

impl Default for SeedProfile {
    fn default() -> Self {
        Self {
            user: CreateUserRequest::default(),
            workspace_name: "string".to_string(),
            channel_name: "string".to_string(),
        }
    }
}

impl SeedProfile {
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.user.username = username.into();
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.user.email = email.into();
        self
    }

    #[must_use]
    pub fn with_workspace_name(mut self, name: impl Into<String>) -> Self {
        self.workspace_name = name.into();
        self
    }

    #[must_use]
    pub fn with_channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = name.into();
        self
    }
}
