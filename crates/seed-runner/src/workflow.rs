//! Seeding workflow
//!
//! Runs the backend's onboarding flow one request at a time, threading each
//! identifier into the next request:
//!
//! 1. `POST /users` → user uuid
//! 2. `GET /auth/login?uuid=..` → session token
//! 3. `POST /workspaces` → workspace uuid
//! 4. `POST /workspaces/{id}/members` → member uuid
//! 5. `POST /workspaces/{id}/channels` → channel uuid
//!
//! Requests 3-5 carry `Authorization: Bearer <token>`. The first failure aborts
//! the run; nothing is printed for a failed run.

use std::io::Write;

use seed_common::{print_json, ApiConfig};
use tracing::{info, instrument};

use crate::client::ApiClient;
use crate::dto::{
    AddMemberRequest, CreateChannelRequest, CreateWorkspaceRequest, CreatedResource, SeedProfile,
    SeedSummary, SessionResponse,
};
use crate::error::{SeedResult, Step};

/// Drives the seeding workflow against one backend
#[derive(Debug, Clone)]
pub struct WorkflowRunner {
    client: ApiClient,
    profile: SeedProfile,
}

/// A logged-in user; issues the authenticated requests
#[derive(Debug, Clone)]
pub struct Session {
    pub user_uuid: String,
    pub token: String,
    client: ApiClient,
}

impl WorkflowRunner {
    pub fn new(config: &ApiConfig, profile: SeedProfile) -> SeedResult<Self> {
        Ok(Self {
            client: ApiClient::new(config)?,
            profile,
        })
    }

    pub fn profile(&self) -> &SeedProfile {
        &self.profile
    }

    /// Run every step and collect the produced identifiers
    #[instrument(skip_all, fields(api = %self.client.base_url()))]
    pub async fn run(&self) -> SeedResult<SeedSummary> {
        let user_uuid = self.create_user().await?;
        let session = self.login(&user_uuid).await?;
        let workspace_uuid = session
            .create_workspace(&self.profile.workspace_name)
            .await?;
        let member_uuid = session.add_member(&workspace_uuid).await?;
        let channel_uuid = session
            .create_channel(&workspace_uuid, &self.profile.channel_name)
            .await?;

        Ok(SeedSummary {
            user: session.user_uuid,
            session_token: session.token,
            workspace: workspace_uuid,
            member: member_uuid,
            channel: channel_uuid,
        })
    }

    /// Run the workflow and pretty-print the summary into `out`
    ///
    /// `out` is only written to after every step has succeeded.
    pub async fn run_and_print<W: Write>(&self, out: &mut W, color: bool) -> SeedResult<SeedSummary> {
        let summary = self.run().await?;
        print_json(&summary.to_json()?, out, color)?;
        Ok(summary)
    }

    /// `POST /users` with the profile's user payload
    pub async fn create_user(&self) -> SeedResult<String> {
        let created: CreatedResource = self
            .client
            .post_json(Step::CreateUser, "/users", &self.profile.user)
            .await?;
        let uuid = created.into_uuid(Step::CreateUser)?;
        info!(user = %uuid, "User created");
        Ok(uuid)
    }

    /// `GET /auth/login?uuid=<user_uuid>`
    pub async fn login(&self, user_uuid: &str) -> SeedResult<Session> {
        let response: SessionResponse = self
            .client
            .get_json(Step::Login, "/auth/login", &[("uuid", user_uuid)])
            .await?;
        let token = response.into_token()?;
        info!(user = %user_uuid, "Logged in");

        Ok(Session {
            user_uuid: user_uuid.to_string(),
            client: self.client.with_token(token.as_str()),
            token,
        })
    }
}

impl Session {
    /// `POST /workspaces` owned by this session's user
    pub async fn create_workspace(&self, name: &str) -> SeedResult<String> {
        let body = CreateWorkspaceRequest {
            name,
            owner_uuid: &self.user_uuid,
        };
        let created: CreatedResource = self
            .client
            .post_json(Step::CreateWorkspace, "/workspaces", &body)
            .await?;
        let uuid = created.into_uuid(Step::CreateWorkspace)?;
        info!(workspace = %uuid, "Workspace created");
        Ok(uuid)
    }

    /// `POST /workspaces/{id}/members` adding this session's user
    pub async fn add_member(&self, workspace_uuid: &str) -> SeedResult<String> {
        let body = AddMemberRequest {
            user_uuid: &self.user_uuid,
        };
        let created: CreatedResource = self
            .client
            .post_json(
                Step::AddMember,
                &format!("/workspaces/{workspace_uuid}/members"),
                &body,
            )
            .await?;
        let uuid = created.into_uuid(Step::AddMember)?;
        info!(workspace = %workspace_uuid, member = %uuid, "Member added");
        Ok(uuid)
    }

    /// `POST /workspaces/{id}/channels` created by this session's user
    pub async fn create_channel(&self, workspace_uuid: &str, name: &str) -> SeedResult<String> {
        let body = CreateChannelRequest {
            name,
            workspace_uuid,
            creator_uuid: &self.user_uuid,
        };
        let created: CreatedResource = self
            .client
            .post_json(
                Step::CreateChannel,
                &format!("/workspaces/{workspace_uuid}/channels"),
                &body,
            )
            .await?;
        let uuid = created.into_uuid(Step::CreateChannel)?;
        info!(workspace = %workspace_uuid, channel = %uuid, "Channel created");
        Ok(uuid)
    }
}
