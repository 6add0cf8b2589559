//! # seed-runner
//!
//! Drives a chat backend's REST API through a fixed seeding workflow:
//! create a user, log in, create a workspace, add the user as a member and
//! create a channel. The collected identifiers are pretty-printed as JSON.

pub mod client;
pub mod dto;
pub mod error;
pub mod workflow;

pub use client::ApiClient;
pub use dto::{
    AddMemberRequest, CreateChannelRequest, CreateUserRequest, CreateWorkspaceRequest,
    CreatedResource, SeedProfile, SeedSummary, SessionResponse,
};
pub use error::{SeedError, SeedResult, Step};
pub use workflow::{Session, WorkflowRunner};
