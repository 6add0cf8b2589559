//! Data transfer objects for the backend API

mod profile;
mod requests;
mod responses;

pub use profile::SeedProfile;
pub use requests::{
    AddMemberRequest, CreateChannelRequest, CreateUserRequest, CreateWorkspaceRequest,
};
pub use responses::{CreatedResource, SeedSummary, SessionResponse};
