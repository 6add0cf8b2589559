//! Request bodies sent to the backend

use serde::Serialize;

/// `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub address: String,
}

impl Default for CreateUserRequest {
    fn default() -> Self {
        Self {
            username: "string".to_string(),
            firstname: "string".to_string(),
            lastname: "string".to_string(),
            email: "string".to_string(),
            address: "string;".to_string(),
        }
    }
}

/// `POST /workspaces`
#[derive(Debug, Clone, Serialize)]
pub struct CreateWorkspaceRequest<'a> {
    pub name: &'a str,
    pub owner_uuid: &'a str,
}

/// `POST /workspaces/{id}/members`
#[derive(Debug, Clone, Serialize)]
pub struct AddMemberRequest<'a> {
    pub user_uuid: &'a str,
}

/// `POST /workspaces/{id}/channels`
#[derive(Debug, Clone, Serialize)]
pub struct CreateChannelRequest<'a> {
    pub name: &'a str,
    pub workspace_uuid: &'a str,
    pub creator_uuid: &'a str,
}
