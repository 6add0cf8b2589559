//! Seeding workflow integration tests
//!
//! Each test starts an in-process mock backend; no external services needed.
//!
//! Run with: cargo test -p integration-tests --test workflow_tests

use integration_tests::{
    closed_port_url, strip_ansi, MockBackend, MockBehavior, FIXED_TOKEN, FIXED_UUID,
};
use seed_common::ApiConfig;
use seed_runner::{SeedError, SeedProfile, Step, WorkflowRunner};
use serde_json::{json, Value};

async fn start(behavior: MockBehavior) -> (MockBackend, WorkflowRunner) {
    let backend = MockBackend::start(behavior)
        .await
        .expect("Failed to start mock backend");
    let runner = WorkflowRunner::new(&backend.api_config(), SeedProfile::default())
        .expect("Failed to build runner");
    (backend, runner)
}

// ============================================================================
// Happy path
// ============================================================================

#[tokio::test]
async fn test_fixed_backend_prints_five_keys() {
    let (_backend, runner) = start(MockBehavior::fixed()).await;

    let mut out = Vec::new();
    let summary = runner.run_and_print(&mut out, false).await.unwrap();

    assert_eq!(summary.user, FIXED_UUID);
    assert_eq!(summary.session_token, FIXED_TOKEN);

    let printed = String::from_utf8(out).unwrap();
    let expected = format!(
        "{{\n    \"channel\": \"{u}\",\n    \"member\": \"{u}\",\n    \"session_token\": \"{t}\",\n    \"user\": \"{u}\",\n    \"workspace\": \"{u}\"\n}}\n",
        u = FIXED_UUID,
        t = FIXED_TOKEN,
    );
    assert_eq!(printed, expected);
}

#[tokio::test]
async fn test_colored_output_parses_back_to_summary() {
    let (_backend, runner) = start(MockBehavior::fixed()).await;

    let mut out = Vec::new();
    runner.run_and_print(&mut out, true).await.unwrap();

    let printed = strip_ansi(&String::from_utf8(out).unwrap());
    let value: Value = serde_json::from_str(&printed).unwrap();
    assert_eq!(
        value,
        json!({
            "user": FIXED_UUID,
            "session_token": FIXED_TOKEN,
            "workspace": FIXED_UUID,
            "member": FIXED_UUID,
            "channel": FIXED_UUID
        })
    );
}

#[tokio::test]
async fn test_identifiers_are_threaded_between_steps() {
    let (backend, runner) = start(MockBehavior::distinct()).await;
    let behavior = &backend.behavior;

    let summary = runner.run().await.unwrap();

    let user = behavior.id(Step::CreateUser);
    let workspace = behavior.id(Step::CreateWorkspace);
    assert_eq!(summary.user, user);
    assert_eq!(summary.session_token, behavior.token());
    assert_eq!(summary.workspace, workspace);
    assert_eq!(summary.member, behavior.id(Step::AddMember));
    assert_eq!(summary.channel, behavior.id(Step::CreateChannel));

    let login = backend.request_for(Step::Login).unwrap();
    assert_eq!(login.path, "/auth/login");
    assert_eq!(login.query.as_deref(), Some(format!("uuid={user}").as_str()));

    let create_workspace = backend.request_for(Step::CreateWorkspace).unwrap();
    assert_eq!(
        create_workspace.body,
        Some(json!({ "name": "string", "owner_uuid": user }))
    );

    let add_member = backend.request_for(Step::AddMember).unwrap();
    assert_eq!(add_member.path, format!("/workspaces/{workspace}/members"));
    assert_eq!(add_member.body, Some(json!({ "user_uuid": user })));

    let create_channel = backend.request_for(Step::CreateChannel).unwrap();
    assert_eq!(create_channel.path, format!("/workspaces/{workspace}/channels"));
    assert_eq!(
        create_channel.body,
        Some(json!({ "name": "string", "workspace_uuid": workspace, "creator_uuid": user }))
    );
}

#[tokio::test]
async fn test_requests_run_in_order_with_bearer_after_login() {
    let (backend, runner) = start(MockBehavior::distinct()).await;
    runner.run().await.unwrap();

    let requests = backend.requests();
    let steps: Vec<Step> = requests.iter().map(|r| r.step).collect();
    assert_eq!(steps, Step::ALL);

    let bearer = format!("Bearer {}", backend.behavior.token());
    for request in &requests {
        if request.step.requires_auth() {
            assert_eq!(request.authorization.as_deref(), Some(bearer.as_str()));
        } else {
            assert!(request.authorization.is_none(), "{} sent auth", request.step);
        }
    }
}

#[tokio::test]
async fn test_default_user_payload_is_sent() {
    let (backend, runner) = start(MockBehavior::fixed()).await;
    runner.run().await.unwrap();

    let create_user = backend.request_for(Step::CreateUser).unwrap();
    assert_eq!(
        create_user.body,
        Some(json!({
            "username": "string",
            "firstname": "string",
            "lastname": "string",
            "email": "string",
            "address": "string;"
        }))
    );
}

#[tokio::test]
async fn test_profile_overrides_are_sent() {
    let backend = MockBackend::start(MockBehavior::fixed()).await.unwrap();
    let profile = SeedProfile::default()
        .with_username("alice")
        .with_email("alice@example.com")
        .with_workspace_name("acme")
        .with_channel_name("general");
    let runner = WorkflowRunner::new(&backend.api_config(), profile).unwrap();

    runner.run().await.unwrap();

    let user = backend.request_for(Step::CreateUser).unwrap().body.unwrap();
    assert_eq!(user["username"], "alice");
    assert_eq!(user["email"], "alice@example.com");

    let workspace = backend.request_for(Step::CreateWorkspace).unwrap().body.unwrap();
    assert_eq!(workspace["name"], "acme");

    let channel = backend.request_for(Step::CreateChannel).unwrap().body.unwrap();
    assert_eq!(channel["name"], "general");
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_missing_user_uuid_stops_before_printing() {
    let (backend, runner) = start(MockBehavior::fixed().omit_field_on(Step::CreateUser)).await;

    let mut out = Vec::new();
    let err = runner.run_and_print(&mut out, true).await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::MissingField { step: Step::CreateUser, field: "uuid" }
    ));
    assert!(out.is_empty());
    assert_eq!(backend.requests().len(), 1);
}

#[tokio::test]
async fn test_missing_channel_uuid_stops_before_printing() {
    let (backend, runner) = start(MockBehavior::fixed().omit_field_on(Step::CreateChannel)).await;

    let mut out = Vec::new();
    let err = runner.run_and_print(&mut out, false).await.unwrap_err();

    assert_eq!(err.step(), Some(Step::CreateChannel));
    assert!(out.is_empty());
    assert_eq!(backend.requests().len(), Step::ALL.len());
}

#[tokio::test]
async fn test_missing_token_fails_login() {
    let (backend, runner) = start(MockBehavior::fixed().omit_field_on(Step::Login)).await;

    let err = runner.run().await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::MissingField { step: Step::Login, field: "token" }
    ));
    assert!(backend.request_for(Step::CreateWorkspace).is_none());
}

#[tokio::test]
async fn test_error_status_aborts_at_that_step() {
    let (backend, runner) = start(MockBehavior::fixed().fail_on(Step::AddMember, 403)).await;

    let err = runner.run().await.unwrap_err();

    match err {
        SeedError::Status { step, status, body } => {
            assert_eq!(step, Step::AddMember);
            assert_eq!(status, 403);
            assert!(body.contains("injected failure"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(backend.request_for(Step::CreateChannel).is_none());
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let (_backend, runner) = start(MockBehavior::fixed().garbage_on(Step::CreateWorkspace)).await;

    let err = runner.run().await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::Decode { step: Step::CreateWorkspace, .. }
    ));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let config = ApiConfig {
        base_url: closed_port_url().unwrap(),
        timeout_secs: Some(5),
    };
    let runner = WorkflowRunner::new(&config, SeedProfile::default()).unwrap();

    let mut out = Vec::new();
    let err = runner.run_and_print(&mut out, false).await.unwrap_err();

    assert!(matches!(
        err,
        SeedError::Transport { step: Step::CreateUser, .. }
    ));
    assert!(out.is_empty());
}

// ============================================================================
// Individual steps
// ============================================================================

#[tokio::test]
async fn test_steps_can_be_driven_one_by_one() {
    let (backend, runner) = start(MockBehavior::distinct()).await;
    let behavior = &backend.behavior;

    let user = runner.create_user().await.unwrap();
    let session = runner.login(&user).await.unwrap();
    assert_eq!(session.user_uuid, user);
    assert_eq!(session.token, behavior.token());

    let workspace = session.create_workspace("team").await.unwrap();
    let member = session.add_member(&workspace).await.unwrap();
    let channel = session.create_channel(&workspace, "random").await.unwrap();

    assert_eq!(workspace, behavior.id(Step::CreateWorkspace));
    assert_eq!(member, behavior.id(Step::AddMember));
    assert_eq!(channel, behavior.id(Step::CreateChannel));
}
