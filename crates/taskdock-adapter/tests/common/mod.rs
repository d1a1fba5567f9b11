/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskdock-adapter tests

use serde_json::{json, Value};
use taskdock_adapter::{ClientConfig, Task, TodoClient};
use wiremock::MockServer;

pub const OWNER: &str = "demo-owner";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server, scoped to the shared test owner
pub fn test_client(server: &MockServer) -> TodoClient {
    TodoClient::with_config_and_base_url(ClientConfig::default(), &server.uri(), OWNER)
        .expect("client init")
}

#[allow(dead_code)]
pub fn sample_task(id: i64, label: &str, is_done: bool) -> Task {
    Task {
        id,
        label: label.to_string(),
        is_done,
    }
}

/// JSON body the mock server returns for one task
#[allow(dead_code)]
pub fn task_body(id: i64, label: &str, is_done: bool) -> Value {
    json!({
        "id": id,
        "label": label,
        "is_done": is_done,
    })
}

/// Collection path for the shared test owner
#[allow(dead_code)]
pub fn collection_path() -> String {
    format!("/{OWNER}")
}

/// Item path for the shared test owner
#[allow(dead_code)]
pub fn item_path(id: i64) -> String {
    format!("/{OWNER}/{id}")
}
