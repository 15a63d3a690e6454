#![allow(dead_code)]

use wiremock::MockServer;
use wnc_client::{BasicAuth, WncClient};

pub const YANG_JSON: &str = "application/yang-data+json";

/// Start a mock controller and a client pointed at it
pub async fn setup() -> (MockServer, WncClient) {
    let _ = env_logger::try_init();
    let server = MockServer::start().await;
    let client = WncClient::new(server.uri(), BasicAuth::new("admin", "admin")).unwrap();
    (server, client)
}

/// Request path of a datastore resource
pub fn data_path(path: &str) -> String {
    format!("/restconf/data/{}", path)
}

/// Request path of an RPC
pub fn operations_path(operation: &str) -> String {
    format!("/restconf/operations/{}", operation)
}

pub fn fixture(name: &str) -> serde_json::Value {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    let text = std::fs::read_to_string(&path).unwrap();
    serde_json::from_str(&text).unwrap()
}
