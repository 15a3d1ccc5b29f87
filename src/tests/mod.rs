mod account;

use std::sync::Arc;

use httpmock::MockServer;
use rstest::*;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::config::{CorsConfig, UserMsConfig};
use crate::container::Container;

/// Gateway wired to a mocked user-ms.
pub struct TestContext {
    pub user_ms: MockServer,
    pub container: Arc<Container>,
}

#[fixture]
fn context() -> TestContext {
    let user_ms = MockServer::start();

    let user_ms_config = UserMsConfig {
        url: user_ms.base_url(),
    };
    let cors_config = CorsConfig {
        allowed_origins: vec!["http://localhost:8080".to_string()],
    };

    let container = Arc::new(Container::new(
        reqwest::Client::new(),
        &user_ms_config,
        &cors_config,
    ));

    TestContext { user_ms, container }
}

fn account_json() -> Value {
    json!({
        "id": "6650f0c2a1b4e3d2c1f0a9b8",
        "username": "test_account",
        "email": "test_account@email.com"
    })
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    message: String,
}
