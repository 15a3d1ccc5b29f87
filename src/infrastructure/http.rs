use crate::config::UserMsConfig;

use reqwest::{Client, Error};

static USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn connect(user_ms_config: &UserMsConfig) -> Result<Client, Error> {
    tracing::info!(url = %user_ms_config.url, "Using user-ms upstream");

    Client::builder().user_agent(USER_AGENT).build()
}
