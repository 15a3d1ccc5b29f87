use std::sync::Arc;

use reqwest::Client;

use crate::config::{CorsConfig, UserMsConfig};
use crate::domain::services::user_ms::UserMsServiceFactory;

use crate::services::user_ms::UserMsServiceFactoryImpl;

pub struct Container {
    pub user_ms_factory: Arc<dyn UserMsServiceFactory>,
    pub allowed_origins: Vec<String>,
}

impl Container {
    pub fn new(http: Client, user_ms_config: &UserMsConfig, cors_config: &CorsConfig) -> Self {
        Container {
            user_ms_factory: user_ms_factory(http, user_ms_config),
            allowed_origins: cors_config.allowed_origins.to_owned(),
        }
    }
}

fn user_ms_factory(http: Client, user_ms_config: &UserMsConfig) -> Arc<dyn UserMsServiceFactory> {
    Arc::new(UserMsServiceFactoryImpl::new(
        http,
        user_ms_config.url.to_owned(),
    ))
}
