use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub user_ms: UserMsConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    /// Export spans over OTLP in addition to the JSON log output.
    pub otlp: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserMsConfig {
    pub url: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(AppConfig {
                service: ServiceConfig {
                    name: "account-gateway".to_string(),
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                    otlp: false,
                },
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 8080,
                },
                cors: CorsConfig {
                    allowed_origins: vec!["http://localhost:8080".to_string()],
                },
                user_ms: UserMsConfig {
                    url: "http://localhost:3001".to_string(),
                },
            }))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
    }
}
