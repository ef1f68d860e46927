//! Layered service configuration.
//!
//! Sources, lowest priority first:
//! 1. built-in defaults (`127.0.0.1:5000`, level `info`)
//! 2. an optional `configuration.{yaml,toml,json}` in the working directory
//! 3. environment variables named `<PREFIX>__<SECTION>__<KEY>`, e.g.
//!    `TODO_SERVER__SERVER__PORT=8080` or `FORM_DEMO__LOG_LEVEL=debug`
//!
//! A `.env` file is read into the environment first when present.

use serde::Deserialize;

use crate::error::SupportError;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    /// Default `EnvFilter` directive; `RUST_LOG` wins when set.
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub fn get_configuration(env_prefix: &str) -> Result<Settings, SupportError> {
    dotenvy::dotenv().ok();

    let settings = config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 5000)?
        .set_default("log_level", "info")?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix(env_prefix)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}
