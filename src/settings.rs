use std::env;

use serde::Deserialize;
use tracing::info;

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_env")]
    pub env: String, // file / server
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub prefix: Option<String>,
    pub database_url: String,
    pub pexels_api_key: Option<String>,
    pub pexels_url: Option<String>,
    pub image_search_timeout: Option<u64>,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_env() -> String {
    "file".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_log_dir() -> String {
    "./logs".to_string()
}

impl Config {
    pub fn prefix(&self) -> String {
        self.prefix.clone().unwrap_or("/api".to_string())
    }

    /// API key for the image search provider, `None` when unset or blank.
    pub fn pexels_api_key(&self) -> Option<&str> {
        self.pexels_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

pub fn get_config() -> anyhow::Result<Config> {
    let env_var = env::var("ENV").unwrap_or("file".to_string());
    if env_var == "file" {
        info!("using .env file as environment variable");
        let _ = dotenvy::dotenv();
    } else {
        info!("using server environment as environment variable");
    }
    let config = envy::from_env::<Config>()
        .map_err(|err| anyhow::anyhow!("invalid environment configuration: {}", err))?;
    Ok(config)
}
