use crate::database::{DatabaseService, ProfileStore};
use crate::identity::{IdentityProvider, SupabaseAuth};
use serde::Deserialize;
use std::env;
use std::fs;
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const CONFIG_FILE_ENV: &str = "BLOGREACH_CONFIG";
pub const SUPABASE_URL_ENV: &str = "SUPABASE_URL";
pub const SUPABASE_KEY_ENV: &str = "SUPABASE_SERVICE_ROLE_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File read error: {0}")]
    FileError(String),

    #[error("Deserialization error:{0}")]
    DeserializationError(String),

    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub features: FeatureConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            api_prefix: default_api_prefix(),
        }
    }
}

/// Which revision of `GET /users/me/role` to serve.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoleEndpointMode {
    #[default]
    Enabled,
    Stub,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FeatureConfig {
    #[serde(default)]
    pub role_endpoint: RoleEndpointMode,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

impl Config {
    pub fn new(config_file: &str) -> Result<Self, ConfigError> {
        let config_str =
            fs::read_to_string(config_file).map_err(|e| ConfigError::FileError(e.to_string()))?;
        Self::from_json(&config_str)
    }

    pub fn from_json(config_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(config_str)
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))
    }
}

/// Connection settings for the managed Supabase project. Both the REST
/// endpoint and the auth admin API are called with the service role key.
#[derive(Debug, Clone)]
pub struct SupabaseSettings {
    pub url: String,
    pub service_role_key: String,
}

impl SupabaseSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var(SUPABASE_URL_ENV).map_err(|_| ConfigError::MissingEnv(SUPABASE_URL_ENV))?;
        let service_role_key =
            env::var(SUPABASE_KEY_ENV).map_err(|_| ConfigError::MissingEnv(SUPABASE_KEY_ENV))?;
        Ok(Self {
            url,
            service_role_key,
        })
    }
}

#[derive(Clone)]
pub struct Context {
    pub config: Config,
    pub database: Arc<dyn ProfileStore>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl Context {
    pub fn new(config_file: &str) -> Result<Self, ConfigError> {
        let config = Config::new(config_file)?;
        let supabase = SupabaseSettings::from_env()?;
        Ok(Self {
            config,
            database: Arc::new(DatabaseService::new(&supabase)),
            identity: Arc::new(SupabaseAuth::new(&supabase)),
        })
    }
}
