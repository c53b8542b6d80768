//! Configuration schema definitions

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub ai: AiConfig,
}

/// Server configuration for the HTTP API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS origins. Empty list means permissive.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
        }
    }
}

/// Token signing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for access tokens
    #[serde(default = "default_secret")]
    pub secret: String,

    /// Access token lifetime in minutes
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: i64,
}

fn default_secret() -> String {
    "inkpress-secret-key-change-in-production".to_string()
}

fn default_token_ttl() -> i64 {
    30
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
            token_ttl_minutes: default_token_ttl(),
        }
    }
}

/// AI feature flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Whether the canned AI endpoints are advertised as enabled
    #[serde(default = "default_ai_enabled")]
    pub enabled: bool,
}

fn default_ai_enabled() -> bool {
    true
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: default_ai_enabled(),
        }
    }
}
