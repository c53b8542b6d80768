//! Configuration management

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_from_path};
pub use schema::{AiConfig, AuthConfig, Config, ServerConfig};
