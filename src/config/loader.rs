//! Configuration loading with `${VAR:-default}` interpolation

use std::env;
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{Error, Result};

use super::Config;

const CONFIG_FILENAME: &str = "inkpress.toml";

/// Load `inkpress.toml`, searching upward from the current directory
pub fn load_config() -> Result<Config> {
    let mut dir = env::current_dir().map_err(|e| Error::Config(e.to_string()))?;
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return load_config_from_path(&candidate);
        }
        if !dir.pop() {
            return Err(Error::ConfigNotFound);
        }
    }
}

/// Load configuration from an explicit path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path).map_err(|_| Error::ConfigNotFound)?;
    Ok(toml::from_str(&interpolate_env_vars(&raw))?)
}

/// Substitute `${VAR}` and `${VAR:-default}` references with environment
/// values before the TOML is parsed.
fn interpolate_env_vars(content: &str) -> String {
    // Pattern is a constant, a failure to compile it is a bug
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("env interpolation pattern must compile");

    re.replace_all(content, |caps: &regex::Captures| {
        let fallback = caps.get(2).map_or("", |m| m.as_str());
        env::var(&caps[1]).unwrap_or_else(|_| fallback.to_string())
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_env_interpolation() {
        env::set_var("INKPRESS_TEST_VAR", "hunter2");
        let result = interpolate_env_vars("secret = \"${INKPRESS_TEST_VAR}\"");
        assert_eq!(result, "secret = \"hunter2\"");
        env::remove_var("INKPRESS_TEST_VAR");
    }

    #[test]
    fn test_env_interpolation_with_default() {
        let result = interpolate_env_vars("value = \"${NONEXISTENT_VAR:-default_value}\"");
        assert_eq!(result, "value = \"default_value\"");
    }

    #[test]
    fn test_load_config_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[auth]\nsecret = \"${{NONEXISTENT_SECRET:-file-secret}}\"\ntoken_ttl_minutes = 5"
        )
        .unwrap();

        let config = load_config_from_path(file.path()).unwrap();
        assert_eq!(config.auth.secret, "file-secret");
        assert_eq!(config.auth.token_ttl_minutes, 5);
    }

    #[test]
    fn test_missing_config_file() {
        let result = load_config_from_path(Path::new("/nonexistent/inkpress.toml"));
        assert!(matches!(result, Err(Error::ConfigNotFound)));
    }
}
