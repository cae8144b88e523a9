use anyhow::{Context, Result};

pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Pins template selection for every story when set.
    pub story_seed: Option<u64>,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            story_seed: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT")?.unwrap_or(defaults.port),
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            story_seed: parse_env("STORY_SEED")?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES")?.unwrap_or(defaults.max_upload_bytes),
        })
    }
}

/// `Ok(None)` when the variable is unset, an error when it does not parse.
fn parse_env<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.story_seed, None);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_parse_env_unset_and_invalid() {
        assert!(parse_env::<u16>("STORYCV_TEST_UNSET_VARIABLE").unwrap().is_none());

        std::env::set_var("STORYCV_TEST_BAD_PORT", "eighty");
        assert!(parse_env::<u16>("STORYCV_TEST_BAD_PORT").is_err());

        std::env::set_var("STORYCV_TEST_SEED", " 42 ");
        assert_eq!(parse_env::<u64>("STORYCV_TEST_SEED").unwrap(), Some(42));
    }
}
