use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SESSION_FILE: &str = ".recruitment-session.json";
const DEFAULT_LOGIN_ROUTE: &str = "/login";
const DEFAULT_DASHBOARD_ROUTE: &str = "/dashboard";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Url,
    pub http_timeout: Duration,
    pub session_file: String,
    pub login_route: String,
    pub dashboard_route: String,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let timeout_secs = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(_) => get_env_parse::<u64>("HTTP_TIMEOUT_SECS")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url: parse_base_url(&get_env("API_BASE_URL")?)?,
            http_timeout: Duration::from_secs(timeout_secs),
            session_file: get_env_or("SESSION_FILE", DEFAULT_SESSION_FILE),
            login_route: get_env_or("LOGIN_ROUTE", DEFAULT_LOGIN_ROUTE),
            dashboard_route: get_env_or("DASHBOARD_ROUTE", DEFAULT_DASHBOARD_ROUTE),
        })
    }

    /// Config pointing at `base_url` with every other setting at its default.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            api_base_url: parse_base_url(base_url)?,
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: DEFAULT_SESSION_FILE.to_string(),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            dashboard_route: DEFAULT_DASHBOARD_ROUTE.to_string(),
        })
    }
}

/// Parses the API root and forces a trailing slash so relative joins keep
/// any path prefix (`https://host/api/` + `vagas` = `https://host/api/vagas`).
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let url = Url::parse(&normalized)
        .map_err(|e| Error::Config(format!("Invalid value for API_BASE_URL: {}", e)))?;
    if url.cannot_be_a_base() {
        return Err(Error::Config(format!(
            "API_BASE_URL cannot be used as a base: {}",
            raw
        )));
    }
    Ok(url)
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(name)?;
    raw.parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_optional() {
        for key in [
            "HTTP_TIMEOUT_SECS",
            "SESSION_FILE",
            "LOGIN_ROUTE",
            "DASHBOARD_ROUTE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn defaults_apply_when_optional_vars_missing() {
        clear_optional();
        env::set_var("API_BASE_URL", "https://api.example.com/api");
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_base_url.as_str(), "https://api.example.com/api/");
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.login_route, "/login");
        assert_eq!(config.dashboard_route, "/dashboard");
    }

    #[test]
    #[serial]
    fn rejects_unparseable_timeout() {
        clear_optional();
        env::set_var("API_BASE_URL", "https://api.example.com");
        env::set_var("HTTP_TIMEOUT_SECS", "soon");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("HTTP_TIMEOUT_SECS")));
        env::remove_var("HTTP_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn missing_base_url_is_a_config_error() {
        clear_optional();
        env::remove_var("API_BASE_URL");
        let result = Config::from_env();
        // dotenv may repopulate it from a local .env
        if env::var("API_BASE_URL").is_err() {
            assert!(matches!(result, Err(Error::Config(_))));
        }
    }

    #[test]
    fn base_url_keeps_path_prefix() {
        let config = Config::with_base_url("http://localhost:8080/api").unwrap();
        let joined = config.api_base_url.join("vagas/1/etapas").unwrap();
        assert_eq!(joined.as_str(), "http://localhost:8080/api/vagas/1/etapas");
    }
}
