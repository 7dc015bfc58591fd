//! Runtime configuration
//!
//! Everything the transport needs is gathered once at startup into a
//! [`Config`] value and passed down explicitly:
//!
//! - the instance base URL, normalized from the `--url` argument
//! - the API key, from `--api-key` or the environment (`.env` honoured)
//! - request timeout and certificate policy

use reqwest::Url;
use std::time::Duration;

use crate::error::ConfigError;
use crate::validation::validate_host;

/// Port the GoPhish admin server listens on out of the box
pub const DEFAULT_ADMIN_PORT: u16 = 3333;

/// Environment variables searched for the API key, in order
pub const API_KEY_VARS: &[&str] = &["GOPHISH_API_KEY", "GoPhish_API"];

#[derive(Debug, Clone)]
pub struct Config {
    /// Instance root, always ending with `/`
    pub base_url: Url,
    pub api_key: String,
    pub timeout: Duration,
    /// Accept self-signed admin certificates
    pub accept_invalid_certs: bool,
}

impl Config {
    pub fn new(
        instance: &str,
        api_key: String,
        timeout_ms: u64,
        accept_invalid_certs: bool,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: instance_base_url(instance)?,
            api_key,
            timeout: Duration::from_millis(timeout_ms),
            accept_invalid_certs,
        })
    }

    /// Builds a configuration from command-line values and the process environment
    ///
    /// Loads `.env` from the working directory first, if present.
    pub fn from_env(
        instance: &str,
        api_key: Option<&str>,
        timeout_ms: u64,
        accept_invalid_certs: bool,
    ) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let api_key = resolve_api_key(api_key, |var| std::env::var(var).ok())?;
        Self::new(instance, api_key, timeout_ms, accept_invalid_certs)
    }
}

/// Picks the API key from an explicit value or the first non-empty variable
pub fn resolve_api_key<F>(explicit: Option<&str>, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .map(str::to_string)
        .into_iter()
        .chain(API_KEY_VARS.iter().filter_map(|var| lookup(*var)))
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
        .ok_or(ConfigError::MissingApiKey)
}

/// Normalizes the user-supplied instance into a base URL
///
/// - `https://host:3333` or `http://host` are used as given
/// - `host:port` becomes `https://host:port/`
/// - a bare `host` becomes `https://host:3333/`
///
/// The path always ends with `/` so API paths can be joined onto it.
pub fn instance_base_url(instance: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidInstance {
        input: instance.to_string(),
        reason,
    };

    let trimmed = instance.trim();
    if trimmed.is_empty() {
        return Err(invalid("instance is empty".to_string()));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else if has_explicit_port(trimmed) {
        format!("https://{}", trimmed)
    } else {
        format!("https://{}:{}", trimmed, DEFAULT_ADMIN_PORT)
    };

    let mut url = Url::parse(&candidate).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    let host = url
        .host_str()
        .ok_or_else(|| invalid("missing host".to_string()))?;
    validate_host(host).map_err(invalid)?;

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

fn has_explicit_port(host: &str) -> bool {
    // Bracketed IPv6 literals carry colons of their own
    let tail = match host.rfind(']') {
        Some(end) => &host[end + 1..],
        None if host.matches(':').count() > 1 => return false,
        None => host,
    };
    tail.rsplit_once(':')
        .is_some_and(|(_, port)| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()))
}

/// Parses the `--delimiter` argument
///
/// Accepts a single ASCII character, plus `\t` and `tab` for tab-separated files.
pub fn parse_delimiter(value: &str) -> Result<u8, ConfigError> {
    match value {
        "\\t" | "tab" | "\t" => return Ok(b'\t'),
        _ => {}
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(ConfigError::InvalidDelimiter(value.to_string())),
    }
}
