//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. The handler itself never touches the environment: it is
//! handed an [`UpstreamConfig`] built from these values.
use std::env;
use std::time::Duration;

pub const DEFAULT_INPAINTING_API_URL: &str = "https://default-tensor-art-api-url.com/inpaint";

pub struct Config {
    pub inpainting_api_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
    pub api_host: String,
    pub api_port: String,
}

/// What the upstream client needs to reach the inpainting service.
#[derive(Clone, Debug, PartialEq)]
pub struct UpstreamConfig {
    pub url: String,
    pub credential: Option<String>,
    pub timeout: Option<Duration>,
}

impl UpstreamConfig {
    /// Endpoint and credential only; empty values fall back like unset ones.
    pub fn new(url: Option<String>, credential: Option<String>) -> Self {
        UpstreamConfig {
            url: non_empty(url).unwrap_or_else(|| DEFAULT_INPAINTING_API_URL.to_string()),
            credential: non_empty(credential),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig::new(None, None)
    }
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Result<Self, env::VarError> {
        let upstream = UpstreamConfig::new(
            env::var("INPAINTING_API_URL").ok(),
            env::var("TENSOR_ART_API_KEY").ok(),
        );
        Ok(Config {
            inpainting_api_url: upstream.url,
            api_key: upstream.credential,
            timeout_secs: parse_timeout_secs(env::var("INPAINTING_TIMEOUT_SECS").ok().as_deref()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "8189".to_string()),
        })
    }

    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig {
            url: self.inpainting_api_url.clone(),
            credential: self.api_key.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn print_env_vars() {
        println!("INPAINTING_API_URL: {}", env::var("INPAINTING_API_URL").unwrap_or_else(|_| "<unset>".to_string()));
        // never echo the key itself
        println!("TENSOR_ART_API_KEY: {}", if env::var("TENSOR_ART_API_KEY").map(|k| !k.is_empty()).unwrap_or(false) { "<set>" } else { "<unset>" });
        println!("INPAINTING_TIMEOUT_SECS: {}", env::var("INPAINTING_TIMEOUT_SECS").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_HOST: {}", env::var("API_HOST").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_PORT: {}", env::var("API_PORT").unwrap_or_else(|_| "<unset>".to_string()));
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Positive whole seconds; anything else means "no timeout".
pub fn parse_timeout_secs(raw: Option<&str>) -> Option<u64> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<u64>() {
        Ok(0) | Err(_) => {
            tracing::warn!("Invalid INPAINTING_TIMEOUT_SECS '{}', ignoring", raw);
            None
        }
        Ok(secs) => Some(secs),
    }
}
