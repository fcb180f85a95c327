use crate::constants::{
    DEFAULT_MODEL, ENV_API_KEY, ENV_MODEL, ENV_PROXY_URL, ENV_SYSTEM_PROMPT, ENV_UPSTREAM_URL,
    PLACEHOLDER_API_KEY, PROXY_BASE_URL, UPSTREAM_BASE_URL,
};
use std::env;

/// Where the probe sends its request and what it asks for.
///
/// The defaults target a proxy on `localhost:8000` that forwards to an
/// Ollama backend on `localhost:11434`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub proxy_base_url: String,
    pub upstream_base_url: String,
    pub api_key: String,
    pub model: String,
    /// Sent as a leading `system` message when set.
    pub system_prompt: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            proxy_base_url: PROXY_BASE_URL.to_string(),
            upstream_base_url: UPSTREAM_BASE_URL.to_string(),
            api_key: PLACEHOLDER_API_KEY.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
        }
    }
}

impl ProbeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ProbeConfig::default();
        let set = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let get = |key: &str, default: String| set(key).unwrap_or(default);

        ProbeConfig {
            proxy_base_url: get(ENV_PROXY_URL, defaults.proxy_base_url),
            upstream_base_url: get(ENV_UPSTREAM_URL, defaults.upstream_base_url),
            api_key: get(ENV_API_KEY, defaults.api_key),
            model: get(ENV_MODEL, defaults.model),
            system_prompt: set(ENV_SYSTEM_PROMPT),
        }
    }
}
