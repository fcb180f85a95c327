pub const PROXY_BASE_URL: &str = "http://localhost:8000/v1";
pub const UPSTREAM_BASE_URL: &str = "http://localhost:11434/v1";
pub const BASE_URL_HEADER: &str = "x-openai-base-url";
pub const PLACEHOLDER_API_KEY: &str = "ollama";
pub const DEFAULT_MODEL: &str = "qwen:4b";
pub const DEFAULT_PROMPT: &str = "Say this is a test";
pub const CHAT_COMPLETIONS_PATH: &str = "chat/completions";
pub const MODELS_PATH: &str = "models";
pub const CMD_MODELS: &str = "m";

pub const ENV_PROXY_URL: &str = "PROBE_PROXY_URL";
pub const ENV_UPSTREAM_URL: &str = "PROBE_UPSTREAM_URL";
pub const ENV_API_KEY: &str = "PROBE_API_KEY";
pub const ENV_MODEL: &str = "PROBE_MODEL";
pub const ENV_SYSTEM_PROMPT: &str = "PROBE_SYSTEM_PROMPT";
