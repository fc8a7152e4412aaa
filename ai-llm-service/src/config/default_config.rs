//! Default LLM config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `OPENAI_API_KEY`   = bearer token (mandatory, no fallback)
//! - `OPENAI_URL`       = API base (default `https://api.openai.com`)
//! - `OPENAI_MODEL`     = model identifier (default `gpt-3.5-turbo`)
//! - `LLM_MAX_TOKENS`   = optional max tokens (u32)
//! - `LLM_TEMPERATURE`  = optional temperature (f32, `0.0..=2.0`)
//! - `LLM_TOP_P`        = optional nucleus sampling cutoff (f32, `0.0..=1.0`)
//! - `LLM_TIMEOUT_SECS` = optional request timeout (u64)

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{
        AiLlmError, ConfigError, must_var, opt_f32, opt_u32, opt_u64, validate_http_endpoint,
        validate_range_f32, var_or,
    },
};

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Constructs the chat-completion config from the process environment.
///
/// # Errors
/// See [`config_openai_with`].
pub fn config_openai() -> Result<LlmModelConfig, AiLlmError> {
    config_openai_with(|name| std::env::var(name).ok())
}

/// Constructs the chat-completion config from an arbitrary variable lookup.
///
/// # Errors
///
/// - [`ConfigError::MissingVar`] if `OPENAI_API_KEY` is missing or blank
/// - [`ConfigError::InvalidFormat`] if `OPENAI_URL` is not http/https
/// - [`ConfigError::InvalidNumber`] / [`ConfigError::OutOfRange`] for bad numeric knobs
pub fn config_openai_with<F>(lookup: F) -> Result<LlmModelConfig, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = must_var(&lookup, "OPENAI_API_KEY")?;

    let endpoint = var_or(&lookup, "OPENAI_URL", DEFAULT_OPENAI_URL);
    validate_http_endpoint("OPENAI_URL", &endpoint)?;

    let model = var_or(&lookup, "OPENAI_MODEL", DEFAULT_OPENAI_MODEL);
    if model.trim().is_empty() {
        return Err(ConfigError::EmptyModel.into());
    }

    let max_tokens = opt_u32(&lookup, "LLM_MAX_TOKENS")?;
    let temperature = opt_f32(&lookup, "LLM_TEMPERATURE")?;
    if let Some(t) = temperature {
        validate_range_f32("temperature", t, 0.0, 2.0)?;
    }
    let top_p = opt_f32(&lookup, "LLM_TOP_P")?;
    if let Some(p) = top_p {
        validate_range_f32("top_p", p, 0.0, 1.0)?;
    }
    let timeout_secs = opt_u64(&lookup, "LLM_TIMEOUT_SECS")?;

    Ok(LlmModelConfig {
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature,
        top_p,
        timeout_secs,
    })
}
