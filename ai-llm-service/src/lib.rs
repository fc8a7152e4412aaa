//! Chat-completion client for OpenAI-compatible endpoints.
//!
//! - [`config`]: model config and env-driven defaults
//! - [`services::open_ai_service`]: the HTTP client
//! - [`error_handler`]: unified error type
//! - [`telemetry`]: tracing layer for binaries embedding this crate

pub mod config {
    pub mod default_config;
    pub mod llm_model_config;
}

pub mod services {
    pub mod open_ai_service;
}

pub mod error_handler;
pub mod telemetry;

pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::{AiLlmError, Result};
pub use services::open_ai_service::OpenAiService;
