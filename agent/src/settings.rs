//! Agent runtime configuration.
//!
//! The hosting agent runtime needs an API credential and a model
//! identifier. Both are collected into an explicit settings struct once
//! at process start; nothing deeper in the call stack reads the
//! environment.

use std::env;

/// Model identifier used when the environment does not override it.
pub const DEFAULT_MODEL_ID: &str = "gpt-4o";

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the model identifier.
pub const MODEL_ID_VAR: &str = "OPENAI_RESPONSES_MODEL_ID";

/// Configuration for the external agent runtime.
#[derive(Debug, Clone)]
pub struct AgentSettings {
    /// API credential; empty when unset.
    pub api_key: String,
    /// Model identifier.
    pub model_id: String,
}

impl AgentSettings {
    /// Reads the settings from the process environment.
    ///
    /// A missing credential is kept as an empty string so the hosting
    /// runtime can report it on first use; the model identifier falls
    /// back to [`DEFAULT_MODEL_ID`].
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_VAR).unwrap_or_default(),
            model_id: env::var(MODEL_ID_VAR).unwrap_or_else(|_| DEFAULT_MODEL_ID.to_owned()),
        }
    }
}
