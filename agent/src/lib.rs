//! Agent-facing surface of the jaguar knowledge graph.
//!
//! The conversational runtime itself is external; this crate provides
//! what the wiring code hands to it:
//!
//! - [`AgentSettings`] — credentials and model identifier, read from the
//!   environment once at process start,
//! - [`prompts`] — the system instructions and the query tool's
//!   description text,
//! - [`QueryTool`] — the single tool callable: one SPARQL string in, one
//!   JSON string out, with failures returned as data rather than raised.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::sync::Arc;
//! use jaguar_agent::{AgentSettings, QueryTool};
//! use jaguar_graph::GraphModel;
//!
//! let settings = AgentSettings::from_env();
//! let model = Arc::new(GraphModel::new().unwrap());
//! let tool = QueryTool::new(model);
//! println!("{} ({})", tool.name(), settings.model_id);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod prompts;
pub mod settings;
pub mod tool;

pub use settings::{AgentSettings, DEFAULT_MODEL_ID};
pub use tool::QueryTool;
