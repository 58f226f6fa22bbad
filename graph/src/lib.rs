//! In-memory jaguar knowledge-graph model.
//!
//! The `jaguar-graph` crate owns the graph side of the pipeline:
//!
//! - [`GraphModel`] wraps the external in-memory store behind the narrow
//!   surface the pipeline needs (register a template, map a normalized
//!   table, load ontology Turtle, execute SPARQL into a table),
//! - [`results`] translates query result tables into the SPARQL 1.1
//!   JSON wire shape,
//! - [`pipeline`] wires the demonstrated observation workflow together
//!   at startup.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::PathBuf;
//! use jaguar_graph::pipeline::{build_model, ModelPaths};
//!
//! let paths = ModelPaths {
//!     data: PathBuf::from("data/jaguars.csv"),
//!     template: PathBuf::from("data/jaguar_template.ottr"),
//!     ontology: PathBuf::from("data/jaguar_ontology.ttl"),
//! };
//! let (model, summary) = build_model(&paths).unwrap();
//! println!("{} triples", model.size().unwrap());
//! println!("{} records", summary.records);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod model;
pub mod pipeline;
pub mod results;

pub use error::GraphError;
pub use model::GraphModel;
pub use results::{classify, to_wire_format, QueryResultSet, WireKind, WireTerm};
