//! Error type for graph model operations.

use std::io;
use std::path::PathBuf;

use jaguar_tabular::TabularError;
use jaguar_templates::TemplateError;

/// Errors produced while building or querying the knowledge graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Template parsing or instantiation failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Table construction failed while collecting query solutions.
    #[error(transparent)]
    Tabular(#[from] TabularError),

    /// `map` was called with a template IRI that was never registered.
    #[error("no template registered under `{0}`")]
    UnknownTemplate(String),

    /// Instantiation produced a string that is not a valid IRI.
    #[error("invalid IRI produced during mapping: {0}")]
    InvalidIri(String),

    /// The underlying store rejected an operation.
    #[error("storage error: {0}")]
    Storage(String),

    /// RDF data could not be parsed and loaded.
    #[error("failed to load RDF data: {0}")]
    Load(String),

    /// SPARQL execution failed in the store.
    #[error("query execution failed: {0}")]
    Query(String),

    /// The query produced an ASK/CONSTRUCT/DESCRIBE result, which has no
    /// tabular form.
    #[error("query returned a non-tabular result form")]
    UnsupportedResultForm,

    /// A file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
