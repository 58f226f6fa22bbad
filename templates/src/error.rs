//! Error type for template parsing and instantiation.

/// Errors produced while parsing a template source or instantiating a
/// template over a table.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The source text is not a well-formed template document.
    #[error("template syntax error: {0}")]
    Syntax(String),

    /// A prefixed name uses a prefix with no `@prefix` declaration.
    #[error("unknown prefix `{0}:`")]
    UnknownPrefix(String),

    /// A body instance head other than `ottr:Triple`.
    #[error("unsupported instance head `{0}`; only ottr:Triple is expanded")]
    UnsupportedInstance(String),

    /// An `ottr:Triple` instance with the wrong number of arguments.
    #[error("ottr:Triple takes 3 arguments, found {0}")]
    TripleArity(usize),

    /// A body argument references a parameter the signature does not
    /// declare.
    #[error("parameter `?{0}` is not declared in the template signature")]
    UnboundParameter(String),

    /// The table's columns do not match the template's parameter list in
    /// name and order. Binding is positional, so a mismatch would assign
    /// values to the wrong parameters; the engine refuses instead.
    #[error("table columns {columns:?} do not match template parameters {parameters:?}")]
    SignatureMismatch {
        /// The table's column names.
        columns: Vec<String>,
        /// The template's declared parameters.
        parameters: Vec<String>,
    },

    /// A subject position resolved to a non-IRI value.
    #[error("row {row}: subject `{value}` is not an IRI")]
    NonIriSubject {
        /// Zero-based row index in the mapped table.
        row: usize,
        /// The offending value's textual form.
        value: String,
    },

    /// A predicate position resolved to a non-IRI value.
    #[error("row {row}: predicate `{value}` is not an IRI")]
    NonIriPredicate {
        /// Zero-based row index in the mapped table.
        row: usize,
        /// The offending value's textual form.
        value: String,
    },
}
