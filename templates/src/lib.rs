//! Minimal stOTTR template engine for tabular-to-RDF mapping.
//!
//! The pipeline hands this crate a template document as opaque text and a
//! normalized table whose columns match the template's parameter list; the
//! engine returns ground triples. Only the subset of stOTTR the bundled
//! mapping uses is supported:
//!
//! - `@prefix` declarations,
//! - template definitions `head [ ?p1, ?p2 ] :: { … } .`,
//! - bodies consisting of `ottr:Triple(subject, predicate, object)`
//!   instances whose arguments are parameter references, IRIs, prefixed
//!   names, string literals, integers, or booleans.
//!
//! # Entry Point
//!
//! ```
//! let source = r#"
//! @prefix ex: <http://example.org/ns#> .
//! @prefix ottr: <http://ns.ottr.xyz/0.4/> .
//! ex:Observation [ ?id, ?label ] :: {
//!     ottr:Triple(?id, ex:label, ?label)
//! } .
//! "#;
//! let templates = jaguar_templates::parse_templates(source).unwrap();
//! assert_eq!(templates[0].iri(), "http://example.org/ns#Observation");
//! assert_eq!(templates[0].parameters(), ["id", "label"]);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod instantiate;
pub mod parse;
pub mod vocab;

pub use error::TemplateError;
pub use instantiate::{GroundTriple, RdfTerm};
pub use parse::{parse_templates, Argument, Template, TriplePattern};
