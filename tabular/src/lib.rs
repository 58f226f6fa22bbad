//! Tabular data model and normalization for the jaguar knowledge-graph
//! pipeline.
//!
//! The `jaguar-tabular` crate owns everything that happens to observation
//! data before it reaches the template mapping engine:
//!
//! - a small owned [`Table`] model with named columns and typed
//!   [`Value`] cells,
//! - a CSV source that reads a delimited file with a header row into a
//!   `Table`,
//! - the list-column normalizer that explodes `;`-separated cells into
//!   the cross-product of their values, derives resource IRIs for
//!   categorical columns, and projects the result onto the mapping
//!   template's parameter order.
//!
//! # Entry Point
//!
//! ```
//! use jaguar_tabular::{normalize, read_csv, IriColumn, NormalizeSpec};
//!
//! let raw = read_csv("animal,habitat\nA1,Wetland; Forest".as_bytes()).unwrap();
//! let spec = NormalizeSpec {
//!     list_columns: vec!["habitat".into()],
//!     resource_prefix: "http://example.org/resource#".into(),
//!     iri_columns: vec![IriColumn::new("animal", "animal_iri")],
//!     projection: vec!["animal".into(), "animal_iri".into(), "habitat".into()],
//!     deny_empty: false,
//! };
//! let normalized = normalize(&raw, &spec).unwrap();
//! assert_eq!(normalized.columns(), ["animal", "animal_iri", "habitat"]);
//! assert_eq!(normalized.row_count(), 2);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod normalize;
pub mod source;
pub mod table;

pub use error::TabularError;
pub use normalize::{normalize, IriColumn, NormalizeSpec};
pub use source::{read_csv, read_csv_file};
pub use table::{Table, Value};
