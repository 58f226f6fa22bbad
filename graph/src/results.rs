//! Tabular-to-wire result translation.
//!
//! Converts a query result [`Table`] into the SPARQL 1.1 Query Results
//! JSON shape: `{"head": {"vars": […]}, "results": {"bindings": […]}}`.
//! Each cell's wire type is decided by an explicit classification over
//! the closed [`Value`] kind set rather than by runtime type inspection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use jaguar_tabular::{Table, Value};
use jaguar_templates::vocab::{XSD_BOOLEAN, XSD_INTEGER};

/// Wire type of one bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireKind {
    /// A resource reference.
    Uri,
    /// A literal value, possibly datatyped.
    Literal,
}

/// One bound value of a result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireTerm {
    /// `uri` or `literal`.
    #[serde(rename = "type")]
    pub kind: WireKind,
    /// Textual form of the value.
    pub value: String,
    /// Datatype IRI for boolean and integer literals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

/// The `head` member: query variables in projection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Head {
    /// Column names of the result table, order preserved.
    pub vars: Vec<String>,
}

/// The `results` member: one binding map per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bindings {
    /// Rows in input order. Null cells have no entry.
    pub bindings: Vec<BTreeMap<String, WireTerm>>,
}

/// A complete wire-format query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResultSet {
    /// Variable list.
    pub head: Head,
    /// Bindings.
    pub results: Bindings,
}

/// Classifies one cell value, or `None` for a null cell (omitted from
/// its row's binding entirely).
///
/// Strings starting with `http://` or `https://` are resource
/// references; booleans carry `xsd:boolean` with a lower-cased lexical
/// form; integers carry `xsd:integer`; every other kind falls back to a
/// plain literal in its default string form.
#[must_use]
pub fn classify(value: &Value) -> Option<WireTerm> {
    match value {
        Value::Null => None,
        Value::Str(s) => {
            let kind = if s.starts_with("http://") || s.starts_with("https://") {
                WireKind::Uri
            } else {
                WireKind::Literal
            };
            Some(WireTerm {
                kind,
                value: s.clone(),
                datatype: None,
            })
        }
        Value::Bool(b) => Some(WireTerm {
            kind: WireKind::Literal,
            value: b.to_string(),
            datatype: Some(XSD_BOOLEAN.to_owned()),
        }),
        Value::Int(i) => Some(WireTerm {
            kind: WireKind::Literal,
            value: i.to_string(),
            datatype: Some(XSD_INTEGER.to_owned()),
        }),
        other => Some(WireTerm {
            kind: WireKind::Literal,
            value: other.to_string(),
            datatype: None,
        }),
    }
}

/// Translates a result table into the wire shape.
///
/// `head.vars` always reflects the table's column order, even when there
/// are no rows; row order is preserved; the input is not modified.
#[must_use]
pub fn to_wire_format(table: &Table) -> QueryResultSet {
    let bindings = table
        .rows()
        .iter()
        .map(|row| {
            table
                .columns()
                .iter()
                .zip(row)
                .filter_map(|(name, value)| classify(value).map(|term| (name.clone(), term)))
                .collect()
        })
        .collect();

    QueryResultSet {
        head: Head {
            vars: table.columns().to_vec(),
        },
        results: Bindings { bindings },
    }
}
