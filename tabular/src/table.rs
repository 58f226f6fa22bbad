//! Owned table model with named columns and typed scalar cells.

use std::fmt;

use crate::error::TabularError;

/// A scalar cell value.
///
/// The set of kinds is closed on purpose: the result translator classifies
/// values by matching on this enum rather than by runtime type inspection,
/// and every kind carries its own wire-serialization rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Free text, a date string, or a resource IRI.
    Str(String),
    /// A boolean flag.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number (produced by `xsd:double` query results).
    Float(f64),
    /// An absent value. Null cells are omitted from result bindings.
    Null,
}

impl Value {
    /// Returns true if this value is [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the string content if this is a [`Value::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Canonical textual form: booleans are lower-cased, null is empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Null => Ok(()),
        }
    }
}

/// A table with named columns in fixed order and rows of [`Value`] cells.
///
/// Every row holds exactly one cell per column. Column order is
/// significant: the normalizer's projection and the result translator's
/// `head.vars` both preserve it.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Creates an empty table with the given column names.
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// The column names, in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The rows, in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Position of a column by name, if present.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Position of a column by name, failing with
    /// [`TabularError::MissingColumn`] if absent.
    ///
    /// # Errors
    ///
    /// Returns [`TabularError::MissingColumn`] when `name` is not a column
    /// of this table.
    pub fn require_column(&self, name: &str) -> Result<usize, TabularError> {
        self.column_index(name).ok_or_else(|| TabularError::MissingColumn {
            name: name.to_owned(),
        })
    }

    /// Appends a row.
    ///
    /// # Errors
    ///
    /// Returns [`TabularError::RowArity`] when the row's cell count does
    /// not match the column count.
    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), TabularError> {
        if row.len() != self.columns.len() {
            return Err(TabularError::RowArity {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }
}
