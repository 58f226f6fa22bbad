//! List-column normalization and resource-IRI derivation.
//!
//! Prepares a raw observation table for template-based graph mapping:
//! multi-valued cells are exploded into the cross-product of their split
//! values, categorical columns get a derived IRI column alongside the
//! label column, and the result is projected onto the mapping template's
//! parameter list in its declared order.

use crate::error::TabularError;
use crate::table::{Table, Value};

/// The inner separator of multi-valued cells.
pub const LIST_SEPARATOR: char = ';';

/// A categorical column and the name of its derived IRI column.
#[derive(Debug, Clone)]
pub struct IriColumn {
    /// Column whose trimmed string content is appended to the prefix.
    pub source: String,
    /// Name of the derived column holding the resource IRI.
    pub target: String,
}

impl IriColumn {
    /// Convenience constructor.
    #[must_use]
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_owned(),
            target: target.to_owned(),
        }
    }
}

/// Everything the normalizer needs to know about one mapping workflow.
#[derive(Debug, Clone)]
pub struct NormalizeSpec {
    /// Multi-valued columns to split on [`LIST_SEPARATOR`] and explode,
    /// processed in the given order.
    pub list_columns: Vec<String>,
    /// Namespace prefix prepended to every cleaned categorical value.
    pub resource_prefix: String,
    /// Categorical columns that get a derived IRI column.
    pub iri_columns: Vec<IriColumn>,
    /// Output columns, in the template's declared parameter order.
    pub projection: Vec<String>,
    /// Whether a zero-row input table is an error. An empty table is a
    /// valid empty result by default.
    pub deny_empty: bool,
}

/// Normalizes a raw table for template mapping.
///
/// The transform is pure: the input table is not modified. Processing
/// order is fixed so results are stable for testing: explode each list
/// column in turn, then derive IRI columns, then project.
///
/// # Errors
///
/// - [`TabularError::EmptyResourcePrefix`] when the prefix is empty.
/// - [`TabularError::EmptyDataset`] when the input has no rows and
///   `spec.deny_empty` is set.
/// - [`TabularError::MissingColumn`] when a list column, IRI source
///   column, or projection column is absent. The normalizer fails fast
///   rather than null-filling: the downstream template binds columns
///   positionally, and a silently dropped column would misassign every
///   value after it.
/// - [`TabularError::DuplicateColumn`] when a derived IRI column name is
///   already taken.
pub fn normalize(raw: &Table, spec: &NormalizeSpec) -> Result<Table, TabularError> {
    if spec.resource_prefix.is_empty() {
        return Err(TabularError::EmptyResourcePrefix);
    }
    if spec.deny_empty && raw.row_count() == 0 {
        return Err(TabularError::EmptyDataset);
    }

    let mut table = raw.clone();
    for column in &spec.list_columns {
        table = explode(&table, column)?;
    }
    for iri in &spec.iri_columns {
        table = derive_iri(&table, iri, &spec.resource_prefix)?;
    }
    project(&table, &spec.projection)
}

/// Replaces each row by one row per split value of `column`.
///
/// Every fragment is trimmed before use. Non-string cells (including
/// null) pass through as a single unchanged row.
fn explode(table: &Table, column: &str) -> Result<Table, TabularError> {
    let index = table.require_column(column)?;
    let mut out = Table::new(table.columns().to_vec());
    for row in table.rows() {
        match &row[index] {
            Value::Str(cell) => {
                for fragment in cell.split(LIST_SEPARATOR) {
                    let mut expanded = row.clone();
                    expanded[index] = Value::Str(fragment.trim().to_owned());
                    out.push_row(expanded)?;
                }
            }
            _ => out.push_row(row.clone())?,
        }
    }
    Ok(out)
}

/// Appends a derived IRI column: `prefix + trimmed(value)`.
///
/// Two rows with the same cleaned value always produce byte-identical
/// IRIs; that equality is what lets the downstream mapping engine
/// deduplicate resources across rows. Null source cells derive null.
fn derive_iri(table: &Table, iri: &IriColumn, prefix: &str) -> Result<Table, TabularError> {
    let index = table.require_column(&iri.source)?;
    if table.column_index(&iri.target).is_some() {
        return Err(TabularError::DuplicateColumn {
            name: iri.target.clone(),
        });
    }

    let mut columns = table.columns().to_vec();
    columns.push(iri.target.clone());
    let mut out = Table::new(columns);
    for row in table.rows() {
        let derived = match &row[index] {
            Value::Null => Value::Null,
            Value::Str(s) => Value::Str(format!("{prefix}{}", s.trim())),
            other => Value::Str(format!("{prefix}{other}")),
        };
        let mut expanded = row.clone();
        expanded.push(derived);
        out.push_row(expanded)?;
    }
    Ok(out)
}

/// Projects the table onto exactly the given columns, in the given order.
fn project(table: &Table, columns: &[String]) -> Result<Table, TabularError> {
    let indices = columns
        .iter()
        .map(|name| table.require_column(name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = Table::new(columns.to_vec());
    for row in table.rows() {
        out.push_row(indices.iter().map(|&i| row[i].clone()).collect())?;
    }
    Ok(out)
}
