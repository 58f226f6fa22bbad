//! Row-by-row template instantiation.
//!
//! Binds a template's parameters to a table's columns positionally and
//! materializes the body's triple patterns for every row.

use jaguar_tabular::{Table, Value};

use crate::error::TemplateError;
use crate::parse::{Argument, Template};
use crate::vocab::{XSD_BOOLEAN, XSD_DOUBLE, XSD_INTEGER};

/// An RDF term produced by instantiation.
///
/// Engine-local on purpose: the store adapter converts these into its own
/// term types, so this crate carries no store dependency.
#[derive(Debug, Clone, PartialEq)]
pub enum RdfTerm {
    /// A resource IRI.
    Iri(String),
    /// A literal with an optional datatype IRI.
    Literal {
        /// Lexical form.
        value: String,
        /// Datatype IRI, or `None` for a plain string literal.
        datatype: Option<String>,
    },
}

impl RdfTerm {
    fn typed(value: String, datatype: &str) -> Self {
        RdfTerm::Literal {
            value,
            datatype: Some(datatype.to_owned()),
        }
    }

    fn describe(&self) -> String {
        match self {
            RdfTerm::Iri(iri) => iri.clone(),
            RdfTerm::Literal { value, .. } => value.clone(),
        }
    }
}

/// One ground triple: subject and predicate IRIs plus an object term.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundTriple {
    /// Subject IRI.
    pub subject: String,
    /// Predicate IRI.
    pub predicate: String,
    /// Object term.
    pub object: RdfTerm,
}

impl Template {
    /// Instantiates this template over a normalized table.
    ///
    /// The table's columns must equal the template's parameter list in
    /// name and order. Per row, each body pattern is materialized; a
    /// pattern whose arguments include a null cell is skipped for that
    /// row (missing data yields no fact).
    ///
    /// # Errors
    ///
    /// - [`TemplateError::SignatureMismatch`] when the columns do not
    ///   match the parameter list.
    /// - [`TemplateError::NonIriSubject`] / [`TemplateError::NonIriPredicate`]
    ///   when a subject or predicate position resolves to a literal.
    pub fn instantiate(&self, table: &Table) -> Result<Vec<GroundTriple>, TemplateError> {
        if table.columns() != self.parameters() {
            return Err(TemplateError::SignatureMismatch {
                columns: table.columns().to_vec(),
                parameters: self.parameters().to_vec(),
            });
        }

        let mut triples = Vec::new();
        for (row_index, row) in table.rows().iter().enumerate() {
            for pattern in self.body() {
                let (Some(subject), Some(predicate), Some(object)) = (
                    resolve(&pattern.subject, row),
                    resolve(&pattern.predicate, row),
                    resolve(&pattern.object, row),
                ) else {
                    continue;
                };

                let RdfTerm::Iri(subject) = subject else {
                    return Err(TemplateError::NonIriSubject {
                        row: row_index,
                        value: subject.describe(),
                    });
                };
                let RdfTerm::Iri(predicate) = predicate else {
                    return Err(TemplateError::NonIriPredicate {
                        row: row_index,
                        value: predicate.describe(),
                    });
                };
                triples.push(GroundTriple {
                    subject,
                    predicate,
                    object,
                });
            }
        }
        Ok(triples)
    }
}

/// Resolves one argument against a row; `None` means a null binding.
fn resolve(argument: &Argument, row: &[Value]) -> Option<RdfTerm> {
    match argument {
        Argument::Parameter { index, .. } => term_from_value(&row[*index]),
        Argument::Iri(iri) => Some(RdfTerm::Iri(iri.clone())),
        Argument::Str(s) => Some(RdfTerm::Literal {
            value: s.clone(),
            datatype: None,
        }),
        Argument::Int(i) => Some(RdfTerm::typed(i.to_string(), XSD_INTEGER)),
        Argument::Bool(b) => Some(RdfTerm::typed(b.to_string(), XSD_BOOLEAN)),
    }
}

/// Materializes a cell value as an RDF term.
///
/// Strings that look like HTTP(S) IRIs become resource references;
/// everything else becomes a literal with the kind's datatype.
fn term_from_value(value: &Value) -> Option<RdfTerm> {
    match value {
        Value::Null => None,
        Value::Str(s) if is_iri(s) => Some(RdfTerm::Iri(s.clone())),
        Value::Str(s) => Some(RdfTerm::Literal {
            value: s.clone(),
            datatype: None,
        }),
        Value::Bool(b) => Some(RdfTerm::typed(b.to_string(), XSD_BOOLEAN)),
        Value::Int(i) => Some(RdfTerm::typed(i.to_string(), XSD_INTEGER)),
        Value::Float(x) => Some(RdfTerm::typed(x.to_string(), XSD_DOUBLE)),
    }
}

fn is_iri(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::parse::parse_templates;

    const SOURCE: &str = "\
        @prefix ont: <http://example.org/ontology#> .\n\
        @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n\
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
        @prefix ottr: <http://ns.ottr.xyz/0.4/> .\n\
        ont:Observation [ ?id, ?name, ?killed, ?sightings ] :: {\n\
            ottr:Triple(?id, rdf:type, ont:Jaguar),\n\
            ottr:Triple(?id, rdfs:label, ?name),\n\
            ottr:Triple(?id, ont:wasKilled, ?killed),\n\
            ottr:Triple(?id, ont:sightings, ?sightings)\n\
        } .\n";

    fn template() -> Template {
        parse_templates(SOURCE).unwrap().remove(0)
    }

    fn observation_table(rows: Vec<Vec<Value>>) -> Table {
        let mut table = Table::new(vec![
            "id".into(),
            "name".into(),
            "killed".into(),
            "sightings".into(),
        ]);
        for row in rows {
            table.push_row(row).unwrap();
        }
        table
    }

    #[test]
    fn instantiates_each_pattern_per_row() {
        let table = observation_table(vec![vec![
            Value::Str("http://example.org/resource#J1".into()),
            Value::Str("Bandit".into()),
            Value::Bool(false),
            Value::Int(12),
        ]]);
        let triples = template().instantiate(&table).unwrap();
        assert_eq!(triples.len(), 4);

        assert_eq!(
            triples[0],
            GroundTriple {
                subject: "http://example.org/resource#J1".into(),
                predicate: "http://www.w3.org/1999/02/22-rdf-syntax-ns#type".into(),
                object: RdfTerm::Iri("http://example.org/ontology#Jaguar".into()),
            }
        );
        assert_eq!(
            triples[1].object,
            RdfTerm::Literal {
                value: "Bandit".into(),
                datatype: None,
            }
        );
        assert_eq!(
            triples[2].object,
            RdfTerm::Literal {
                value: "false".into(),
                datatype: Some(XSD_BOOLEAN.into()),
            }
        );
        assert_eq!(
            triples[3].object,
            RdfTerm::Literal {
                value: "12".into(),
                datatype: Some(XSD_INTEGER.into()),
            }
        );
    }

    #[test]
    fn null_arguments_skip_the_pattern_only() {
        let table = observation_table(vec![vec![
            Value::Str("http://example.org/resource#J2".into()),
            Value::Null,
            Value::Bool(true),
            Value::Null,
        ]]);
        let triples = template().instantiate(&table).unwrap();
        // label and sightings are skipped; type and wasKilled remain.
        assert_eq!(triples.len(), 2);
        assert!(triples
            .iter()
            .all(|t| t.subject == "http://example.org/resource#J2"));
    }

    #[test]
    fn column_order_mismatch_is_refused() {
        let mut table = Table::new(vec![
            "name".into(),
            "id".into(),
            "killed".into(),
            "sightings".into(),
        ]);
        table
            .push_row(vec![
                Value::Str("Bandit".into()),
                Value::Str("http://example.org/resource#J1".into()),
                Value::Bool(false),
                Value::Int(1),
            ])
            .unwrap();
        let err = template().instantiate(&table).unwrap_err();
        assert!(matches!(err, TemplateError::SignatureMismatch { .. }));
    }

    #[test]
    fn literal_subject_is_an_error() {
        let table = observation_table(vec![vec![
            Value::Str("J1".into()),
            Value::Str("Bandit".into()),
            Value::Bool(false),
            Value::Int(1),
        ]]);
        let err = template().instantiate(&table).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::NonIriSubject { row: 0, value } if value == "J1"
        ));
    }

    #[test]
    fn empty_table_yields_no_triples() {
        let table = observation_table(Vec::new());
        assert!(template().instantiate(&table).unwrap().is_empty());
    }
}
