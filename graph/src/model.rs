//! The in-memory knowledge-graph model.
//!
//! [`GraphModel`] wraps the external store with the narrow surface the
//! pipeline needs: register a template document, map a normalized table
//! under a template IRI, load ontology Turtle handed over as opaque text,
//! and execute SPARQL returning a [`Table`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use oxigraph::io::RdfFormat;
use oxigraph::model::vocab::xsd;
use oxigraph::model::{GraphName, Literal, NamedNode, Quad, Term};
use oxigraph::sparql::QueryResults;
use oxigraph::store::Store;

use jaguar_tabular::{Table, Value};
use jaguar_templates::{parse_templates, GroundTriple, RdfTerm, Template};

use crate::error::GraphError;

/// An in-memory RDF model with template-based mapping and SPARQL access.
///
/// Queries take `&self` and the store supports concurrent reads, so a
/// shared model handle can serve parallel tool calls without locking.
pub struct GraphModel {
    store: Store,
    templates: HashMap<String, Template>,
}

impl GraphModel {
    /// Creates an empty model.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Storage`] if the in-memory store cannot be
    /// initialized.
    pub fn new() -> Result<Self, GraphError> {
        let store = Store::new().map_err(|e| GraphError::Storage(e.to_string()))?;
        Ok(Self {
            store,
            templates: HashMap::new(),
        })
    }

    /// Parses a template document and registers every definition in it,
    /// keyed by template IRI.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Template`] when the document is not
    /// well-formed.
    pub fn add_template(&mut self, source: &str) -> Result<(), GraphError> {
        for template in parse_templates(source)? {
            self.templates.insert(template.iri().to_owned(), template);
        }
        Ok(())
    }

    /// Instantiates a registered template over a normalized table and
    /// inserts the resulting triples into the default graph.
    ///
    /// Returns the number of triples newly added; triples already present
    /// are deduplicated by the store, which is what collapses the
    /// cross-product redundancy the normalizer introduces.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownTemplate`] for an unregistered IRI,
    /// [`GraphError::Template`] when instantiation fails, and
    /// [`GraphError::InvalidIri`]/[`GraphError::Storage`] when a triple
    /// cannot be inserted.
    pub fn map(&mut self, template_iri: &str, table: &Table) -> Result<usize, GraphError> {
        let template = self
            .templates
            .get(template_iri)
            .ok_or_else(|| GraphError::UnknownTemplate(template_iri.to_owned()))?;

        let mut inserted = 0;
        for triple in template.instantiate(table)? {
            let quad = to_quad(&triple)?;
            let added = self
                .store
                .insert(&quad)
                .map_err(|e| GraphError::Storage(e.to_string()))?;
            if added {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Loads Turtle data into the default graph.
    ///
    /// The text is handed whole to the store's parser; this model does
    /// not interpret it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Load`] when the data is not valid Turtle or
    /// the store rejects it.
    pub fn read_turtle(&mut self, data: &str) -> Result<(), GraphError> {
        self.store
            .load_from_reader(RdfFormat::Turtle, data.as_bytes())
            .map_err(|e| GraphError::Load(e.to_string()))
    }

    /// Loads a Turtle file into the default graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] when the file cannot be read and
    /// [`GraphError::Load`] when its content is not valid Turtle.
    pub fn read_turtle_file(&mut self, path: &Path) -> Result<(), GraphError> {
        let data = fs::read_to_string(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_turtle(&data)
    }

    /// Executes a SPARQL SELECT query and returns the solutions as a
    /// table: variables become columns in declaration order, unbound
    /// variables become null cells.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Query`] when the store rejects or fails the
    /// query and [`GraphError::UnsupportedResultForm`] for ASK/CONSTRUCT/
    /// DESCRIBE queries, which have no tabular projection.
    pub fn query(&self, sparql: &str) -> Result<Table, GraphError> {
        let results = self
            .store
            .query(sparql)
            .map_err(|e| GraphError::Query(e.to_string()))?;

        match results {
            QueryResults::Solutions(solutions) => {
                let variables = solutions.variables().to_vec();
                let columns: Vec<String> =
                    variables.iter().map(|v| v.as_str().to_owned()).collect();
                let mut table = Table::new(columns);
                for solution in solutions {
                    let solution = solution.map_err(|e| GraphError::Query(e.to_string()))?;
                    let row: Vec<Value> = variables
                        .iter()
                        .map(|v| solution.get(v).map_or(Value::Null, term_to_value))
                        .collect();
                    table.push_row(row)?;
                }
                Ok(table)
            }
            QueryResults::Boolean(_) | QueryResults::Graph(_) => {
                Err(GraphError::UnsupportedResultForm)
            }
        }
    }

    /// Number of triples currently in the store.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Storage`] if the store cannot be read.
    pub fn size(&self) -> Result<usize, GraphError> {
        self.store
            .len()
            .map_err(|e| GraphError::Storage(e.to_string()))
    }
}

/// Converts an engine triple into a store quad in the default graph.
fn to_quad(triple: &GroundTriple) -> Result<Quad, GraphError> {
    let subject = named_node(&triple.subject)?;
    let predicate = named_node(&triple.predicate)?;
    let object: Term = match &triple.object {
        RdfTerm::Iri(iri) => named_node(iri)?.into(),
        RdfTerm::Literal {
            value,
            datatype: Some(datatype),
        } => Literal::new_typed_literal(value.clone(), named_node(datatype)?).into(),
        RdfTerm::Literal {
            value,
            datatype: None,
        } => Literal::new_simple_literal(value.clone()).into(),
    };
    Ok(Quad::new(subject, predicate, object, GraphName::DefaultGraph))
}

fn named_node(iri: &str) -> Result<NamedNode, GraphError> {
    NamedNode::new(iri).map_err(|e| GraphError::InvalidIri(e.to_string()))
}

/// Converts a solution term into a table cell.
///
/// Boolean and integer literals come back as their native kinds so the
/// result translator can attach the right wire datatypes; every other
/// term keeps its textual form.
fn term_to_value(term: &Term) -> Value {
    match term {
        Term::NamedNode(node) => Value::Str(node.as_str().to_owned()),
        Term::BlankNode(node) => Value::Str(node.to_string()),
        Term::Literal(literal) => {
            if literal.datatype() == xsd::BOOLEAN {
                match literal.value().parse::<bool>() {
                    Ok(b) => Value::Bool(b),
                    Err(_) => Value::Str(literal.value().to_owned()),
                }
            } else if literal.datatype() == xsd::INTEGER {
                match literal.value().parse::<i64>() {
                    Ok(i) => Value::Int(i),
                    Err(_) => Value::Str(literal.value().to_owned()),
                }
            } else if literal.datatype() == xsd::DOUBLE || literal.datatype() == xsd::DECIMAL {
                match literal.value().parse::<f64>() {
                    Ok(x) => Value::Float(x),
                    Err(_) => Value::Str(literal.value().to_owned()),
                }
            } else {
                Value::Str(literal.value().to_owned())
            }
        }
        Term::Triple(triple) => Value::Str(triple.to_string()),
    }
}
