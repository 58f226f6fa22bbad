//! End-to-end pipeline test over the bundled demo data.
//!
//! Builds the knowledge graph exactly the way the client binaries do
//! (CSV, normalizer, template mapping, ontology load) and verifies the
//! graph answers the workflow's representative queries.

#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use jaguar_graph::pipeline::{build_model, ModelPaths};
use jaguar_graph::to_wire_format;
use jaguar_tabular::Value;

fn bundled_paths() -> ModelPaths {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data");
    ModelPaths {
        data: data_dir.join("jaguars.csv"),
        template: data_dir.join("jaguar_template.ottr"),
        ontology: data_dir.join("jaguar_ontology.ttl"),
    }
}

#[test]
fn builds_the_graph_from_the_bundled_files() {
    let (model, summary) = build_model(&bundled_paths()).unwrap();

    assert_eq!(summary.records, 8);
    // Sum over rows of the product of each list column's split counts.
    assert_eq!(summary.expanded_rows, 47);
    assert!(summary.mapped_triples > 0);
    // The ontology load adds its own triples on top of the mapping.
    assert!(model.size().unwrap() > summary.mapped_triples);
}

#[test]
fn every_record_becomes_exactly_one_jaguar() {
    let (model, _) = build_model(&bundled_paths()).unwrap();
    let table = model
        .query(
            "PREFIX ont: <http://example.org/ontology#>\n\
             SELECT (COUNT(DISTINCT ?j) AS ?count) WHERE { ?j a ont:Jaguar }",
        )
        .unwrap();
    assert_eq!(table.rows()[0][0], Value::Int(8));
}

#[test]
fn padded_list_values_map_to_trimmed_resources() {
    let (model, _) = build_model(&bundled_paths()).unwrap();
    // Rio's location list is " AmazonRainforest ;Pantanal"; the padded
    // fragment must resolve to the same resource a clean value would.
    let table = model
        .query(
            "PREFIX ont: <http://example.org/ontology#>\n\
             PREFIX res: <http://example.org/resource#>\n\
             PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>\n\
             SELECT ?label WHERE {\n\
                 res:J3 ont:occursIn res:AmazonRainforest .\n\
                 res:AmazonRainforest rdfs:label ?label .\n\
             }",
        )
        .unwrap();
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows()[0][0], Value::Str("AmazonRainforest".into()));
}

#[test]
fn shared_values_deduplicate_into_one_resource() {
    let (model, _) = build_model(&bundled_paths()).unwrap();
    // Five records list Pantanal; the graph holds a single resource.
    let table = model
        .query(
            "PREFIX ont: <http://example.org/ontology#>\n\
             PREFIX res: <http://example.org/resource#>\n\
             SELECT (COUNT(?j) AS ?count) WHERE { ?j ont:occursIn res:Pantanal }",
        )
        .unwrap();
    assert_eq!(table.rows()[0][0], Value::Int(5));
}

#[test]
fn killed_flag_round_trips_as_boolean() {
    let (model, _) = build_model(&bundled_paths()).unwrap();
    let table = model
        .query(
            "PREFIX ont: <http://example.org/ontology#>\n\
             PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>\n\
             SELECT ?label ?cause WHERE {\n\
                 ?j a ont:Jaguar ;\n\
                    ont:wasKilled true ;\n\
                    rdfs:label ?label .\n\
                 OPTIONAL { ?j ont:causeOfDeath ?cause }\n\
             } ORDER BY ?label",
        )
        .unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0][0], Value::Str("Nero".into()));
    assert_eq!(
        table.rows()[0][1],
        Value::Str("HumanWildlifeConflict".into())
    );
    assert_eq!(table.rows()[1][0], Value::Str("Rio".into()));
    assert_eq!(table.rows()[1][1], Value::Str("Poaching".into()));
}

#[test]
fn missing_cells_produce_no_facts() {
    let (model, _) = build_model(&bundled_paths()).unwrap();
    // Itza has neither an identification mark nor status notes.
    let table = model
        .query(
            "PREFIX ont: <http://example.org/ontology#>\n\
             PREFIX res: <http://example.org/resource#>\n\
             SELECT ?mark ?notes WHERE {\n\
                 OPTIONAL { res:J6 ont:hasIdentificationMark ?mark }\n\
                 OPTIONAL { res:J6 ont:statusNotes ?notes }\n\
             }",
        )
        .unwrap();
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows()[0][0], Value::Null);
    assert_eq!(table.rows()[0][1], Value::Null);

    // Null cells are omitted from the wire bindings entirely.
    let wire = to_wire_format(&table);
    assert_eq!(wire.head.vars, ["mark", "notes"]);
    assert!(wire.results.bindings[0].is_empty());
}

#[test]
fn missing_input_file_aborts_initialization() {
    let mut paths = bundled_paths();
    paths.ontology = PathBuf::from("data/no_such_ontology.ttl");
    let err = build_model(&paths).unwrap_err();
    assert!(err.to_string().contains("no_such_ontology.ttl"));
}
