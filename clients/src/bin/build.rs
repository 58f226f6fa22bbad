//! `jaguar-build` — Assembles the jaguar knowledge graph from the
//! observation CSV, the mapping template, and the ontology, and prints
//! summary statistics.
//!
//! **Usage:**
//! ```
//! jaguar-build [--data <csv>] [--template <ottr>] [--ontology <ttl>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use jaguar_graph::pipeline::{build_model, ModelPaths};

/// Build the jaguar knowledge graph.
#[derive(Parser)]
#[command(name = "jaguar-build", about = "Assemble the jaguar knowledge graph")]
struct Args {
    /// Observation CSV with header row.
    #[arg(long, default_value = "data/jaguars.csv")]
    data: PathBuf,

    /// Mapping template document.
    #[arg(long, default_value = "data/jaguar_template.ottr")]
    template: PathBuf,

    /// Ontology Turtle file.
    #[arg(long, default_value = "data/jaguar_ontology.ttl")]
    ontology: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let paths = ModelPaths {
        data: args.data,
        template: args.template,
        ontology: args.ontology,
    };

    let (model, summary) = build_model(&paths)?;

    println!(
        "Loaded {} observation records ({} rows after list expansion)",
        summary.records, summary.expanded_rows
    );
    println!("  Mapped triples: {}", summary.mapped_triples);
    println!("  Store size:     {} triples", model.size()?);
    println!("Build complete.");
    Ok(())
}
