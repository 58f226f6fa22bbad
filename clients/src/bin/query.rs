//! `jaguar-query` — Assembles the jaguar knowledge graph and executes one
//! SPARQL query through the agent's query tool, printing the JSON the
//! tool returns (the wire-format result set, or the structured error
//! payload).
//!
//! **Usage:**
//! ```
//! jaguar-query --query 'SELECT …'
//! jaguar-query --query-file ./query.rq
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use jaguar_agent::QueryTool;
use jaguar_graph::pipeline::{build_model, ModelPaths};

/// Query the jaguar knowledge graph.
#[derive(Parser)]
#[command(name = "jaguar-query", about = "Run one SPARQL query against the jaguar knowledge graph")]
struct Args {
    /// SPARQL query text.
    #[arg(long, short = 'q', conflicts_with = "query_file")]
    query: Option<String>,

    /// File containing the SPARQL query.
    #[arg(long)]
    query_file: Option<PathBuf>,

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

    let sparql = match (args.query, &args.query_file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read query from {}", path.display()))?,
        (None, None) => bail!("either --query or --query-file is required"),
    };

    let paths = ModelPaths {
        data: args.data,
        template: args.template,
        ontology: args.ontology,
    };
    let (model, _) = build_model(&paths)?;
    let tool = QueryTool::new(Arc::new(model));

    println!("{}", tool.call(&sparql));
    Ok(())
}
