//! The SPARQL query tool exposed to the agent runtime.
//!
//! One callable over one string parameter. Query failures are returned
//! as data (a structured JSON payload), never raised, so the
//! conversational loop can see the failure and retry with a corrected
//! query.

use std::sync::Arc;

use serde::Serialize;

use jaguar_graph::{to_wire_format, GraphModel};

use crate::prompts::{TOOL_DESCRIPTION, TOOL_NAME};

/// Context note attached to every error payload.
const ERROR_NOTE: &str = "Query executed against the in-memory jaguar knowledge graph";

/// Error payload returned when query execution or translation fails.
#[derive(Debug, Serialize)]
struct ErrorPayload<'a> {
    error: String,
    query: &'a str,
    note: &'a str,
}

/// A SPARQL query tool bound to one graph model.
///
/// Holds an immutable shared handle to the model and nothing else;
/// concurrent calls are safe because queries take `&self` all the way
/// down.
pub struct QueryTool {
    model: Arc<GraphModel>,
}

impl QueryTool {
    /// Creates a tool bound to the given model handle.
    #[must_use]
    pub fn new(model: Arc<GraphModel>) -> Self {
        Self { model }
    }

    /// Name the tool is registered under with the agent runtime.
    #[must_use]
    pub fn name(&self) -> &'static str {
        TOOL_NAME
    }

    /// Tool description for the agent runtime.
    #[must_use]
    pub fn description(&self) -> &'static str {
        TOOL_DESCRIPTION
    }

    /// Executes one SPARQL query and returns a JSON string: the wire
    /// format result set on success, or the structured error payload
    /// (`error`, `query`, `note`) on failure. Never panics and never
    /// propagates an error.
    #[must_use]
    pub fn call(&self, sparql_query: &str) -> String {
        match self.model.query(sparql_query.trim()) {
            Ok(table) => {
                let result = to_wire_format(&table);
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => json,
                    Err(e) => error_json(e.to_string(), sparql_query),
                }
            }
            Err(e) => error_json(e.to_string(), sparql_query),
        }
    }
}

/// Renders the error payload, falling back to a minimal literal if even
/// serialization fails.
fn error_json(error: String, query: &str) -> String {
    let payload = ErrorPayload {
        error,
        query,
        note: ERROR_NOTE,
    };
    serde_json::to_string_pretty(&payload)
        .unwrap_or_else(|_| format!("{{\"error\": \"query failed\", \"note\": \"{ERROR_NOTE}\"}}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use jaguar_tabular::{Table, Value};

    const TEMPLATE: &str = "\
        @prefix ont: <http://example.org/ontology#> .\n\
        @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n\
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
        @prefix ottr: <http://ns.ottr.xyz/0.4/> .\n\
        ont:Observation [ ?id, ?name, ?killed ] :: {\n\
            ottr:Triple(?id, rdf:type, ont:Jaguar),\n\
            ottr:Triple(?id, rdfs:label, ?name),\n\
            ottr:Triple(?id, ont:wasKilled, ?killed)\n\
        } .\n";

    fn tool() -> QueryTool {
        let mut table = Table::new(vec!["id".into(), "name".into(), "killed".into()]);
        table
            .push_row(vec![
                Value::Str("http://example.org/resource#J1".into()),
                Value::Str("Bandit".into()),
                Value::Bool(true),
            ])
            .unwrap();

        let mut model = GraphModel::new().unwrap();
        model.add_template(TEMPLATE).unwrap();
        model
            .map("http://example.org/ontology#Observation", &table)
            .unwrap();
        QueryTool::new(Arc::new(model))
    }

    #[test]
    fn successful_query_returns_wire_format_json() {
        let tool = tool();
        let response = tool.call(
            "PREFIX ont: <http://example.org/ontology#>\n\
             PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>\n\
             SELECT ?jaguar ?label ?killed WHERE {\n\
                 ?jaguar a ont:Jaguar ;\n\
                         rdfs:label ?label ;\n\
                         ont:wasKilled ?killed .\n\
             }",
        );
        let json: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(
            json["head"]["vars"],
            serde_json::json!(["jaguar", "label", "killed"])
        );
        let binding = &json["results"]["bindings"][0];
        assert_eq!(binding["jaguar"]["type"], "uri");
        assert_eq!(binding["killed"]["value"], "true");
        assert_eq!(
            binding["killed"]["datatype"],
            "http://www.w3.org/2001/XMLSchema#boolean"
        );
    }

    #[test]
    fn queries_are_trimmed_before_execution() {
        let tool = tool();
        let response = tool.call(
            "  \n\tPREFIX ont: <http://example.org/ontology#>\n\
             SELECT (COUNT(?j) AS ?count) WHERE { ?j a ont:Jaguar }\n  ",
        );
        let json: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(json["results"]["bindings"][0]["count"]["value"], "1");
    }

    #[test]
    fn store_failure_becomes_an_error_payload() {
        let tool = tool();
        let query = "SELECT nonsense {{{";
        let response = tool.call(query);
        let json: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert!(json["error"].as_str().unwrap().contains("query"));
        assert_eq!(json["query"], query);
        assert_eq!(
            json["note"],
            "Query executed against the in-memory jaguar knowledge graph"
        );
    }

    #[test]
    fn non_select_forms_become_error_payloads() {
        let tool = tool();
        let response = tool.call("ASK { ?s ?p ?o }");
        let json: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert!(json.get("error").is_some());
        assert_eq!(json["query"], "ASK { ?s ?p ?o }");
    }

    #[test]
    fn empty_result_keeps_projection_vars() {
        let tool = tool();
        let response = tool.call(
            "PREFIX ont: <http://example.org/ontology#>\n\
             SELECT ?a ?b WHERE {\n\
                 ?a ont:neverAsserted ?b .\n\
             }",
        );
        let json: serde_json::Value = serde_json::from_str(&response).unwrap();
        assert_eq!(json["head"]["vars"], serde_json::json!(["a", "b"]));
        assert_eq!(json["results"]["bindings"], serde_json::json!([]));
    }
}
