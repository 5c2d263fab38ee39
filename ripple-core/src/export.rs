//! Graph renderings for presentation layers.
//!
//! Produces DOT, Mermaid, and JSON views of a dependency graph. When an
//! impact report is supplied, nodes are rendered in three visual classes: the
//! selected target, everything the change reaches, and the unaffected rest.
//! Edge labels always carry the relation verb.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use crate::error::{Result, RippleError};
use crate::graph::DependencyGraph;
use crate::impact::ImpactReport;

// Node palette shared with the original chart renderer.
const NORMAL_FILL: &str = "#e0e0e0";
const IMPACTED_FILL: &str = "#ff4b4b";
const SELECTED_FILL: &str = "#333333";
const EDGE_LABEL_COLOR: &str = "blue";

/// Output format for a graph rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Dot,
    Mermaid,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Mermaid => "mermaid",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = RippleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(Self::Dot),
            "mermaid" => Ok(Self::Mermaid),
            "json" => Ok(Self::Json),
            _ => Err(RippleError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// Visual class of a node in a rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeClass {
    Normal,
    Impacted,
    Selected,
}

/// Render `graph` in the requested format, highlighting the components named
/// by `highlight` when one is given.
pub fn render(
    graph: &DependencyGraph,
    highlight: Option<&ImpactReport>,
    format: ExportFormat,
) -> Result<String> {
    let classes = classify_nodes(graph, highlight);
    match format {
        ExportFormat::Dot => Ok(render_dot(graph, &classes)),
        ExportFormat::Mermaid => Ok(render_mermaid(graph, &classes)),
        ExportFormat::Json => render_json(graph, &classes),
    }
}

/// Assign each node its visual class in node order.
fn classify_nodes(
    graph: &DependencyGraph,
    highlight: Option<&ImpactReport>,
) -> Vec<(String, NodeClass)> {
    let (target, impacted): (Option<&str>, HashSet<&str>) = match highlight {
        Some(report) if report.found() => (
            Some(report.target.as_str()),
            report.impacted().iter().map(String::as_str).collect(),
        ),
        _ => (None, HashSet::new()),
    };

    graph
        .nodes()
        .into_iter()
        .map(|name| {
            let class = if Some(name.as_str()) == target {
                NodeClass::Selected
            } else if impacted.contains(name.as_str()) {
                NodeClass::Impacted
            } else {
                NodeClass::Normal
            };
            (name, class)
        })
        .collect()
}

fn render_dot(graph: &DependencyGraph, classes: &[(String, NodeClass)]) -> String {
    let mut output = String::new();
    output.push_str("digraph dependencies {\n");
    output.push_str("    rankdir=LR;\n");
    output.push_str("    node [style=filled, shape=box];\n\n");

    // DOT wants clean identifiers; labels carry the real names.
    let mut id_map: HashMap<&str, String> = HashMap::new();
    for (i, (name, class)) in classes.iter().enumerate() {
        let clean_id = format!("n{}", i);
        let (fill, font) = match class {
            NodeClass::Normal => (NORMAL_FILL, "black"),
            NodeClass::Impacted => (IMPACTED_FILL, "white"),
            NodeClass::Selected => (SELECTED_FILL, "white"),
        };
        output.push_str(&format!(
            "    {} [label=\"{}\", fillcolor=\"{}\", fontcolor=\"{}\"];\n",
            clean_id,
            escape_quotes(name),
            fill,
            font
        ));
        id_map.insert(name, clean_id);
    }

    output.push('\n');
    for (source, target, label) in graph.edges() {
        if let (Some(source_id), Some(target_id)) =
            (id_map.get(source.as_str()), id_map.get(target.as_str()))
        {
            output.push_str(&format!(
                "    {} -> {} [label=\"{}\", fontcolor=\"{}\"];\n",
                source_id,
                target_id,
                escape_quotes(&label),
                EDGE_LABEL_COLOR
            ));
        }
    }
    output.push_str("}\n");

    output
}

fn render_mermaid(graph: &DependencyGraph, classes: &[(String, NodeClass)]) -> String {
    let mut output = String::new();
    output.push_str("flowchart LR\n");
    output.push_str(&format!(
        "    classDef normal fill:{},color:#000\n",
        NORMAL_FILL
    ));
    output.push_str(&format!(
        "    classDef impacted fill:{},color:#fff\n",
        IMPACTED_FILL
    ));
    output.push_str(&format!(
        "    classDef selected fill:{},color:#fff\n\n",
        SELECTED_FILL
    ));

    let mut id_map: HashMap<&str, String> = HashMap::new();
    for (i, (name, class)) in classes.iter().enumerate() {
        let clean_id = format!("n{}", i);
        let class_name = match class {
            NodeClass::Normal => "normal",
            NodeClass::Impacted => "impacted",
            NodeClass::Selected => "selected",
        };
        output.push_str(&format!(
            "    {}[\"{}\"]:::{}\n",
            clean_id,
            escape_quotes(name),
            class_name
        ));
        id_map.insert(name, clean_id);
    }

    output.push('\n');
    for (source, target, label) in graph.edges() {
        if let (Some(source_id), Some(target_id)) =
            (id_map.get(source.as_str()), id_map.get(target.as_str()))
        {
            output.push_str(&format!(
                "    {} -->|{}| {}\n",
                source_id, label, target_id
            ));
        }
    }

    output
}

fn render_json(graph: &DependencyGraph, classes: &[(String, NodeClass)]) -> Result<String> {
    #[derive(Serialize)]
    struct JsonGraph {
        nodes: Vec<JsonNode>,
        edges: Vec<JsonEdge>,
        metadata: JsonMetadata,
    }

    #[derive(Serialize)]
    struct JsonNode {
        name: String,
        class: NodeClass,
    }

    #[derive(Serialize)]
    struct JsonEdge {
        source: String,
        target: String,
        label: String,
    }

    #[derive(Serialize)]
    struct JsonMetadata {
        node_count: usize,
        edge_count: usize,
        generated_by: String,
    }

    let nodes: Vec<JsonNode> = classes
        .iter()
        .map(|(name, class)| JsonNode {
            name: name.clone(),
            class: *class,
        })
        .collect();

    let edges: Vec<JsonEdge> = graph
        .edges()
        .into_iter()
        .map(|(source, target, label)| JsonEdge {
            source,
            target,
            label,
        })
        .collect();

    let json_graph = JsonGraph {
        metadata: JsonMetadata {
            node_count: nodes.len(),
            edge_count: edges.len(),
            generated_by: "ripple export".to_string(),
        },
        nodes,
        edges,
    };

    Ok(serde_json::to_string_pretty(&json_graph)?)
}

fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car_graph() -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        graph.add_relation("Battery", "Engine", "power");
        graph.add_relation("Engine", "Wheels", "drive");
        graph.add_relation("Chipset", "CoolingSystem", "control");
        graph
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("dot".parse::<ExportFormat>().unwrap(), ExportFormat::Dot);
        assert_eq!(
            "MERMAID".parse::<ExportFormat>().unwrap(),
            ExportFormat::Mermaid
        );
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("svg".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_dot_export_without_highlight() {
        let graph = car_graph();
        let output = render(&graph, None, ExportFormat::Dot).unwrap();

        assert!(output.starts_with("digraph"));
        assert!(output.contains("label=\"Battery\""));
        assert!(output.contains("label=\"power\""));
        assert!(output.contains(NORMAL_FILL));
        assert!(!output.contains(IMPACTED_FILL));
        assert!(!output.contains(SELECTED_FILL));
    }

    #[test]
    fn test_dot_export_with_highlight() {
        let graph = car_graph();
        let report = ImpactReport::compute(&graph, "Battery");
        let output = render(&graph, Some(&report), ExportFormat::Dot).unwrap();

        // Battery selected, Engine and Wheels impacted, Chipset untouched.
        assert!(output.contains(SELECTED_FILL));
        assert!(output.contains(IMPACTED_FILL));
        assert!(output.contains(NORMAL_FILL));
    }

    #[test]
    fn test_highlight_for_unknown_target_falls_back_to_normal() {
        let graph = car_graph();
        let report = ImpactReport::compute(&graph, "Radiator");
        let output = render(&graph, Some(&report), ExportFormat::Dot).unwrap();
        assert!(!output.contains(SELECTED_FILL));
        assert!(!output.contains(IMPACTED_FILL));
    }

    #[test]
    fn test_mermaid_export() {
        let graph = car_graph();
        let report = ImpactReport::compute(&graph, "Battery");
        let output = render(&graph, Some(&report), ExportFormat::Mermaid).unwrap();

        assert!(output.starts_with("flowchart LR"));
        assert!(output.contains("classDef impacted"));
        assert!(output.contains(":::selected"));
        assert!(output.contains(":::impacted"));
        assert!(output.contains(":::normal"));
        assert!(output.contains("-->|power|"));
    }

    #[test]
    fn test_json_export_shape() {
        let graph = car_graph();
        let report = ImpactReport::compute(&graph, "Battery");
        let output = render(&graph, Some(&report), ExportFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["metadata"]["node_count"], 5);
        assert_eq!(parsed["metadata"]["edge_count"], 3);
        assert_eq!(parsed["nodes"][0]["name"], "Battery");
        assert_eq!(parsed["nodes"][0]["class"], "selected");
        assert_eq!(parsed["nodes"][1]["class"], "impacted");
        assert_eq!(parsed["edges"][0]["label"], "power");

        let chipset = parsed["nodes"]
            .as_array()
            .unwrap()
            .iter()
            .find(|n| n["name"] == "Chipset")
            .unwrap();
        assert_eq!(chipset["class"], "normal");
    }

    #[test]
    fn test_quotes_in_names_are_escaped() {
        let mut graph = DependencyGraph::new();
        graph.add_relation("A\"B", "C", "x");
        let output = render(&graph, None, ExportFormat::Dot).unwrap();
        assert!(output.contains("A\\\"B"));
    }
}
