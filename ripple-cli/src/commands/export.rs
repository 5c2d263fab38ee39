//! Export command - render the dependency graph for external tools
//!
//! Emits DOT (Graphviz), Mermaid, or a JSON graph document, optionally
//! highlighting the propagation chain of one component. Content goes to
//! stdout by default or to a file with `-o`.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::io::Write;

use ripple_core::{render, ExportFormat, ImpactReport};

use crate::config::RippleConfig;
use crate::output::{Output, OutputFormat, TableDisplay};

use super::{extractor_from, resolve_input};

/// Export result
#[derive(Debug, Serialize)]
pub struct ExportResult {
    pub format: String,
    pub component_count: usize,
    pub relation_count: usize,
    pub highlighted: Option<String>,
    pub output_path: Option<String>,
    pub content: String,
}

impl TableDisplay for ExportResult {
    fn to_table(&self) -> String {
        if let Some(ref path) = self.output_path {
            format!(
                "{} Exported {} components, {} relations to {}",
                "SUCCESS:".green().bold(),
                self.component_count,
                self.relation_count,
                path.cyan()
            )
        } else {
            // Content goes to stdout untouched so it can be piped into
            // dot, mmdc, or jq.
            self.content.clone()
        }
    }
}

/// Run the export command
#[allow(clippy::too_many_arguments)]
pub fn run(
    export_format: &str,
    output_path: Option<&str>,
    impacted_of: Option<&str>,
    text: Option<&str>,
    file: Option<&str>,
    config: &RippleConfig,
    format: OutputFormat,
) -> Result<()> {
    let exp_format: ExportFormat = export_format.parse()?;

    let input = resolve_input(text, file, config)?;
    let extraction = extractor_from(config).extract(&input.text);

    let highlight = impacted_of.map(|component| ImpactReport::compute(&extraction.graph, component));
    if let Some(report) = &highlight {
        if !report.found() {
            tracing::warn!(
                "'{}' is not in the graph, exporting without highlighting",
                report.target
            );
        }
    }

    let content = render(&extraction.graph, highlight.as_ref(), exp_format)?;

    let output_file = if let Some(path) = output_path {
        let mut file = fs::File::create(path)?;
        file.write_all(content.as_bytes())?;
        Some(path.to_string())
    } else {
        None
    };

    let result = ExportResult {
        format: exp_format.as_str().to_string(),
        component_count: extraction.graph.node_count(),
        relation_count: extraction.graph.edge_count(),
        highlighted: impacted_of.map(str::to_string),
        output_path: output_file,
        content: if output_path.is_some() {
            String::new()
        } else {
            content
        },
    };

    Output::new(result, format).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(output_path: Option<&str>, content: &str) -> ExportResult {
        ExportResult {
            format: "dot".to_string(),
            component_count: 2,
            relation_count: 1,
            highlighted: None,
            output_path: output_path.map(str::to_string),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_stdout_table_is_the_raw_content() {
        let result = result(None, "digraph dependencies {\n}\n");
        assert_eq!(result.to_table(), "digraph dependencies {\n}\n");
    }

    #[test]
    fn test_file_table_is_a_summary() {
        let result = result(Some("graph.dot"), "");
        let table = result.to_table();
        assert!(table.contains("Exported 2 components, 1 relations"));
        assert!(table.contains("graph.dot"));
    }
}
