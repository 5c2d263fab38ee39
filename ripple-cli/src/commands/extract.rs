//! Extract command - build the dependency graph from documentation
//!
//! Runs the extraction pipeline over the resolved input and prints the
//! relation list in extraction order, with relation and component counts.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use ripple_core::Relation;

use crate::config::RippleConfig;
use crate::output::{Output, OutputConfig, OutputFormat, Outputter, TableOutput};

use super::{extractor_from, resolve_input};

/// Extraction summary
#[derive(Debug, Serialize)]
pub struct ExtractResult {
    pub relations: Vec<Relation>,
    pub relation_count: usize,
    pub component_count: usize,
}

impl Outputter for ExtractResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n",
            format!("{} relations identified", self.relation_count).bold()
        ));

        if !self.relations.is_empty() {
            let rows: Vec<Vec<String>> = self
                .relations
                .iter()
                .map(|r| vec![r.source.clone(), r.label.clone(), r.target.clone()])
                .collect();
            output.push_str(&TableOutput::from_rows(
                &["Source", "Relation", "Target"],
                &rows,
                config,
            ));
            output.push('\n');
        }

        output.push_str(&format!("{} components in the graph", self.component_count));
        output
    }
}

/// Run the extract command
pub fn run(
    text: Option<&str>,
    file: Option<&str>,
    config: &RippleConfig,
    format: OutputFormat,
) -> Result<()> {
    let input = resolve_input(text, file, config)?;
    let extraction = extractor_from(config).extract(&input.text);

    let result = ExtractResult {
        relation_count: extraction.relations.len(),
        component_count: extraction.graph.node_count(),
        relations: extraction.relations,
    };

    Output::new(result, format).render()
}
