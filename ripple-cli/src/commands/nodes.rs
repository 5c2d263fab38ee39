//! Nodes command - list the components known to the graph
//!
//! The component names printed here are the valid targets for
//! `ripple impact` and `ripple export --impacted-of`. Names are
//! case-sensitive, so this list is the authoritative spelling.

use anyhow::Result;
use serde::Serialize;

use crate::config::RippleConfig;
use crate::output::{Output, OutputConfig, OutputFormat, Outputter, TableOutput};

use super::{extractor_from, resolve_input};

/// Component listing
#[derive(Debug, Serialize)]
pub struct NodesResult {
    pub components: Vec<String>,
    pub component_count: usize,
}

impl Outputter for NodesResult {
    fn to_table(&self, config: &OutputConfig) -> String {
        let rows: Vec<Vec<String>> = self
            .components
            .iter()
            .map(|name| vec![name.clone()])
            .collect();
        let mut output = TableOutput::from_rows(&["Component"], &rows, config);
        output.push_str(&format!("\n{} components", self.component_count));
        output
    }
}

/// Run the nodes command
pub fn run(
    text: Option<&str>,
    file: Option<&str>,
    config: &RippleConfig,
    format: OutputFormat,
) -> Result<()> {
    let input = resolve_input(text, file, config)?;
    let extraction = extractor_from(config).extract(&input.text);

    let components = extraction.graph.nodes();
    let result = NodesResult {
        component_count: components.len(),
        components,
    };

    Output::new(result, format).render()
}
