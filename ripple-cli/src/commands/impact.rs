//! Impact command - what breaks if this component changes?
//!
//! Builds the graph from the resolved input, then reports the forward
//! propagation chain for one component. A component missing from the graph
//! is a reportable state, not an error: the exit code stays 0 and the
//! report says so.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use ripple_core::{ImpactReport, ImpactStatus};

use crate::config::RippleConfig;
use crate::output::{Output, OutputFormat, TableDisplay};

use super::{extractor_from, resolve_input};

/// Impact analysis result
#[derive(Debug, Serialize)]
pub struct ImpactResult {
    pub target: String,
    pub found: bool,
    pub status: ImpactStatus,
    pub impacted_count: usize,
    pub chain: Vec<String>,
}

impl ImpactResult {
    pub fn from_report(report: ImpactReport) -> Self {
        Self {
            found: report.found(),
            target: report.target,
            status: report.status,
            impacted_count: report.impacted_count,
            chain: report.chain,
        }
    }
}

impl TableDisplay for ImpactResult {
    fn to_table(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Impact of changing".bold(),
            self.target.cyan()
        ));
        output.push_str(&format!("{}\n", "-".repeat(60)));

        if !self.found {
            output.push_str(&format!(
                "  '{}' is not in the graph. Run {} to list known components.\n",
                self.target,
                "ripple nodes".cyan()
            ));
            return output;
        }

        output.push_str(&format!("  {}\n", self.chain.join(" -> ")));

        let label = match self.status {
            ImpactStatus::Safe => "SAFE",
            ImpactStatus::Critical => "CRITICAL",
        };
        output.push_str(&format!(
            "\n{} {} downstream components affected\n",
            format!("{}:", label).color(self.status.color()).bold(),
            self.impacted_count
        ));
        output.push_str(&format!("{}\n", self.status.message().dimmed()));
        output
    }
}

/// Run the impact command
pub fn run(
    component: &str,
    text: Option<&str>,
    file: Option<&str>,
    config: &RippleConfig,
    format: OutputFormat,
) -> Result<()> {
    let input = resolve_input(text, file, config)?;
    let extraction = extractor_from(config).extract(&input.text);
    let report = ImpactReport::compute(&extraction.graph, component);

    Output::new(ImpactResult::from_report(report), format).render()
}
