//! Table output formatting using the `tabled` crate
//!
//! Renders row-oriented results (relation lists, component lists) with
//! terminal width awareness. Single-result reports format their own text
//! blocks instead and do not come through here.

use super::OutputConfig;
use tabled::{
    builder::Builder,
    settings::{style::Style, Width},
};

/// Table output formatter
pub struct TableOutput;

impl TableOutput {
    /// Create a simple table from rows of strings
    pub fn from_rows(headers: &[&str], rows: &[Vec<String>], config: &OutputConfig) -> String {
        if rows.is_empty() {
            return "(no results)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(headers.iter().copied());

        for row in rows {
            builder.push_record(row.iter().map(|s| s.as_str()));
        }

        let mut table = builder.build();

        if config.compact {
            table.with(Style::blank());
        } else {
            table.with(Style::rounded());
        }

        if config.should_truncate() {
            let term_width = config.effective_width();
            table.with(Width::wrap(term_width));
        }

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_from_rows() {
        let headers = vec!["Source", "Target"];
        let rows = vec![
            vec!["Battery".to_string(), "Engine".to_string()],
            vec!["Engine".to_string(), "Wheels".to_string()],
        ];

        let config = OutputConfig::new(OutputFormat::Table);
        let output = TableOutput::from_rows(&headers, &rows, &config);

        assert!(output.contains("Source"));
        assert!(output.contains("Target"));
        assert!(output.contains("Battery"));
        assert!(output.contains("Wheels"));
    }

    #[test]
    fn test_empty_rows() {
        let headers = vec!["Component"];
        let rows: Vec<Vec<String>> = vec![];

        let config = OutputConfig::new(OutputFormat::Table);
        let output = TableOutput::from_rows(&headers, &rows, &config);
        assert_eq!(output, "(no results)");
    }
}
