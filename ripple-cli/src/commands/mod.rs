//! Command implementations for the ripple CLI
//!
//! Each command module provides a `run` function that executes the command
//! logic. Input resolution is shared: `--text` wins over `--file`, which wins
//! over the configured `[input].file`, which wins over the built-in seed
//! knowledge base.

pub mod console;
pub mod export;
pub mod extract;
pub mod impact;
pub mod nodes;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use ripple_core::{Extractor, RuleAnnotator};

use crate::config::RippleConfig;
use crate::constants::SEED_KNOWLEDGE_BASE;

/// A resolved input document plus where it came from.
///
/// The file path is kept so the console command can re-read it on `:reload`.
pub struct ResolvedInput {
    pub text: String,
    pub file: Option<PathBuf>,
}

/// Resolve the document to analyze from flags, config, and the seed default.
pub fn resolve_input(
    text: Option<&str>,
    file: Option<&str>,
    config: &RippleConfig,
) -> Result<ResolvedInput> {
    if let Some(text) = text {
        return Ok(ResolvedInput {
            text: text.to_string(),
            file: None,
        });
    }

    let path = file.or_else(|| config.input_file());
    if let Some(path) = path {
        let text = read_document(Path::new(path))?;
        return Ok(ResolvedInput {
            text,
            file: Some(PathBuf::from(path)),
        });
    }

    tracing::debug!("no input given, using the seed knowledge base");
    Ok(ResolvedInput {
        text: SEED_KNOWLEDGE_BASE.to_string(),
        file: None,
    })
}

/// Read a documentation file.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}

/// Build an extractor with the configured domain vocabulary.
pub fn extractor_from(config: &RippleConfig) -> Extractor<RuleAnnotator> {
    Extractor::new(RuleAnnotator::with_verbs(
        config.extra_verbs().iter().cloned(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_flag_wins() {
        let config = RippleConfig::default();
        let input = resolve_input(Some("The Pump moves the Water."), None, &config).unwrap();
        assert_eq!(input.text, "The Pump moves the Water.");
        assert!(input.file.is_none());
    }

    #[test]
    fn test_seed_is_the_fallback() {
        let config = RippleConfig::default();
        let input = resolve_input(None, None, &config).unwrap();
        assert!(input.text.contains("Battery"));
        assert!(input.file.is_none());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let config = RippleConfig::default();
        let result = resolve_input(None, Some("/nonexistent/doc.txt"), &config);
        assert!(result.is_err());
    }
}
