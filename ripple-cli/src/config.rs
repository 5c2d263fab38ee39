//! Ripple configuration loading from `.ripplerc.toml`.
//!
//! Loads settings from a `.ripplerc.toml` file in the working directory.
//! Configuration is optional - ripple falls back to sensible defaults if no
//! config file exists, and a malformed file is reported as a warning rather
//! than an error.
//!
//! # Example Configuration
//!
//! ```toml
//! [ripple]
//! version = "1.0"
//!
//! [input]
//! file = "docs/system.txt"
//!
//! [annotator]
//! verbs = ["preempt", "shard", "replicate"]
//!
//! [output]
//! format = "table"
//! color = true
//! ```

use serde::Deserialize;
use std::path::Path;

/// Root configuration structure loaded from `.ripplerc.toml`.
///
/// All sections are optional and use defaults if not specified.
#[derive(Debug, Deserialize, Default)]
pub struct RippleConfig {
    /// General ripple settings (version tracking).
    #[serde(default)]
    pub ripple: RippleSection,

    /// Default input document.
    #[serde(default)]
    pub input: InputConfig,

    /// Annotator tuning (domain vocabulary).
    #[serde(default)]
    pub annotator: AnnotatorConfig,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// General ripple configuration section.
#[derive(Debug, Deserialize, Default)]
pub struct RippleSection {
    /// Configuration schema version for future compatibility.
    /// Currently informational only.
    #[serde(default)]
    pub version: Option<String>,
}

/// Default input document configuration.
///
/// Commands read this file when neither `--text` nor `--file` is given.
#[derive(Debug, Deserialize, Default)]
pub struct InputConfig {
    /// Path to the default documentation file, relative to the working
    /// directory.
    #[serde(default)]
    pub file: Option<String>,
}

/// Annotator configuration.
#[derive(Debug, Deserialize, Default)]
pub struct AnnotatorConfig {
    /// Extra base-form verbs merged into the annotator's verb lexicon.
    ///
    /// Useful for domain vocabularies the built-in lexicon does not cover.
    ///
    /// # Example
    /// ```toml
    /// verbs = ["preempt", "shard", "replicate"]
    /// ```
    #[serde(default)]
    pub verbs: Vec<String>,
}

/// Output formatting preferences.
///
/// These settings provide defaults for CLI output formatting.
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format for CLI commands.
    ///
    /// Valid values: `table`, `json`
    /// Default: `table`
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output.
    ///
    /// Defaults to `true` when stdout is a TTY.
    #[serde(default)]
    pub color: Option<bool>,
}

impl RippleConfig {
    /// Load configuration from `.ripplerc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".ripplerc.toml");
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse .ripplerc.toml: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read .ripplerc.toml: {}", e);
                }
            }
        }
        Self::default()
    }

    /// Get the default input file path, if configured.
    pub fn input_file(&self) -> Option<&str> {
        self.input.file.as_deref()
    }

    /// Get the extra verb lemmas for the annotator.
    pub fn extra_verbs(&self) -> &[String] {
        &self.annotator.verbs
    }

    /// Get the default output format, if configured.
    ///
    /// Returns `None` if the default (table) should be used.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Check if colored output should be used.
    ///
    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}
