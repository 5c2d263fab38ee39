//! ripple CLI - impact analysis for technical documentation
//!
//! Turns free-text component documentation into a directed dependency graph
//! and answers "what breaks if I change X" from the command line.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod constants;
mod output;

use commands::*;
use config::RippleConfig;
use output::OutputFormat;

/// Impact analysis for technical documentation.
///
/// ripple reads plain-English component documentation, extracts
/// subject-verb-object relations sentence by sentence, and builds a directed
/// dependency graph it can answer impact queries against.
#[derive(Parser)]
#[command(name = "ripple")]
#[command(author, version)]
#[command(about = "Impact analysis for technical documentation")]
#[command(
    long_about = "ripple reads plain-English component documentation, extracts\nsubject-verb-object relations sentence by sentence, and builds a directed\ndependency graph it can answer impact queries against."
)]
#[command(propagate_version = true)]
#[command(next_help_heading = "Options")]
#[command(after_help = "Quick Start:
  ripple extract            Build the graph (uses the built-in demo document)
  ripple nodes              List component names
  ripple impact Battery     What breaks if the Battery changes?

Examples:
  ripple extract --file docs/system.txt
  ripple export -F mermaid --impacted-of Engine -o impact.mmd
  ripple console --file docs/system.txt")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Show detailed version information
    #[arg(long = "version-verbose")]
    version_verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the dependency graph and list the relations found
    #[command(visible_alias = "x")]
    Extract {
        /// Inline documentation text to analyze
        #[arg(short, long)]
        text: Option<String>,

        /// Documentation file to analyze
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Find downstream impact (what might break if this component changes)
    Impact {
        /// Component to analyze (case-sensitive, see `ripple nodes`)
        component: String,

        /// Inline documentation text to analyze
        #[arg(short, long)]
        text: Option<String>,

        /// Documentation file to analyze
        #[arg(short, long)]
        file: Option<String>,
    },

    /// List the components in the graph
    #[command(visible_alias = "ls")]
    Nodes {
        /// Inline documentation text to analyze
        #[arg(short, long)]
        text: Option<String>,

        /// Documentation file to analyze
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Export the graph to Graphviz, Mermaid, or JSON
    Export {
        /// Export format
        #[arg(short = 'F', long = "export-format", default_value = "dot", value_parser = ["dot", "graphviz", "mermaid", "json"])]
        export_format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Highlight the propagation chain of this component
        #[arg(long, value_name = "COMPONENT")]
        impacted_of: Option<String>,

        /// Inline documentation text to analyze
        #[arg(short, long)]
        text: Option<String>,

        /// Documentation file to analyze
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Interactive impact queries on stdin
    #[command(visible_alias = "repl")]
    Console {
        /// Inline documentation text to analyze
        #[arg(short, long)]
        text: Option<String>,

        /// Documentation file to analyze
        #[arg(short, long)]
        file: Option<String>,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Print verbose version information
fn print_verbose_version() {
    use colored::Colorize;

    let cli_version = env!("CARGO_PKG_VERSION");
    let platform = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    println!("ripple {}", cli_version);
    println!("  {:<14} {}", "ripple-cli:".cyan(), cli_version);
    println!("  {:<14} {}", "ripple-core:".cyan(), cli_version);
    println!("  {:<14} {}", "Platform:".cyan(), platform);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Handle verbose version flag
    if cli.version_verbose {
        print_verbose_version();
        return Ok(());
    }

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .ripplerc.toml
    let config = RippleConfig::load(std::path::Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    // Apply color override from config if set
    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    // Handle case where no command is provided
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Print help if no command provided
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Extract { text, file } => {
            extract::run(text.as_deref(), file.as_deref(), &config, format)
        }
        Commands::Impact {
            component,
            text,
            file,
        } => impact::run(
            &component,
            text.as_deref(),
            file.as_deref(),
            &config,
            format,
        ),
        Commands::Nodes { text, file } => {
            nodes::run(text.as_deref(), file.as_deref(), &config, format)
        }
        Commands::Export {
            export_format,
            output,
            impacted_of,
            text,
            file,
        } => export::run(
            &export_format,
            output.as_deref(),
            impacted_of.as_deref(),
            text.as_deref(),
            file.as_deref(),
            &config,
            format,
        ),
        Commands::Console { text, file } => {
            console::run(text.as_deref(), file.as_deref(), &config, format)
        }
    }
}
