//! Console command - interactive impact queries over one session
//!
//! A line-oriented loop on stdin: bare lines are impact queries, lines
//! starting with `:` are console commands. Reads until EOF, so it works
//! piped as well as on a terminal (the prompt and banner only appear on a
//! TTY).

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use ripple_core::{RuleAnnotator, Session};

use crate::config::RippleConfig;
use crate::output::{Output, OutputFormat};

use super::impact::ImpactResult;
use super::{extractor_from, read_document, resolve_input};

/// Run the console command
pub fn run(
    text: Option<&str>,
    file: Option<&str>,
    config: &RippleConfig,
    format: OutputFormat,
) -> Result<()> {
    let input = resolve_input(text, file, config)?;
    let mut session = Session::new(extractor_from(config));
    session.rebuild(&input.text);

    let mut current_file = input.file;
    let mut current_text = input.text;

    let interactive = io::stdin().is_terminal();
    if interactive {
        print_banner(&session);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("ripple> ");
            io::stdout().flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix(':') {
            let mut parts = rest.split_whitespace();
            let command = parts.next().unwrap_or("");
            let arg = parts.next();

            match command {
                "quit" | "q" | "exit" => break,
                "help" | "h" => print_help(),
                "nodes" => {
                    let components = session.nodes();
                    if components.is_empty() {
                        println!("(no components)");
                    }
                    for name in components {
                        println!("  {}", name);
                    }
                }
                "relations" => {
                    if session.relations().is_empty() {
                        println!("(no relations)");
                    }
                    for relation in session.relations() {
                        println!("  {}", relation);
                    }
                }
                "reload" => {
                    if let Some(path) = arg {
                        current_file = Some(PathBuf::from(path));
                    }
                    let text = match &current_file {
                        Some(path) => match read_document(path) {
                            Ok(text) => Some(text),
                            Err(e) => {
                                eprintln!("{} {:#}", "ERROR:".red().bold(), e);
                                None
                            }
                        },
                        // Started from inline text or the seed: re-extract it.
                        None => Some(current_text.clone()),
                    };
                    if let Some(text) = text {
                        current_text = text;
                        session.rebuild(&current_text);
                        println!(
                            "reloaded: {} components, {} relations",
                            session.graph().node_count(),
                            session.relation_count()
                        );
                    }
                }
                _ => println!("unknown command ':{}', try :help", command),
            }
            continue;
        }

        let result = ImpactResult::from_report(session.impact(line));
        Output::new(result, format).render()?;
    }

    Ok(())
}

fn print_banner(session: &Session<RuleAnnotator>) {
    println!("{}", "ripple console".cyan().bold());
    println!(
        "{} components, {} relations loaded",
        session.graph().node_count(),
        session.relation_count()
    );
    println!(
        "Type a component name for an impact report, {} for commands.",
        ":help".cyan()
    );
}

fn print_help() {
    println!("  <component>       impact report for that component");
    println!("  :nodes            list components");
    println!("  :relations        list extracted relations");
    println!("  :reload [FILE]    re-extract from FILE (or from the current source)");
    println!("  :quit             leave the console");
}
