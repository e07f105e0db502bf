//! `tabletree` CLI — render, search and inspect table trees from the command line.
//!
//! Input documents are JSON; they are turned into a table tree and then
//! rendered as a table literal.
//!
//! ## Usage
//!
//! ```sh
//! # Render JSON as a table literal (stdin → stdout)
//! echo '{"name":"hero","level":3}' | tabletree render
//!
//! # Render from file to file, starting one level deep
//! tabletree render -i save.json -o save.lua --indent 1
//!
//! # Render the first node keyed "inventory"
//! tabletree find inventory -i save.json
//!
//! # Normalize through the tree and print pretty JSON
//! tabletree export -i save.json
//!
//! # Node / leaf / depth counts
//! tabletree stats -i save.json
//!
//! # Verbose logging on stderr
//! tabletree -dd render -i save.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use tabletree_core::{Node, TreeError};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

#[derive(Parser)]
#[command(
    name = "tabletree",
    version,
    about = "Render and search table-literal document trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    debug: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON document as a table literal
    Render {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Indentation level of the outermost node
        #[arg(long, default_value_t = 0)]
        indent: usize,
    },
    /// Render the first descendant with the given key
    Find {
        /// Key to look for (exact, case-sensitive)
        key: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Request a recursive lookup (descendants are searched either way)
        #[arg(long)]
        recursive: bool,
    },
    /// Convert JSON to a tree and back, printing pretty JSON
    Export {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show tree statistics (nodes, leaves, depth)
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    match cli.command {
        Commands::Render {
            input,
            output,
            indent,
        } => {
            let tree = read_tree(input.as_deref())?;
            let text = tabletree_core::render(&tree, indent);
            write_output(output.as_deref(), &text)?;
        }
        Commands::Find {
            key,
            input,
            output,
            recursive,
        } => {
            let tree = read_tree(input.as_deref())?;
            let node = tree
                .find_child(&key, recursive)
                .ok_or_else(|| TreeError::KeyNotFound(key.clone()))?;
            tracing::info!(key = %key, children = node.child_count(), "found node");
            write_output(output.as_deref(), &tabletree_core::render(node, 0))?;
        }
        Commands::Export { input, output } => {
            let tree = read_tree(input.as_deref())?;
            let pretty =
                tabletree_core::to_json_pretty(&tree).context("Failed to export tree as JSON")?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Stats { input, json } => {
            let tree = read_tree(input.as_deref())?;
            let stats = tree.stats();
            if json {
                println!("{}", serde_json::to_string(&stats)?);
            } else {
                println!("Nodes:   {}", stats.nodes);
                println!("Leaves:  {}", stats.leaves);
                println!("Depth:   {}", stats.depth);
            }
        }
    }

    Ok(())
}

/// Install a stderr `fmt` subscriber whose level follows the `-d` count.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    tracing::debug!(?filter, "logging initialized");
}

fn read_tree(path: Option<&str>) -> Result<Node> {
    let json = read_input(path)?;
    tabletree_core::from_json(&json).context("Failed to build tree from JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
