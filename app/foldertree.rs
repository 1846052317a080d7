//! Command-line interface for foldertree.
//!
//! Asks for a folder (or takes one as an argument), then saves its structure
//! to `folder_structure.txt` in the current directory.

use clap::{Parser, ValueEnum};
use foldertree::{
    EntryOrder, TreeBuilder, TreeSummary, default_output_path, ensure_directory,
    write_tree_to_file,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

/// foldertree — save a directory's structure as indented text
#[derive(Parser)]
#[command(name = "foldertree", version, about, long_about = None)]
struct Cli {
    /// Folder to scan (asked for interactively when omitted)
    path: Option<PathBuf>,

    /// Descend into symbolic links that point to directories
    #[arg(long)]
    follow_links: bool,

    /// Order of entries inside each directory
    #[arg(long, value_enum, default_value_t = Order::Name)]
    order: Order,

    /// Diagnostics printed to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Order {
    Name,
    Native,
}

impl From<Order> for EntryOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Name => EntryOrder::Name,
            Order::Native => EntryOrder::Native,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Silent,
}

#[cfg(feature = "logging")]
impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[cfg(feature = "logging")]
fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

#[cfg(not(feature = "logging"))]
fn setup_tracing(_level: LogLevel) {}

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.log_level);

    let cwd = std::env::current_dir().unwrap_or_else(|e| {
        eprintln!("Error: cannot resolve current directory: {}", e);
        exit(1);
    });

    let root = match cli.path {
        Some(path) => path,
        None => prompt_for_path(&cwd),
    };

    if let Err(e) = ensure_directory(&root) {
        println!("Error: {}", e);
        exit(1);
    }

    let output = default_output_path(&cwd);
    println!("Scanning folder structure of: {}", root.display());
    println!("Saving to: {}", output.display());

    let options = TreeBuilder::new(root)
        .follow_links(cli.follow_links)
        .order(cli.order.into())
        .build();

    match write_tree_to_file(&options, &output) {
        Ok(summary) => {
            report_skipped(&summary);
            println!("Folder structure saved successfully!");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

/// Reads a folder path from stdin. An empty answer means `cwd`.
fn prompt_for_path(cwd: &Path) -> PathBuf {
    print!("Enter folder path (or press Enter for current directory): ");
    if io::stdout().flush().is_err() {
        eprintln!("Failed to write to stdout");
        exit(1);
    }

    let mut answer = String::new();
    if let Err(e) = io::stdin().read_line(&mut answer) {
        eprintln!("Error: failed to read folder path: {}", e);
        exit(1);
    }

    let answer = answer.trim();
    if answer.is_empty() {
        cwd.to_path_buf()
    } else {
        PathBuf::from(answer)
    }
}

// With `logging` the walk has already emitted one warning per skipped entry.
#[cfg(feature = "logging")]
fn report_skipped(_summary: &TreeSummary) {}

#[cfg(not(feature = "logging"))]
fn report_skipped(summary: &TreeSummary) {
    for skipped in &summary.skipped {
        eprintln!("Warning: {}", skipped.reason);
    }
}
