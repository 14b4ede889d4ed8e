//! kdoc — generate Markdown documentation from annotated kernel C sources.
//!
//! Scans a project tree for `.c`/`.asm` files, extracts `/** ... */` doc
//! comments, struct definitions and `#define` constants, and writes a single
//! navigable document. Also ships the static memory-layout report behind
//! `--memory-map`.

mod discover;
mod extract;
mod layout;
mod model;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Artifacts of the tool itself, never documented.
const DEFAULT_EXCLUDES: &[&str] = &["memory_check.c"];

#[derive(Parser)]
#[command(
    name = "kdoc",
    about = "Generate Markdown documentation from annotated kernel C sources"
)]
struct Cli {
    /// Project root to scan
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output file for the rendered document
    #[arg(short = 'o', long, default_value = "DOCUMENTATION.md")]
    output: PathBuf,

    /// Document title ("<TITLE> Documentation")
    #[arg(long, default_value = "Kernel")]
    title: String,

    /// File name to skip during extraction. Can be specified multiple times.
    #[arg(long)]
    exclude: Vec<String>,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Show the static memory-layout report and exit
    #[arg(long)]
    memory_map: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let timestamp = chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    if cli.memory_map {
        print!("{}", layout::report(&timestamp));
        return Ok(());
    }

    let config = scan_config(&cli);
    let files = discover::source_files(&config)?;

    // Unreadable files are reported and dropped; the run continues.
    let mut records = Vec::new();
    for path in &files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let rel = path.strip_prefix(&config.root).unwrap_or(path);
        records.push(extract::parse(&rel.to_string_lossy(), &content));
    }

    let tree = discover::tree_listing(&config)?;
    let document = render::render(&records, &tree, &cli.title, &timestamp);

    if cli.stdout {
        print!("{}", document);
        return Ok(());
    }

    fs::write(&cli.output, &document)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    println!(
        "Documentation saved to {} ({} bytes)",
        cli.output.display(),
        document.len()
    );
    Ok(())
}

fn scan_config(cli: &Cli) -> discover::ScanConfig {
    let mut config = discover::ScanConfig::new(cli.root.clone());
    config.exclude = DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect();
    config.exclude.extend(cli.exclude.iter().cloned());
    config
}
