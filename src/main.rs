//! Craft Calculator
//!
//! Calculates the base ingredients required for complicated crafting
//! trees. Where an item has more than one recipe the operator decides how
//! the requested quantity is split; everything else resolves on its own.

mod calculator;
mod models;
mod prompt;
mod report;
mod store;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::models::{parse_item, RecipeBook};
use crate::prompt::{Aborted, ConsoleChooser};
use crate::report::ConsoleReporter;

#[derive(Parser)]
#[command(name = "craft-calculator")]
#[command(version)]
#[command(about = "Calculate required ingredients for complicated crafting trees")]
struct Cli {
    /// Item to craft, as "name" or "name count"
    item: String,

    /// YAML files containing recipe definitions, merged in order
    #[arg(required = true)]
    sources: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is::<Aborted>() => {
            println!("\nAborted by user.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // Message only, no backtrace.
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let item = parse_item(&cli.item);
    debug!(name = %item.name, count = item.count, "parsed target item");
    println!("Crafting {item}");

    let book = store::load_recipes(&cli.sources)?;
    let loaded: Vec<String> = cli
        .sources
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    println!("Recipes have been loaded from {}", loaded.join(", "));

    if prompt::confirm("Dump recipes? [enter to skip]")? {
        dump_recipes(&book);
    }

    let mut chooser = ConsoleChooser::new(io::stdin().lock(), io::stdout());
    let mut reporter = ConsoleReporter;
    let leaves = calculator::calculate(&item, &book, &mut chooser, &mut reporter)?;

    let mut required = calculator::flatten(&leaves);
    required.sort_by(|a, b| a.name.cmp(&b.name));

    println!("To craft {item}, you will need:");
    println!("{}", report::format_items(&required, 0));
    Ok(())
}

/// Print every stored recipe in the candidate listing style, names sorted.
fn dump_recipes(book: &RecipeBook) {
    for name in book.names() {
        for (i, recipe) in book.get(name).unwrap_or(&[]).iter().enumerate() {
            println!("Recipe #{} for {}:", i + 1, name);
            println!("{}", report::format_tokens(recipe, 0));
        }
    }
}
