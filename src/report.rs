//! Resolution trace reporting and text formatting
//!
//! The resolver narrates its progress (candidates shown, recipes chosen,
//! leaves reached) through the `Reporter` trait instead of printing
//! directly, so the recursion stays testable without capturing console
//! output. `ConsoleReporter` renders the interactive transcript;
//! `NullReporter` is a no-op for tests and quiet callers.

use std::fmt::Write as _;

use crate::models::{parse_item, Item, Recipe};

/// One step of the resolution narrated to the operator.
#[derive(Debug)]
pub enum Event<'a> {
    /// A candidate recipe for an item, shown before any choice is made.
    Candidate {
        name: &'a str,
        index: usize,
        recipe: &'a Recipe,
    },
    /// The only recipe was selected without asking.
    AutoChosen,
    /// The item has no recipe and is taken as a base ingredient.
    NoRecipe { item: &'a Item },
    /// A batch of the item is being crafted with the given recipe.
    CraftingStart { item: &'a Item, index: usize },
    /// Crafting the parent batch needs the scaled ingredient.
    Requires { parent: &'a Item, needed: &'a Item },
    /// The batch is done.
    CraftingDone { item: &'a Item },
}

/// Sink for resolution trace events at a given recursion depth.
pub trait Reporter {
    fn report(&mut self, indent: usize, event: Event<'_>);
}

/// Prints every event as tab-indented text on stdout.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, indent: usize, event: Event<'_>) {
        let pad = indentation(indent);
        match event {
            Event::Candidate {
                name,
                index,
                recipe,
            } => {
                println!("{pad}Recipe #{index} for {name}:");
                println!("{}", format_tokens(recipe, indent));
            }
            Event::AutoChosen => {
                println!("{pad}Auto-choosing because there is only one recipe");
            }
            Event::NoRecipe { item } => {
                println!("{pad}Item {} has no recipe", item.name);
            }
            Event::CraftingStart { item, index } => {
                println!("{pad}Crafting {item} using recipe #{index}");
            }
            Event::Requires { parent, needed } => {
                println!("{pad}Crafting {parent} requires {needed}");
            }
            Event::CraftingDone { item } => {
                println!("{pad}Done crafting {item}");
            }
        }
    }
}

/// Discards every event.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _indent: usize, _event: Event<'_>) {}
}

/// One tab per recursion level.
pub fn indentation(indent: usize) -> String {
    "\t".repeat(indent)
}

/// Render items as a tab-indented, dash-bulleted list.
pub fn format_items(items: &[Item], indent: usize) -> String {
    let pad = indentation(indent);
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{pad}- {item}");
    }
    out
}

/// Render a recipe's raw ingredient tokens, parsing each one so
/// `"wood 2"` shows as `2 x wood`.
pub fn format_tokens(recipe: &Recipe, indent: usize) -> String {
    let items: Vec<Item> = recipe.tokens().iter().map(|t| parse_item(t)).collect();
    format_items(&items, indent)
}
