//! Recursive recipe resolution and flattening
//!
//! Resolution walks the recipe tree depth-first. At every item it either
//! bottoms out (no recipe: the item is a base ingredient) or splits the
//! requested quantity across the item's recipes, then follows each chosen
//! recipe with the ingredient counts scaled by the number of uses. The
//! result is the flat multiset of leaves, aggregated by `flatten`.
//!
//! Recipe cycles are not detected; resolving cyclic data recurses until
//! the stack runs out.

use std::collections::HashMap;

use anyhow::Result;

use crate::models::{parse_item, Delegation, Item, Recipe, RecipeBook};
use crate::prompt::Chooser;
use crate::report::{Event, Reporter};

/// Resolve an item into the leaf ingredients needed to craft it.
///
/// Leaves are returned in resolution order and may repeat; pass the result
/// through [`flatten`] to aggregate per name. The chooser is consulted only
/// when an item has more than one recipe.
pub fn calculate(
    item: &Item,
    book: &RecipeBook,
    chooser: &mut dyn Chooser,
    reporter: &mut dyn Reporter,
) -> Result<Vec<Item>> {
    calculate_at(item, book, chooser, reporter, 0)
}

fn calculate_at(
    item: &Item,
    book: &RecipeBook,
    chooser: &mut dyn Chooser,
    reporter: &mut dyn Reporter,
    indent: usize,
) -> Result<Vec<Item>> {
    let Some(recipes) = book.get(&item.name) else {
        reporter.report(indent, Event::NoRecipe { item });
        return Ok(vec![item.clone()]);
    };

    let delegation = delegate(item, recipes, chooser, reporter, indent)?;

    let mut ingredients = Vec::new();
    for (index, uses) in delegation.iter() {
        let batch = Item::new(&item.name, uses);
        reporter.report(indent, Event::CraftingStart { item: &batch, index });
        ingredients.extend(follow_recipe(
            &batch,
            &recipes[index - 1],
            book,
            chooser,
            reporter,
            indent + 1,
        )?);
        reporter.report(indent, Event::CraftingDone { item: &batch });
    }

    Ok(ingredients)
}

/// Decide how `item.count` units are produced across the candidate recipes.
///
/// A single recipe is chosen automatically; several hand the decision to
/// the chooser. A zero count delegates to nothing at all.
fn delegate(
    item: &Item,
    recipes: &[Recipe],
    chooser: &mut dyn Chooser,
    reporter: &mut dyn Reporter,
    indent: usize,
) -> Result<Delegation> {
    for (i, recipe) in recipes.iter().enumerate() {
        reporter.report(
            indent,
            Event::Candidate {
                name: &item.name,
                index: i + 1,
                recipe,
            },
        );
    }

    if item.count == 0 {
        return Ok(Delegation::default());
    }

    if recipes.len() == 1 {
        reporter.report(indent, Event::AutoChosen);
        return Ok(Delegation::single(1, item.count));
    }

    chooser.delegate(&item.name, recipes.len(), item.count, indent)
}

fn follow_recipe(
    batch: &Item,
    recipe: &Recipe,
    book: &RecipeBook,
    chooser: &mut dyn Chooser,
    reporter: &mut dyn Reporter,
    indent: usize,
) -> Result<Vec<Item>> {
    let mut ingredients = Vec::new();

    for token in recipe.tokens() {
        let needed = parse_item(token).scaled(batch.count);
        reporter.report(
            indent,
            Event::Requires {
                parent: batch,
                needed: &needed,
            },
        );
        ingredients.extend(calculate_at(&needed, book, chooser, reporter, indent)?);
    }

    Ok(ingredients)
}

/// Aggregate a multiset of items into one entry per distinct name with the
/// summed count. Output order is unspecified.
pub fn flatten(items: &[Item]) -> Vec<Item> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for item in items {
        *counts.entry(&item.name).or_default() += item.count;
    }

    counts
        .into_iter()
        .map(|(name, count)| Item::new(name, count))
        .collect()
}
