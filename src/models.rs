//! Data models for items, recipes, and recipe books

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// A named quantity of a craftable or base good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub count: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// A copy of this item with its count multiplied by `factor`.
    ///
    /// Recipes are defined per single unit of their product, so an
    /// ingredient needed for `factor` units scales linearly.
    pub fn scaled(mut self, factor: u64) -> Self {
        self.count *= factor;
        self
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.count, self.name)
    }
}

/// Parse an item token of the form `"name"` or `"name count"`.
///
/// Anything that is not exactly a name, one space, and a non-negative
/// integer degrades to the whole token as the name with count 1. This never
/// fails: a malformed token is a valid name.
pub fn parse_item(token: &str) -> Item {
    let mut parts = token.split(' ');
    if let (Some(name), Some(count), None) = (parts.next(), parts.next(), parts.next()) {
        if let Ok(count) = count.parse() {
            return Item::new(name, count);
        }
    }
    Item::new(token, 1)
}

/// An ordered list of ingredient tokens producing one unit of an item.
///
/// A recipe has no identity beyond its 1-based position in the owning
/// item's recipe list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Recipe(Vec<String>);

impl Recipe {
    pub fn new(tokens: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }
}

/// All known recipes, keyed by the name of the item they produce.
///
/// Read-only once loaded. Merging appends recipe lists on duplicate keys,
/// so alternatives keep their arrival order across sources.
#[derive(Debug, Default)]
pub struct RecipeBook {
    recipes: HashMap<String, Vec<Recipe>>,
}

impl RecipeBook {
    pub fn get(&self, name: &str) -> Option<&[Recipe]> {
        self.recipes.get(name).map(Vec::as_slice)
    }

    /// Append the recipes of a parsed source onto the book.
    pub fn merge(&mut self, source: HashMap<String, Vec<Recipe>>) {
        for (name, recipes) in source {
            self.recipes.entry(name).or_default().extend(recipes);
        }
    }

    /// Item names in the book, sorted for stable listings.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.recipes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// The chosen split of a requested quantity across an item's recipes.
///
/// Pairs keep the order in which indices were first chosen; choosing an
/// index again sums into its existing entry. Indices are 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delegation {
    entries: Vec<(usize, u64)>,
}

impl Delegation {
    /// A delegation assigning the entire count to one recipe.
    pub fn single(index: usize, uses: u64) -> Self {
        let mut delegation = Self::default();
        delegation.add(index, uses);
        delegation
    }

    pub fn add(&mut self, index: usize, uses: u64) {
        match self.entries.iter_mut().find(|(i, _)| *i == index) {
            Some((_, total)) => *total += uses,
            None => self.entries.push((index, uses)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of all uses; equals the requested item count once complete.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, uses)| uses).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_name_and_count() {
        assert_eq!(parse_item("wood 4"), Item::new("wood", 4));
        assert_eq!(parse_item("stick 0"), Item::new("stick", 0));
    }

    #[test]
    fn parse_bare_name_defaults_to_one() {
        assert_eq!(parse_item("wood"), Item::new("wood", 1));
    }

    #[test]
    fn parse_malformed_tokens_fall_back_whole() {
        // Two separators: the token is taken verbatim as a name.
        assert_eq!(parse_item("foo bar baz"), Item::new("foo bar baz", 1));
        // Non-integer count.
        assert_eq!(parse_item("foo bar"), Item::new("foo bar", 1));
        // Negative counts are not counts.
        assert_eq!(parse_item("foo -2"), Item::new("foo -2", 1));
        // Trailing space leaves an empty count part.
        assert_eq!(parse_item("foo "), Item::new("foo ", 1));
    }

    #[test]
    fn scaled_multiplies_count() {
        assert_eq!(Item::new("wood", 3).scaled(4), Item::new("wood", 12));
        assert_eq!(Item::new("wood", 3).scaled(0), Item::new("wood", 0));
    }

    #[test]
    fn item_display() {
        assert_eq!(Item::new("wood", 4).to_string(), "4 x wood");
    }

    #[test]
    fn delegation_sums_repeated_indices() {
        let mut delegation = Delegation::default();
        delegation.add(2, 3);
        delegation.add(1, 1);
        delegation.add(2, 2);

        let pairs: Vec<_> = delegation.iter().collect();
        assert_eq!(pairs, vec![(2, 5), (1, 1)]);
        assert_eq!(delegation.total(), 6);
    }

    #[test]
    fn book_merge_appends_on_duplicate_keys() {
        let mut book = RecipeBook::default();
        book.merge(HashMap::from([(
            "tool".to_string(),
            vec![Recipe::new(["stick 2"])],
        )]));
        book.merge(HashMap::from([(
            "tool".to_string(),
            vec![Recipe::new(["iron 1"])],
        )]));

        let recipes = book.get("tool").unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].tokens(), ["stick 2"]);
        assert_eq!(recipes[1].tokens(), ["iron 1"]);
    }
}
