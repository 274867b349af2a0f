//! Recipe source loading and merging
//!
//! Recipe sources are YAML files mapping an item name to a list of
//! recipes, each recipe a list of ingredient tokens (`"name"` or
//! `"name count"`). Several sources merge into one book; recipe lists for
//! the same item are concatenated in load order, never replaced.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::{Recipe, RecipeBook};

/// Failure to load a recipe source. Fatal: surfaced to the top level and
/// printed, never retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read recipe source {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid recipe data in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Load and merge all recipe sources into a single book.
pub fn load_recipes(sources: &[PathBuf]) -> Result<RecipeBook, LoadError> {
    let mut book = RecipeBook::default();

    for path in sources {
        book.merge(load_source(path)?);
    }

    debug!(items = book.len(), sources = sources.len(), "recipe book built");
    Ok(book)
}

fn load_source(path: &Path) -> Result<HashMap<String, Vec<Recipe>>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: HashMap<String, Vec<Recipe>> =
        serde_yaml::from_str(&text).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(source = %path.display(), items = parsed.len(), "loaded recipe source");
    Ok(parsed)
}
