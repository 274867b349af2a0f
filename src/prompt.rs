//! Operator prompts for recipe disambiguation
//!
//! When an item has more than one recipe the resolver cannot decide alone;
//! it asks a `Chooser` to split the requested quantity across the
//! candidates. `ConsoleChooser` backs that with blocking console prompts
//! and re-asks until the input is a usable integer in range. Tests drive it
//! with in-memory streams instead.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use thiserror::Error;

use crate::models::Delegation;
use crate::report::indentation;

/// The operator ended the input stream mid-run. Recoverable only at the
/// top level, where it turns into a clean abort notice.
#[derive(Debug, Error)]
#[error("aborted by user")]
pub struct Aborted;

/// Decides how a requested quantity is split across an item's recipes.
///
/// Invoked only for items with at least two recipes and a nonzero count.
/// The returned delegation's uses must sum to `total`, with every index in
/// `[1, recipe_count]`.
pub trait Chooser {
    fn delegate(
        &mut self,
        name: &str,
        recipe_count: usize,
        total: u64,
        indent: usize,
    ) -> Result<Delegation>;
}

/// Interactive chooser over a pair of streams, stdin/stdout in production.
pub struct ConsoleChooser<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read lines until one parses as an integer. End of input aborts.
    fn read_int(&mut self, pad: &str) -> Result<i64> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(Aborted.into());
            }
            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    write!(self.output, "{pad}Input a valid integer: ")?;
                    self.output.flush()?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Chooser for ConsoleChooser<R, W> {
    fn delegate(
        &mut self,
        name: &str,
        recipe_count: usize,
        total: u64,
        indent: usize,
    ) -> Result<Delegation> {
        let pad = indentation(indent);
        let mut delegation = Delegation::default();
        let mut remaining = total;

        while remaining > 0 {
            let index = loop {
                write!(
                    self.output,
                    "{pad}Select a recipe to craft {name}? [1-{recipe_count}] "
                )?;
                self.output.flush()?;
                let value = self.read_int(&pad)?;
                if value >= 1 && value as usize <= recipe_count {
                    break value as usize;
                }
            };

            let uses = loop {
                write!(
                    self.output,
                    "{pad}How many times to use recipe #{index}? [1-{remaining}] "
                )?;
                self.output.flush()?;
                let value = self.read_int(&pad)?;
                if value >= 1 && value as u64 <= remaining {
                    break value as u64;
                }
            };

            delegation.add(index, uses);
            remaining -= uses;
            writeln!(self.output, "{pad}Need to choose {remaining} more recipes...")?;
        }

        Ok(delegation)
    }
}

/// Ask a yes/blank question on the console; any non-blank reply is a yes.
pub fn confirm(question: &str) -> Result<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "{question} ")?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(Aborted.into());
    }
    Ok(!line.trim().is_empty())
}
