//! Name-keyed storage for merged productions.
//!
//! Productions are inserted as the hierarchy is walked from the root grammar
//! directory toward the dialect, so a later insertion under an existing name
//! is an override: it replaces the earlier definition outright.
//!
//! # Example
//!
//! ```ignore
//! use dialect::registry::ProductionRegistry;
//!
//! let mut registry = ProductionRegistry::new();
//! registry.extend(base_productions);
//! if let Some(old) = registry.insert(dialect_production) {
//!     println!("overrode {}", old.name);
//! }
//! ```

mod keywords;

use std::collections::{BTreeMap, HashMap};

use crate::parser::Production;

pub use keywords::{Keyword, KeywordRegistry, KeywordSet, TableKind, TokenTables};

/// Insertion-ordered production mapping.
///
/// Names keep the position of their first definition; an override swaps the
/// stored production in place.
#[derive(Debug, Clone, Default)]
pub struct ProductionRegistry {
    productions: Vec<Production>,
    index: HashMap<String, usize>,
}

impl ProductionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a production, returning the definition it replaced.
    pub fn insert(&mut self, production: Production) -> Option<Production> {
        match self.index.get(&production.name) {
            Some(&slot) => Some(std::mem::replace(&mut self.productions[slot], production)),
            None => {
                self.index
                    .insert(production.name.clone(), self.productions.len());
                self.productions.push(production);
                None
            }
        }
    }

    /// Insert several productions in order, returning the replaced ones.
    pub fn extend(&mut self, productions: impl IntoIterator<Item = Production>) -> Vec<Production> {
        productions
            .into_iter()
            .filter_map(|p| self.insert(p))
            .collect()
    }

    /// Get a production by name.
    pub fn get(&self, name: &str) -> Option<&Production> {
        self.index.get(name).map(|&slot| &self.productions[slot])
    }

    /// Get the verbatim text of a production by name.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).map(|p| p.text.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All production names, in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.productions.iter().map(|p| p.name.as_str())
    }

    /// All productions, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Production> {
        self.productions.iter()
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }

    /// Name to text view, sorted by name.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.productions
            .into_iter()
            .map(|p| (p.name, p.text))
            .collect()
    }
}

impl IntoIterator for ProductionRegistry {
    type Item = Production;
    type IntoIter = std::vec::IntoIter<Production>;

    fn into_iter(self) -> Self::IntoIter {
        self.productions.into_iter()
    }
}
