//! Merged token tables.
//!
//! Token tables are merged along the same root-to-dialect walk as fragments.
//! A token defined again further down replaces the earlier definition and
//! moves to the end of its table, taking the new file as its origin.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// The token table files a grammar directory can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Keywords,
    Operators,
    Separators,
    Identifiers,
    /// Keywords that may still be used as identifiers
    NonReservedKeywords,
}

impl TableKind {
    pub const ALL: [TableKind; 5] = [
        TableKind::Keywords,
        TableKind::Operators,
        TableKind::Separators,
        TableKind::Identifiers,
        TableKind::NonReservedKeywords,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            TableKind::Keywords => "keywords.txt",
            TableKind::Operators => "operators.txt",
            TableKind::Separators => "separators.txt",
            TableKind::Identifiers => "identifiers.txt",
            TableKind::NonReservedKeywords => "nonReservedKeywords.txt",
        }
    }

    /// The table stored in a file of this exact name, if any.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.file_name() == name)
    }
}

/// A named token definition and the table file it came from.
///
/// In the non-reserved list the value is the name itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    /// Upper-cased token name
    pub name: String,
    pub value: String,
    pub origin: Option<PathBuf>,
}

impl Keyword {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_uppercase(),
            value: value.into(),
            origin: None,
        }
    }

    pub fn with_origin(mut self, origin: impl Into<PathBuf>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

/// Ordered `NAME: value` table with override semantics.
#[derive(Debug, Clone, Default)]
pub struct KeywordRegistry {
    keywords: Vec<Keyword>,
    index: HashMap<String, usize>,
}

impl KeywordRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token, returning the definition it replaced.
    ///
    /// A replaced token is removed from its old position and the new
    /// definition is appended.
    pub fn insert(&mut self, keyword: Keyword) -> Option<Keyword> {
        let replaced = self.index.remove(&keyword.name).map(|slot| {
            for position in self.index.values_mut() {
                if *position > slot {
                    *position -= 1;
                }
            }
            self.keywords.remove(slot)
        });

        self.index.insert(keyword.name.clone(), self.keywords.len());
        self.keywords.push(keyword);
        replaced
    }

    /// Look up a token by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Keyword> {
        self.index
            .get(&name.to_uppercase())
            .map(|&slot| &self.keywords[slot])
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(|k| k.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Token names in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Ordered set of keyword names; the first occurrence is kept.
#[derive(Debug, Clone, Default)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
}

impl KeywordSet {
    /// Add a keyword, returning false if it was already present.
    pub fn insert(&mut self, name: &str, origin: &Path) -> bool {
        let keyword = Keyword::new(name, name.to_uppercase()).with_origin(origin);
        if self.keywords.iter().any(|k| k.name == keyword.name) {
            return false;
        }
        self.keywords.push(keyword);
        true
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| k.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Every token table of one extraction.
#[derive(Debug, Clone, Default)]
pub struct TokenTables {
    pub keywords: KeywordRegistry,
    pub operators: KeywordRegistry,
    pub separators: KeywordRegistry,
    pub identifiers: KeywordRegistry,
    pub non_reserved: KeywordSet,
}

impl TokenTables {
    /// The `NAME: value` table of the given kind.
    ///
    /// The non-reserved list is not such a table and yields `None`.
    pub fn assignments_mut(&mut self, kind: TableKind) -> Option<&mut KeywordRegistry> {
        match kind {
            TableKind::Keywords => Some(&mut self.keywords),
            TableKind::Operators => Some(&mut self.operators),
            TableKind::Separators => Some(&mut self.separators),
            TableKind::Identifiers => Some(&mut self.identifiers),
            TableKind::NonReservedKeywords => None,
        }
    }

    /// The `NAME: value` tables in output order.
    pub fn assignments(&self) -> [(TableKind, &KeywordRegistry); 4] {
        [
            (TableKind::Keywords, &self.keywords),
            (TableKind::Operators, &self.operators),
            (TableKind::Separators, &self.separators),
            (TableKind::Identifiers, &self.identifiers),
        ]
    }

    /// Non-reserved keywords that no keywords table defines.
    pub fn undefined_non_reserved(&self) -> Vec<&Keyword> {
        self.non_reserved
            .iter()
            .filter(|k| !self.keywords.contains(&k.name))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.non_reserved.is_empty() && self.assignments().iter().all(|(_, t)| t.is_empty())
    }
}
