use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Case-insensitive mapping from input aliases to canonical tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable {
    aliases: BTreeMap<String, String>,
}

impl SynonymTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `alias` as another spelling of `canonical`.
    pub fn insert(&mut self, alias: &str, canonical: &str) {
        self.aliases
            .insert(alias.trim().to_uppercase(), canonical.trim().to_uppercase());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, alias: &str, canonical: &str) -> Self {
        self.insert(alias, canonical);
        self
    }

    /// The canonical token for `token`, or `token` itself (upper-cased).
    ///
    /// Only one substitution is made: an alias of an alias is not followed.
    pub fn canonical(&self, token: &str) -> String {
        let upper = token.to_uppercase();
        match self.aliases.get(&upper) {
            Some(canonical) => canonical.clone(),
            None => upper,
        }
    }

    /// Iterates `(alias, canonical)` pairs in alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether the table has no aliases.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<A: AsRef<str>, C: AsRef<str>> FromIterator<(A, C)> for SynonymTable {
    fn from_iter<T: IntoIterator<Item = (A, C)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (alias, canonical) in iter {
            table.insert(alias.as_ref(), canonical.as_ref());
        }
        table
    }
}
