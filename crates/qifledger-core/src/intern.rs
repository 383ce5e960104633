//! String interning and deduplicating name sets.
//!
//! Payees, classes and category names are declared implicitly in interchange
//! files: they exist because a transaction mentions them. [`NameSet`] is the
//! single insert-or-get operation used to collect them, keeping exactly one
//! shared copy of every distinct name in first-seen order.
//!
//! # Example
//!
//! ```
//! use qifledger_core::intern::NameSet;
//!
//! let mut payees = NameSet::new();
//!
//! let s1 = payees.insert_or_get("Grocery Store").unwrap();
//! let s2 = payees.insert_or_get("Grocery Store").unwrap();
//! payees.insert_or_get("Employer Inc");
//!
//! // s1 and s2 point to the same string
//! assert!(s1.ptr_eq(&s2));
//! assert_eq!(payees.len(), 2);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An interned string reference.
///
/// This is a thin wrapper around `Arc<str>` that provides cheap cloning
/// and comparison. Two `InternedStr` values with the same content will
/// share the same underlying memory when produced by the same [`NameSet`].
#[derive(Debug, Clone, Eq)]
pub struct InternedStr(Arc<str>);

impl Serialize for InternedStr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for InternedStr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(s))
    }
}

impl PartialOrd for InternedStr {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InternedStr {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl InternedStr {
    /// Create a new interned string (without using a set).
    /// Prefer using `NameSet::insert_or_get` for deduplication.
    pub fn new(s: impl Into<Arc<str>>) -> Self {
        Self(s.into())
    }

    /// Get the string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if two interned strings share the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for InternedStr {
    fn eq(&self, other: &Self) -> bool {
        // Fast path: pointer comparison
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        self.0 == other.0
    }
}

impl std::hash::Hash for InternedStr {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl std::fmt::Display for InternedStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for InternedStr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for InternedStr {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for InternedStr {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for InternedStr {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for InternedStr {
    fn from(s: &String) -> Self {
        Self::new(s.as_str())
    }
}

impl PartialEq<str> for InternedStr {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for InternedStr {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for InternedStr {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other
    }
}

impl Default for InternedStr {
    fn default() -> Self {
        Self::new("")
    }
}

impl std::borrow::Borrow<str> for InternedStr {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

/// A deduplicated set of names that remembers first-seen order.
///
/// Blank names (empty or whitespace only) are never stored.
#[derive(Debug, Clone, Default)]
pub struct NameSet {
    /// Names in the order they were first inserted.
    order: Vec<InternedStr>,
    /// Lookup index over `order`.
    index: HashSet<InternedStr>,
}

impl NameSet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            index: HashSet::new(),
        }
    }

    /// Insert a name, or return the copy already stored.
    ///
    /// Returns `None` for blank names.
    pub fn insert_or_get(&mut self, name: &str) -> Option<InternedStr> {
        if name.trim().is_empty() {
            return None;
        }
        if let Some(existing) = self.index.get(name) {
            return Some(existing.clone());
        }
        let interned = InternedStr::new(name);
        self.index.insert(interned.clone());
        self.order.push(interned.clone());
        Some(interned)
    }

    /// Insert a name, returning `true` if it was not present before.
    pub fn insert(&mut self, name: &str) -> bool {
        let before = self.order.len();
        self.insert_or_get(name);
        self.order.len() > before
    }

    /// Check if a name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    /// Get the number of distinct names.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over names in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(InternedStr::as_str)
    }
}

impl<'a> FromIterator<&'a str> for NameSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert_or_get(name);
        }
        set
    }
}

impl Serialize for NameSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
