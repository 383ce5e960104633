//! Categories and the canonical category set.
//!
//! A category is either *explicit* (declared in a category block) or
//! *implicit* (only referenced from a transaction). The two are distinct
//! values until [`CategorySet::merge_implicit`] folds the referenced names
//! into the declared ones, explicit entries winning on a name collision.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::intern::NameSet;

/// Separator between levels of a qualified category name.
pub const CATEGORY_SEPARATOR: char = ':';

/// A category, identified by its qualified name and whether it was declared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Qualified name such as `Food:Groceries`
    pub name: String,
    /// Declared in a category block rather than only referenced
    pub explicit: bool,
    /// Description (`D` field)
    pub description: Option<String>,
    /// Income rather than expense category
    pub income: bool,
    /// Marked as tax related
    pub tax_related: bool,
}

impl Category {
    /// Create a declared category.
    #[must_use]
    pub fn explicit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            explicit: true,
            description: None,
            income: false,
            tax_related: false,
        }
    }

    /// Create a category known only from a transaction reference.
    #[must_use]
    pub fn implicit(name: impl Into<String>) -> Self {
        Self {
            explicit: false,
            ..Self::explicit(name)
        }
    }

    /// Levels of the qualified name, outermost first.
    pub fn path(&self) -> impl Iterator<Item = &str> {
        self.name.split(CATEGORY_SEPARATOR).map(str::trim)
    }

    /// Qualified name of the parent category, if this is a subcategory.
    pub fn parent(&self) -> Option<&str> {
        self.name
            .rsplit_once(CATEGORY_SEPARATOR)
            .map(|(parent, _)| parent.trim_end())
    }

    /// Last level of the qualified name.
    pub fn leaf_name(&self) -> &str {
        self.name
            .rsplit_once(CATEGORY_SEPARATOR)
            .map_or(self.name.as_str(), |(_, leaf)| leaf.trim_start())
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.explicit == other.explicit
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.explicit.hash(state);
    }
}

/// The canonical, name-deduplicated set of categories in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct CategorySet {
    entries: Vec<Category>,
    by_name: HashMap<String, usize>,
}

impl CategorySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declared category.
    ///
    /// Returns `false` when a category with the same name is already present;
    /// the first declaration is kept.
    pub fn insert_explicit(&mut self, category: Category) -> bool {
        if category.name.trim().is_empty() || self.by_name.contains_key(&category.name) {
            return false;
        }
        self.by_name
            .insert(category.name.clone(), self.entries.len());
        self.entries.push(category);
        true
    }

    /// Fold referenced category names into the set.
    ///
    /// Names that are already present contribute nothing. Returns the number
    /// of categories added.
    pub fn merge_implicit(&mut self, names: &NameSet) -> usize {
        let before = self.entries.len();
        for name in names.iter() {
            if !self.by_name.contains_key(name) {
                self.by_name.insert(name.to_string(), self.entries.len());
                self.entries.push(Category::implicit(name));
            }
        }
        self.entries.len() - before
    }

    /// Look up a category by qualified name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Check if a category name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter()
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of declared categories.
    pub fn explicit_count(&self) -> usize {
        self.entries.iter().filter(|c| c.explicit).count()
    }
}

impl Serialize for CategorySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}
