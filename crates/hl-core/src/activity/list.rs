//! Order-preserving activity lists and the forbidden-wins conflict rule.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of activity labels.
///
/// Every constructor normalizes: blank entries are dropped and only the first
/// occurrence of a label is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ActivityList {
    items: Vec<String>,
}

impl ActivityList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `item` is in the list.
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Iterate labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Labels as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// A copy of this list with `item` removed.
    pub fn without(&self, item: &str) -> Self {
        Self {
            items: self.items.iter().filter(|i| *i != item).cloned().collect(),
        }
    }

    /// Labels joined with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.items.join(separator)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ActivityList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let mut items = Vec::new();
        for item in iter {
            let item = item.as_ref().trim();
            if item.is_empty() || !seen.insert(item.to_string()) {
                continue;
            }
            items.push(item.to_string());
        }
        Self { items }
    }
}

impl From<Vec<String>> for ActivityList {
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}

impl From<ActivityList> for Vec<String> {
    fn from(list: ActivityList) -> Self {
        list.items
    }
}

impl<'a> IntoIterator for &'a ActivityList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// De-duplicate a raw list, keeping first occurrences in order.
pub fn normalize<I, S>(items: I) -> ActivityList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().collect()
}

/// Normalize both lists, then drop every recommended label that is also
/// forbidden. The forbidden list is never filtered.
pub fn finalize<R, F, S, T>(recommended: R, forbidden: F) -> (ActivityList, ActivityList)
where
    R: IntoIterator<Item = S>,
    F: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let forbidden = normalize(forbidden);
    let recommended = normalize(recommended)
        .iter()
        .filter(|item| !forbidden.contains(item))
        .collect();
    (recommended, forbidden)
}
