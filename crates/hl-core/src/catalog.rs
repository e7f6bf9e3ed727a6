//! Officer and category tables for the fallback activity source.
//!
//! The built-in tables ship inside the crate as JSON and are parsed the first
//! time they are needed. A [`Catalog`] can also be loaded from another JSON
//! document with the same shape:
//!
//! ```json
//! {
//!   "officers":   { "建": { "recommended": ["出行"], "forbidden": ["动土"] } },
//!   "categories": { "出行": "出行", "动土": "动土修造" }
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use serde::Deserialize;

use crate::activity::RawLists;
use crate::error::{HlError, HlResult};

const BUILTIN_JSON: &str = include_str!("../data/officer_things.json");

static BUILTIN: LazyLock<Result<Catalog, String>> =
    LazyLock::new(|| Catalog::from_json(BUILTIN_JSON).map_err(|e| e.to_string()));

/// Raw activity tokens listed under one officer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfficerThings {
    /// Tokens recommended on this officer's days.
    #[serde(default)]
    pub recommended: Vec<String>,
    /// Tokens forbidden on this officer's days.
    #[serde(default)]
    pub forbidden: Vec<String>,
}

/// Officer → activity tokens, and activity token → category label.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    officers: HashMap<String, OfficerThings>,
    categories: HashMap<String, String>,
}

impl Catalog {
    /// The tables bundled with the crate.
    pub fn builtin() -> HlResult<&'static Catalog> {
        BUILTIN.as_ref().map_err(|e| HlError::Catalog(e.clone()))
    }

    /// Load tables from a JSON document.
    pub fn from_json(json: &str) -> HlResult<Self> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| HlError::Catalog(e.to_string()))?;
        if catalog.categories.is_empty() {
            return Err(HlError::Catalog("category table is empty".into()));
        }
        Ok(catalog)
    }

    /// Raw tokens listed under `officer`.
    pub fn officer_things(&self, officer: &str) -> Option<&OfficerThings> {
        self.officers.get(officer)
    }

    /// Category label for a raw token.
    pub fn category(&self, token: &str) -> Option<&str> {
        self.categories
            .get(token)
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }

    /// The officer's lists, folded into categories.
    ///
    /// Tokens without a category are dropped; each category appears once, at
    /// the position of its first token.
    pub fn officer_categories(&self, officer: &str) -> HlResult<RawLists> {
        let things = self
            .officer_things(officer)
            .ok_or_else(|| HlError::UnknownOfficer(officer.to_string()))?;
        Ok(RawLists {
            recommended: self.map_categories(&things.recommended),
            forbidden: self.map_categories(&things.forbidden),
        })
    }

    fn map_categories(&self, tokens: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        tokens
            .iter()
            .filter_map(|t| self.category(t))
            .filter(|c| seen.insert(*c))
            .map(str::to_string)
            .collect()
    }
}
