//! Where a day's raw 宜/忌 lists come from.
//!
//! Almanacs either publish both lists directly, or only name the day officer,
//! in which case the lists are looked up in the officer tables of a
//! [`Catalog`] and folded into activity categories.

use crate::almanac::AlmanacSnapshot;
use crate::catalog::Catalog;
use crate::error::{HlError, HlResult};

/// Raw, un-normalized activity lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLists {
    /// Recommended (宜) labels.
    pub recommended: Vec<String>,
    /// Forbidden (忌) labels.
    pub forbidden: Vec<String>,
}

/// A source of raw activity lists for one date.
pub trait ActivitySource {
    /// Produce the raw lists.
    fn raw_lists(&self) -> HlResult<RawLists>;
}

/// Lists published directly by the almanac, used verbatim.
#[derive(Debug, Clone, Copy)]
pub struct DirectLists<'a> {
    good: &'a [String],
    bad: &'a [String],
}

impl<'a> DirectLists<'a> {
    /// Wrap the published lists.
    pub fn new(good: &'a [String], bad: &'a [String]) -> Self {
        Self { good, bad }
    }
}

impl ActivitySource for DirectLists<'_> {
    fn raw_lists(&self) -> HlResult<RawLists> {
        Ok(RawLists {
            recommended: self.good.to_vec(),
            forbidden: self.bad.to_vec(),
        })
    }
}

/// Lists derived from the day officer via the catalog tables.
#[derive(Debug, Clone, Copy)]
pub struct OfficerCategories<'a> {
    officer: Option<&'a str>,
    catalog: Option<&'a Catalog>,
}

impl<'a> OfficerCategories<'a> {
    /// Look up `officer` in `catalog`, or in the built-in catalog when `None`.
    pub fn new(officer: Option<&'a str>, catalog: Option<&'a Catalog>) -> Self {
        Self { officer, catalog }
    }
}

impl ActivitySource for OfficerCategories<'_> {
    fn raw_lists(&self) -> HlResult<RawLists> {
        let catalog = match self.catalog {
            Some(c) => c,
            None => Catalog::builtin()?,
        };
        let officer = self.officer.ok_or(HlError::MissingOfficer)?;
        catalog.officer_categories(officer)
    }
}

/// Pick the source for a snapshot: direct lists when the almanac carries
/// both, officer tables otherwise.
pub fn source_for<'a>(
    almanac: &'a AlmanacSnapshot,
    catalog: Option<&'a Catalog>,
) -> Box<dyn ActivitySource + 'a> {
    match almanac.direct_lists() {
        Some((good, bad)) => Box::new(DirectLists::new(good, bad)),
        None => Box::new(OfficerCategories::new(almanac.officer_label(), catalog)),
    }
}

/// Resolve the raw lists for a snapshot.
pub fn resolve_raw_lists(
    almanac: &AlmanacSnapshot,
    catalog: Option<&Catalog>,
) -> HlResult<RawLists> {
    source_for(almanac, catalog).raw_lists()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn snapshot() -> AlmanacSnapshot {
        AlmanacSnapshot::new(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap())
    }

    const SMALL_CATALOG: &str = r#"{
        "officers": {
            "建": { "recommended": ["出行", "远行", "上任", "博彩"], "forbidden": ["动土"] }
        },
        "categories": { "出行": "出行", "远行": "出行", "上任": "求职上任", "动土": "动土修造" }
    }"#;

    #[test]
    fn direct_lists_used_verbatim() {
        let a = snapshot()
            .with_officer("建")
            .with_activities(["嫁娶", "嫁娶"], ["出行"]);
        let raw = resolve_raw_lists(&a, None).unwrap();
        assert_eq!(raw.recommended, ["嫁娶", "嫁娶"]);
        assert_eq!(raw.forbidden, ["出行"]);
    }

    #[test]
    fn direct_lists_do_not_need_an_officer() {
        let a = snapshot().with_activities(Vec::<String>::new(), Vec::new());
        let raw = resolve_raw_lists(&a, None).unwrap();
        assert_eq!(raw, RawLists::default());
    }

    #[test]
    fn officer_fallback_maps_categories() {
        let catalog = Catalog::from_json(SMALL_CATALOG).unwrap();
        let a = snapshot().with_officer("建");
        let raw = resolve_raw_lists(&a, Some(&catalog)).unwrap();
        assert_eq!(raw.recommended, ["出行", "求职上任"]);
        assert_eq!(raw.forbidden, ["动土修造"]);
    }

    #[test]
    fn partial_direct_lists_fall_back() {
        let catalog = Catalog::from_json(SMALL_CATALOG).unwrap();
        let mut a = snapshot().with_officer("建");
        a.good_things = Some(vec!["嫁娶".into()]);
        let raw = resolve_raw_lists(&a, Some(&catalog)).unwrap();
        assert_eq!(raw.forbidden, ["动土修造"]);
    }

    #[test]
    fn missing_officer_is_an_error() {
        let catalog = Catalog::from_json(SMALL_CATALOG).unwrap();
        let a = snapshot().with_officer(" ");
        let err = resolve_raw_lists(&a, Some(&catalog)).unwrap_err();
        assert!(matches!(err, HlError::MissingOfficer));
    }

    #[test]
    fn unknown_officer_is_an_error() {
        let catalog = Catalog::from_json(SMALL_CATALOG).unwrap();
        let a = snapshot().with_officer("闭");
        let err = resolve_raw_lists(&a, Some(&catalog)).unwrap_err();
        assert!(matches!(err, HlError::UnknownOfficer(ref o) if o == "闭"));
    }

    #[test]
    fn builtin_catalog_covers_every_officer() {
        for officer in crate::spirit::Officer::all() {
            let a = snapshot().with_officer(officer.label());
            let raw = resolve_raw_lists(&a, None).unwrap();
            assert!(!raw.recommended.is_empty(), "{officer} has no 宜");
            assert!(!raw.forbidden.is_empty(), "{officer} has no 忌");
        }
    }
}
