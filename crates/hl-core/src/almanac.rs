//! Almanac snapshot: the read-only facts the rules consume for one date.
//!
//! Producing these facts (lunar conversion, officer cycle, solar-term
//! astronomy) is the job of an upstream calendar library. A snapshot is
//! built with the `with_*` methods or deserialized from JSON.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month/day pair, serialized as `[month, day]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct MonthDay {
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
}

impl MonthDay {
    /// Create a month/day pair. No range check is done here.
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// The month/day of a full date.
    pub fn of(date: NaiveDate) -> Self {
        Self::new(date.month(), date.day())
    }
}

impl From<(u32, u32)> for MonthDay {
    fn from((month, day): (u32, u32)) -> Self {
        Self::new(month, day)
    }
}

impl From<MonthDay> for (u32, u32) {
    fn from(md: MonthDay) -> Self {
        (md.month, md.day)
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}月{}日", self.month, self.day)
    }
}

/// Almanac facts for a single date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlmanacSnapshot {
    /// The Gregorian date these facts describe.
    pub date: NaiveDate,
    /// Day officer label (建, 除, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub officer: Option<String>,
    /// Day-god label (青龙, 白虎, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_god: Option<String>,
    /// Named activity level, e.g. 从宜不从忌.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_name: Option<String>,
    /// Numeric activity level, 0-3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_code: Option<u8>,
    /// Recommended activities as published by the almanac.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub good_things: Option<Vec<String>>,
    /// Forbidden activities as published by the almanac.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bad_things: Option<Vec<String>>,
    /// This year's solar terms by name. May be partial.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub solar_terms: BTreeMap<String, MonthDay>,
}

impl AlmanacSnapshot {
    /// Create an empty snapshot for a date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            officer: None,
            day_god: None,
            level_name: None,
            level_code: None,
            good_things: None,
            bad_things: None,
            solar_terms: BTreeMap::new(),
        }
    }

    /// Set the officer label.
    pub fn with_officer(mut self, officer: impl Into<String>) -> Self {
        self.officer = Some(officer.into());
        self
    }

    /// Set the day-god label.
    pub fn with_day_god(mut self, god: impl Into<String>) -> Self {
        self.day_god = Some(god.into());
        self
    }

    /// Set the named activity level.
    pub fn with_level_name(mut self, name: impl Into<String>) -> Self {
        self.level_name = Some(name.into());
        self
    }

    /// Set the numeric activity level.
    pub fn with_level_code(mut self, code: u8) -> Self {
        self.level_code = Some(code);
        self
    }

    /// Set both published activity lists.
    pub fn with_activities<G, B, S>(mut self, good: G, bad: B) -> Self
    where
        G: IntoIterator<Item = S>,
        B: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.good_things = Some(good.into_iter().map(Into::into).collect());
        self.bad_things = Some(bad.into_iter().map(Into::into).collect());
        self
    }

    /// Record a solar term date for the current year.
    pub fn with_solar_term(mut self, name: impl Into<String>, month: u32, day: u32) -> Self {
        self.solar_terms.insert(name.into(), MonthDay::new(month, day));
        self
    }

    /// Month/day of the snapshot date.
    pub fn month_day(&self) -> MonthDay {
        MonthDay::of(self.date)
    }

    /// Officer label, if present and non-blank.
    pub fn officer_label(&self) -> Option<&str> {
        non_blank(self.officer.as_deref())
    }

    /// Day-god label, if present and non-blank.
    pub fn day_god_label(&self) -> Option<&str> {
        non_blank(self.day_god.as_deref())
    }

    /// Both published lists, when the almanac supplies them directly.
    pub fn direct_lists(&self) -> Option<(&[String], &[String])> {
        match (&self.good_things, &self.bad_things) {
            (Some(good), Some(bad)) => Some((good.as_slice(), bad.as_slice())),
            _ => None,
        }
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn builder_sets_fields() {
        let a = AlmanacSnapshot::new(date(2024, 3, 5))
            .with_officer("建")
            .with_day_god("青龙")
            .with_level_code(1)
            .with_solar_term("惊蛰", 3, 5);
        assert_eq!(a.officer_label(), Some("建"));
        assert_eq!(a.day_god_label(), Some("青龙"));
        assert_eq!(a.level_code, Some(1));
        assert_eq!(a.solar_terms["惊蛰"], MonthDay::new(3, 5));
        assert_eq!(a.month_day(), MonthDay::new(3, 5));
    }

    #[test]
    fn blank_labels_are_absent() {
        let a = AlmanacSnapshot::new(date(2024, 1, 1))
            .with_officer("  ")
            .with_day_god("");
        assert_eq!(a.officer_label(), None);
        assert_eq!(a.day_god_label(), None);
    }

    #[test]
    fn direct_lists_need_both_sides() {
        let mut a = AlmanacSnapshot::new(date(2024, 1, 1));
        assert!(a.direct_lists().is_none());
        a.good_things = Some(vec!["祭祀".into()]);
        assert!(a.direct_lists().is_none());
        a.bad_things = Some(Vec::new());
        let (good, bad) = a.direct_lists().unwrap();
        assert_eq!(good, ["祭祀".to_string()]);
        assert!(bad.is_empty());
    }

    #[test]
    fn deserializes_minimal_json() {
        let a: AlmanacSnapshot = serde_json::from_str(r#"{"date":"2024-02-03"}"#).unwrap();
        assert_eq!(a.date, date(2024, 2, 3));
        assert!(a.officer.is_none());
        assert!(a.solar_terms.is_empty());
    }

    #[test]
    fn solar_terms_as_pairs() {
        let json = r#"{"date":"2024-02-03","solar_terms":{"立春":[2,4]}}"#;
        let a: AlmanacSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(a.solar_terms["立春"], MonthDay::new(2, 4));

        let back = serde_json::to_string(&a).unwrap();
        assert!(back.contains(r#""立春":[2,4]"#), "{back}");
    }

    #[test]
    fn month_day_display() {
        assert_eq!(MonthDay::new(7, 29).to_string(), "7月29日");
    }
}
