//! Hard-taboo detection.
//!
//! A day is hard-taboo when it falls on one of the thirteen 杨公忌 dates, or
//! on the eve of a 四绝 (立春 立夏 立秋 立冬) or 四离 (春分 夏至 秋分 冬至) solar
//! term. Hard-taboo days are graded 特凶 regardless of any other signal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::almanac::{AlmanacSnapshot, MonthDay};

/// Solar terms whose eve is a 四绝 day.
pub const FOUR_ABSOLUTE_TERMS: [&str; 4] = ["立春", "立夏", "立秋", "立冬"];

/// Solar terms whose eve is a 四离 day.
pub const FOUR_SEPARATION_TERMS: [&str; 4] = ["春分", "夏至", "秋分", "冬至"];

/// The thirteen 杨公忌 dates. Month 7 carries two.
pub const YANG_GONG_DATES: [MonthDay; 13] = [
    MonthDay::new(1, 13),
    MonthDay::new(2, 11),
    MonthDay::new(3, 9),
    MonthDay::new(4, 7),
    MonthDay::new(5, 5),
    MonthDay::new(6, 2),
    MonthDay::new(7, 1),
    MonthDay::new(7, 29),
    MonthDay::new(8, 27),
    MonthDay::new(9, 25),
    MonthDay::new(10, 23),
    MonthDay::new(11, 21),
    MonthDay::new(12, 19),
];

/// Reference year for day-before arithmetic on bare month/day pairs.
/// A leap year, so that 2/29 is representable.
const REFERENCE_YEAR: i32 = 2000;

/// Why a day is hard-taboo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HardTaboo {
    /// One of the 杨公十三忌 dates.
    YangGong(MonthDay),
    /// Eve of a 四绝 solar term.
    FourAbsolute(String),
    /// Eve of a 四离 solar term.
    FourSeparation(String),
}

impl std::fmt::Display for HardTaboo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YangGong(md) => write!(f, "杨公忌（{md}）"),
            Self::FourAbsolute(term) => write!(f, "四绝（{term}前一日）"),
            Self::FourSeparation(term) => write!(f, "四离（{term}前一日）"),
        }
    }
}

/// The month/day immediately before `md`, rolling over month and year ends.
///
/// Returns `None` for pairs that are not a calendar date.
pub fn previous_month_day(md: MonthDay) -> Option<MonthDay> {
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, md.month, md.day)
        .and_then(|d| d.pred_opt())
        .map(MonthDay::of)
}

/// Find the reason this snapshot's date is hard-taboo, if any.
///
/// Solar terms missing from the snapshot, or recorded with an impossible
/// month/day, are skipped.
pub fn detect_hard_taboo(almanac: &AlmanacSnapshot) -> Option<HardTaboo> {
    let today = almanac.month_day();

    if YANG_GONG_DATES.contains(&today) {
        return Some(HardTaboo::YangGong(today));
    }

    let is_eve = |term: &str| {
        almanac
            .solar_terms
            .get(term)
            .and_then(|md| previous_month_day(*md))
            .is_some_and(|eve| eve == today)
    };

    if let Some(term) = FOUR_ABSOLUTE_TERMS.into_iter().find(|t| is_eve(*t)) {
        return Some(HardTaboo::FourAbsolute(term.to_string()));
    }
    if let Some(term) = FOUR_SEPARATION_TERMS.into_iter().find(|t| is_eve(*t)) {
        return Some(HardTaboo::FourSeparation(term.to_string()));
    }

    None
}

/// Whether this snapshot's date is hard-taboo.
pub fn is_hard_taboo(almanac: &AlmanacSnapshot) -> bool {
    detect_hard_taboo(almanac).is_some()
}
