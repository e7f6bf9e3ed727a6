//! Activity-level normalization.
//!
//! Almanacs publish how far a day's 宜/忌 lists should be trusted either as a
//! phrase (从宜不从忌, ...) or as a numeric code. Both collapse to a [`Tier`].

use serde::{Deserialize, Serialize};

use crate::almanac::AlmanacSnapshot;

/// Normalized activity-permissiveness level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// 上: follow the 宜 list, ignore the 忌 list.
    Upper,
    /// 中: follow both lists.
    Middle,
    /// 下: follow the 忌 list, ignore the 宜 list.
    Lower,
    /// 无: everything is forbidden.
    None,
}

impl Tier {
    /// Map a level phrase to its tier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "从宜不从忌" => Some(Self::Upper),
            "从宜亦从忌" => Some(Self::Middle),
            "从忌不从宜" => Some(Self::Lower),
            "诸事皆忌" => Some(Self::None),
            _ => None,
        }
    }

    /// Map a numeric level code (0-3) to its tier.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Upper),
            1 => Some(Self::Middle),
            2 => Some(Self::Lower),
            3 => Some(Self::None),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upper => write!(f, "上"),
            Self::Middle => write!(f, "中"),
            Self::Lower => write!(f, "下"),
            Self::None => write!(f, "无"),
        }
    }
}

/// Resolve the snapshot's tier.
///
/// The phrase wins over the numeric code. With neither usable, the strictest
/// tier is returned.
pub fn resolve_tier(almanac: &AlmanacSnapshot) -> Tier {
    if let Some(tier) = almanac.level_name.as_deref().and_then(Tier::from_name) {
        return tier;
    }
    if let Some(tier) = almanac.level_code.and_then(Tier::from_code) {
        return tier;
    }

    tracing::debug!(
        date = %almanac.date,
        level_name = ?almanac.level_name,
        level_code = ?almanac.level_code,
        "no usable activity level, defaulting to strictest tier"
    );
    Tier::None
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn snapshot() -> AlmanacSnapshot {
        AlmanacSnapshot::new(NaiveDate::from_ymd_opt(2024, 5, 20).unwrap())
    }

    #[test]
    fn names_map_to_tiers() {
        assert_eq!(Tier::from_name("从宜不从忌"), Some(Tier::Upper));
        assert_eq!(Tier::from_name("从宜亦从忌"), Some(Tier::Middle));
        assert_eq!(Tier::from_name("从忌不从宜"), Some(Tier::Lower));
        assert_eq!(Tier::from_name(" 诸事皆忌 "), Some(Tier::None));
        assert_eq!(Tier::from_name("大吉"), None);
    }

    #[test]
    fn codes_map_to_tiers() {
        assert_eq!(Tier::from_code(0), Some(Tier::Upper));
        assert_eq!(Tier::from_code(3), Some(Tier::None));
        assert_eq!(Tier::from_code(4), None);
    }

    #[test]
    fn name_takes_precedence() {
        let a = snapshot().with_level_name("从忌不从宜").with_level_code(0);
        assert_eq!(resolve_tier(&a), Tier::Lower);
    }

    #[test]
    fn unknown_name_falls_back_to_code() {
        let a = snapshot().with_level_name("???").with_level_code(1);
        assert_eq!(resolve_tier(&a), Tier::Middle);
    }

    #[test]
    fn nothing_defaults_to_none_tier() {
        assert_eq!(resolve_tier(&snapshot()), Tier::None);
        assert_eq!(resolve_tier(&snapshot().with_level_code(9)), Tier::None);
    }
}
