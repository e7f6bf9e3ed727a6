//! Six-level day grade and the rules that produce it.
//!
//! The base grade comes from the activity tier. The day-god then moves it at
//! most one step along the scale, using one of two shift tables. A grade with
//! no entry in the table stays where it is, which is how the extremes are
//! pinned. Two overrides sit on top: hard-taboo days are always 特凶, and a
//! good day whose forbidden list says 诸事不宜 is pulled down to 凶.

use serde::{Deserialize, Serialize};

use crate::activity::{ALL_FORBIDDEN, ActivityList};
use crate::almanac::AlmanacSnapshot;
use crate::level::{Tier, resolve_tier};
use crate::spirit::{DayGod, Polarity};

/// Day grade, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// 特凶
    #[serde(rename = "特凶")]
    ExtremeInauspicious,
    /// 大凶
    #[serde(rename = "大凶")]
    GreatInauspicious,
    /// 凶
    #[serde(rename = "凶")]
    Inauspicious,
    /// 平
    #[serde(rename = "平")]
    Neutral,
    /// 吉
    #[serde(rename = "吉")]
    Auspicious,
    /// 大吉
    #[serde(rename = "大吉")]
    GreatAuspicious,
}

impl Grade {
    /// All grades from worst to best.
    pub fn all() -> &'static [Self] {
        &[
            Self::ExtremeInauspicious,
            Self::GreatInauspicious,
            Self::Inauspicious,
            Self::Neutral,
            Self::Auspicious,
            Self::GreatAuspicious,
        ]
    }

    /// The almanac label (特凶 .. 大吉).
    pub fn label(self) -> &'static str {
        match self {
            Self::ExtremeInauspicious => "特凶",
            Self::GreatInauspicious => "大凶",
            Self::Inauspicious => "凶",
            Self::Neutral => "平",
            Self::Auspicious => "吉",
            Self::GreatAuspicious => "大吉",
        }
    }

    /// Parse a grade from its label.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|g| g.label() == s.trim())
    }

    /// Base grade for an activity tier.
    pub fn for_tier(tier: Tier) -> Self {
        match tier {
            Tier::Upper => Self::GreatAuspicious,
            Tier::Middle => Self::Auspicious,
            Tier::Lower => Self::Neutral,
            Tier::None => Self::Inauspicious,
        }
    }

    /// 吉 or 大吉.
    pub fn is_good(self) -> bool {
        self >= Self::Auspicious
    }

    /// One step in the direction of `polarity`, if the shift table allows it.
    pub fn shifted(self, polarity: Polarity) -> Self {
        let table: &[(Grade, Grade)] = match polarity {
            Polarity::Inauspicious => &INAUSPICIOUS_SHIFT,
            Polarity::Auspicious => &AUSPICIOUS_SHIFT,
        };
        table
            .iter()
            .find(|(from, _)| *from == self)
            .map_or(self, |(_, to)| *to)
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Shift under a black-path day-god. 大凶 has no entry.
const INAUSPICIOUS_SHIFT: [(Grade, Grade); 4] = [
    (Grade::GreatAuspicious, Grade::Auspicious),
    (Grade::Auspicious, Grade::Neutral),
    (Grade::Neutral, Grade::Inauspicious),
    (Grade::Inauspicious, Grade::GreatInauspicious),
];

/// Shift under a yellow-path day-god. 大吉 has no entry.
const AUSPICIOUS_SHIFT: [(Grade, Grade); 3] = [
    (Grade::Inauspicious, Grade::Neutral),
    (Grade::Neutral, Grade::Auspicious),
    (Grade::Auspicious, Grade::GreatAuspicious),
];

/// Grade a day from its tier and day-god, honouring the hard-taboo override.
///
/// The 诸事不宜 override needs the final forbidden list and is applied
/// separately by [`apply_global_forbidden`].
pub fn grade_day(almanac: &AlmanacSnapshot, hard_taboo: bool) -> Grade {
    if hard_taboo {
        return Grade::ExtremeInauspicious;
    }

    let tier = resolve_tier(almanac);
    let base = Grade::for_tier(tier);
    let god = almanac.day_god_label().and_then(DayGod::parse);
    let grade = god.map_or(base, |g| base.shifted(g.polarity()));

    tracing::debug!(
        date = %almanac.date,
        %tier,
        %base,
        day_god = ?god,
        %grade,
        "graded day"
    );
    grade
}

/// Pull a good grade down to 凶 when the day is globally off-limits.
pub fn apply_global_forbidden(grade: Grade, forbidden: &ActivityList) -> Grade {
    if grade.is_good() && forbidden.contains(ALL_FORBIDDEN) {
        Grade::Inauspicious
    } else {
        grade
    }
}
