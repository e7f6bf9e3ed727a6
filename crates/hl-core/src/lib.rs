//! Huangli day-conclusion engine.
//!
//! Takes an almanac snapshot for a single date (officer, day-god, activity
//! level, solar terms, raw 宜/忌 lists) and produces a six-level grade, a
//! de-conflicted pair of activity lists, and a narrative built from fixed
//! per-grade templates. The lunar calendar itself is not computed here:
//! callers supply an [`AlmanacSnapshot`] they obtained elsewhere.

/// Raw 宜/忌 sources and the order-preserving conflict resolver.
pub mod activity;
/// The almanac snapshot consumed by every rule.
pub mod almanac;
/// Officer → category tables used when the snapshot carries no direct lists.
pub mod catalog;
/// Single-date façade composing all rules into a conclusion.
pub mod conclusion;
/// Rendering options.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Six-level grade and the polarity shift tables.
pub mod grade;
/// Activity-level normalization.
pub mod level;
/// Template selection and sentence filling.
pub mod render;
/// Officer and day-god vocabularies.
pub mod spirit;
/// Hard-taboo detection.
pub mod taboo;

/// Re-export activity types.
pub use activity::{ALL_FORBIDDEN, ActivityList, RawLists, finalize, normalize, resolve_raw_lists};
/// Re-export the snapshot types.
pub use almanac::{AlmanacSnapshot, MonthDay};
/// Re-export the category catalog.
pub use catalog::Catalog;
/// Re-export the façade.
pub use conclusion::{
    ConclusionRenderer, DayConclusion, render_conclusion, render_dated, render_structured,
};
/// Re-export configuration.
pub use config::RenderConfig;
/// Re-export error types.
pub use error::{HlError, HlResult};
/// Re-export grading.
pub use grade::{Grade, apply_global_forbidden, grade_day};
/// Re-export tier resolution.
pub use level::{Tier, resolve_tier};
/// Re-export rendering.
pub use render::{render, render_text, template_for};
/// Re-export spirit vocabularies.
pub use spirit::{DayGod, Officer, Polarity};
/// Re-export taboo detection.
pub use taboo::{HardTaboo, detect_hard_taboo, is_hard_taboo};
