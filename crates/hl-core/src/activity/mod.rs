//! Recommended (宜) and forbidden (忌) activity lists.
//!
//! Raw lists come from an [`ActivitySource`]; [`finalize`] then turns them
//! into the de-duplicated, conflict-free pair every later stage works on.

pub mod list;
pub mod source;

pub use list::{ActivityList, finalize, normalize};
pub use source::{ActivitySource, DirectLists, OfficerCategories, RawLists, resolve_raw_lists, source_for};

/// The "all activities forbidden" list entry.
pub const ALL_FORBIDDEN: &str = "诸事不宜";
