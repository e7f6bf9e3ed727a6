//! Narrative rendering.
//!
//! A grade template has three slots: `{label}`, `{ji}` (the forbidden
//! sentence) and `{yi}` (the recommended sentence). Each sentence comes from
//! the grade's pattern pair, except when 诸事不宜 appears in a list: the
//! marker is stripped and the sentence is replaced by a fixed one.

pub mod templates;

pub use templates::{GradePatterns, SentencePattern, patterns_for, template_for};

use crate::activity::{ALL_FORBIDDEN, ActivityList, finalize};
use crate::config::RenderConfig;
use crate::grade::Grade;
use templates::{GLOBAL_FORBIDDEN_SENTENCE, GLOBAL_RECOMMENDED_SENTENCE};

/// Fill `template` for one day.
///
/// The lists are finalized again before use, so callers may pass raw lists.
pub fn render(
    template: &str,
    label: &str,
    recommended: &ActivityList,
    forbidden: &ActivityList,
    grade: Grade,
    config: &RenderConfig,
) -> String {
    let (recommended, forbidden) = finalize(recommended, forbidden);
    let patterns = patterns_for(grade);

    let ji = if forbidden.contains(ALL_FORBIDDEN) {
        GLOBAL_FORBIDDEN_SENTENCE.to_string()
    } else {
        sentence(&patterns.forbidden, &forbidden, &config.separator)
    };
    let yi = if recommended.contains(ALL_FORBIDDEN) {
        GLOBAL_RECOMMENDED_SENTENCE.to_string()
    } else {
        sentence(&patterns.recommended, &recommended, &config.separator)
    };

    fill(
        template,
        &[("label", label), ("ji", ji.as_str()), ("yi", yi.as_str())],
    )
}

/// [`render`] with the grade's own template and the default config.
pub fn render_text(
    label: &str,
    recommended: &ActivityList,
    forbidden: &ActivityList,
    grade: Grade,
) -> String {
    render(
        template_for(grade),
        label,
        recommended,
        forbidden,
        grade,
        &RenderConfig::default(),
    )
}

/// Build one sentence from a pattern, ignoring the 诸事不宜 marker.
fn sentence(pattern: &SentencePattern, items: &ActivityList, separator: &str) -> String {
    let items = items.without(ALL_FORBIDDEN);
    if items.is_empty() {
        pattern.empty.to_string()
    } else {
        let joined = items.join(separator);
        fill(pattern.filled, &[("items", joined.as_str())])
    }
}

/// Replace `{key}` placeholders in a single pass. Unknown placeholders and
/// stray braces are copied through unchanged.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
