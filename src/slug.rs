//! Convert arbitrary country names to valid CSS/DOM identifiers.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
// ASCII word characters only, so accented letters drop out instead of
// leaking into element ids.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_\-]+").unwrap());
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Normalize a display name into a slug usable as an element id.
///
/// Lowercase, whitespace runs become a single `-`, anything that is not a
/// word character or hyphen is stripped, hyphen runs collapse, and leading or
/// trailing hyphens are trimmed. Deterministic and idempotent; distinct
/// country names in the dataset are expected not to collide (unchecked).
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lower, "-");
    let stripped = NON_WORD.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}
