//! slug.rs - Term slug normalization.
//!
//! Approximates WordPress `sanitize_title` for the values found in product
//! exports: lowercase, drop ampersands, collapse everything that is not
//! `[a-z0-9-]` into single hyphens and trim hyphens from both ends.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any character outside the slug alphabet.
    static ref DISALLOWED_CHARS: Regex = Regex::new(r"[^a-z0-9\-]").unwrap();
    /// Runs of consecutive hyphens.
    static ref HYPHEN_RUNS: Regex = Regex::new(r"-+").unwrap();
}

/// Normalizes a raw attribute value into a term slug.
///
/// Only the literal sequences `&amp;` and `&` are removed; no other entity
/// decoding happens. The function is total and idempotent. An input made only
/// of separators yields an empty string, which callers treat as "no term".
///
/// ```rust
/// use boostrules_core::sanitize_slug;
///
/// assert_eq!(sanitize_slug("Smith & Wesson"), "smith-wesson");
/// assert_eq!(sanitize_slug("9mm / .45 ACP"), "9mm-45-acp");
/// assert_eq!(sanitize_slug("---"), "");
/// ```
pub fn sanitize_slug(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let without_amp = lowered.replace("&amp;", "").replace('&', "");
    let hyphenated = DISALLOWED_CHARS.replace_all(&without_amp, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ampersand_is_dropped_not_hyphenated() {
        assert_eq!(sanitize_slug("Smith & Wesson"), "smith-wesson");
        assert_eq!(sanitize_slug("Smith &amp; Wesson"), "smith-wesson");
        assert_eq!(sanitize_slug("A&B"), "ab");
    }

    #[test]
    fn punctuation_runs_collapse() {
        assert_eq!(sanitize_slug("9mm / .45 ACP"), "9mm-45-acp");
        assert_eq!(sanitize_slug("  12 Gauge  "), "12-gauge");
        assert_eq!(sanitize_slug(".223 Rem/5.56 NATO"), "223-rem-5-56-nato");
    }

    #[test]
    fn separator_only_input_is_empty() {
        assert_eq!(sanitize_slug("---"), "");
        assert_eq!(sanitize_slug("&"), "");
        assert_eq!(sanitize_slug(" / "), "");
        assert_eq!(sanitize_slug(""), "");
    }

    #[test]
    fn alphanumerics_pass_through() {
        assert_eq!(sanitize_slug("ABC123"), "abc123");
        assert_eq!(sanitize_slug("9"), "9");
        assert_eq!(sanitize_slug("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(sanitize_slug("Béretta"), "b-retta");
        assert_eq!(sanitize_slug("Ruger™"), "ruger");
    }

    proptest! {
        #[test]
        fn slug_is_idempotent(raw in "\\PC{0,40}") {
            let once = sanitize_slug(&raw);
            prop_assert_eq!(sanitize_slug(&once), once.clone());
        }

        #[test]
        fn slug_uses_only_slug_alphabet(raw in "\\PC{0,40}") {
            let slug = sanitize_slug(&raw);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }
    }
}
