// ABOUTME: Set value normalization shared by every content-editing screen
// ABOUTME: Intensity clamps to "<1-10>/10"; reps resolve to "<n>" or "<n>-<m>"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachforge

//! Input normalization for set values.
//!
//! Intensity is always stored as `"<n>/10"` with `n` in `[1, 10]`; reps are
//! stored as `"<n>"` or `"<n>-<m>"`. [`format_reps_value`] is the keystroke
//! filter (a trailing `-` is tolerated while typing); [`commit_reps`] resolves
//! the transient form on blur/save.

use crate::constants::limits::{INTENSITY_MAX, INTENSITY_MIN, INTENSITY_SUFFIX};
use regex::Regex;
use std::sync::LazyLock;

static STORED_REPS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(-\d+)?$").unwrap_or_else(|_| unreachable!("static pattern"))
});

static STORED_INTENSITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(10|[1-9])/10$").unwrap_or_else(|_| unreachable!("static pattern"))
});

/// Normalize raw intensity input to its stored form.
///
/// Keeps digits only, clamps to `[1, 10]`, and appends the `/10` suffix.
/// Input without any digit yields `None` (stored as absent).
#[must_use]
pub fn normalize_intensity(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let value = digits
        .parse::<u64>()
        .unwrap_or(u64::from(INTENSITY_MAX))
        .clamp(u64::from(INTENSITY_MIN), u64::from(INTENSITY_MAX));
    Some(format!("{value}{INTENSITY_SUFFIX}"))
}

/// Strip the `/10` suffix for display
#[must_use]
pub fn intensity_display(stored: &str) -> &str {
    stored.strip_suffix(INTENSITY_SUFFIX).unwrap_or(stored)
}

/// Whether a string is a valid stored intensity (`"<1-10>/10"`)
#[must_use]
pub fn is_stored_intensity(value: &str) -> bool {
    STORED_INTENSITY_RE.is_match(value)
}

/// Filter raw reps input down to the tolerated typing form.
///
/// Characters outside `[0-9-]` are stripped, runs of `-` collapse to one, a
/// leading `-` is dropped, and anything after the second number is discarded.
/// A trailing `-` survives (the user may still be typing the second number).
/// The function is idempotent and always returns `""` or a string matching
/// `^\d+(-\d+)?-?$`.
#[must_use]
pub fn format_reps_value(raw: &str) -> String {
    let mut out = String::new();
    let mut saw_dash = false;
    let mut in_second_number = false;

    for c in raw.chars() {
        match c {
            '0'..='9' => {
                if saw_dash {
                    in_second_number = true;
                }
                out.push(c);
            }
            '-' => {
                if out.is_empty() {
                    // leading dash
                    continue;
                }
                if in_second_number {
                    // a dash after the second number starts a discarded segment
                    break;
                }
                if !saw_dash {
                    saw_dash = true;
                    out.push('-');
                }
                // consecutive dashes collapse to the one already pushed
            }
            _ => {}
        }
    }

    out
}

/// Resolve reps input on commit: drop a dangling trailing `-`, map empty to `None`
#[must_use]
pub fn commit_reps(raw: &str) -> Option<String> {
    let formatted = format_reps_value(raw);
    let resolved = formatted.strip_suffix('-').unwrap_or(&formatted);
    if resolved.is_empty() {
        None
    } else {
        Some(resolved.to_owned())
    }
}

/// Whether a string is a valid stored reps value (`"<n>"` or `"<n>-<m>"`)
#[must_use]
pub fn is_stored_reps(value: &str) -> bool {
    STORED_REPS_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_intensity_clamps_and_suffixes() {
        assert_eq!(normalize_intensity("7").as_deref(), Some("7/10"));
        assert_eq!(normalize_intensity("0").as_deref(), Some("1/10"));
        assert_eq!(normalize_intensity("15").as_deref(), Some("10/10"));
        assert_eq!(
            normalize_intensity("999999999999999999999").as_deref(),
            Some("10/10")
        );
        assert_eq!(normalize_intensity("rpe 8").as_deref(), Some("8/10"));
        assert_eq!(normalize_intensity(""), None);
        assert_eq!(normalize_intensity("--"), None);
    }

    #[test]
    fn test_intensity_display_round_trip() {
        // Display of a re-stored display value must equal the original display
        for n in 1..=10u8 {
            let stored = format!("{n}/10");
            let display = intensity_display(&stored);
            let restored = normalize_intensity(display).unwrap();
            assert_eq!(intensity_display(&restored), display);
        }
    }

    #[test]
    fn test_stored_intensity_bounds() {
        assert!(is_stored_intensity("1/10"));
        assert!(is_stored_intensity("10/10"));
        assert!(!is_stored_intensity("0/10"));
        assert!(!is_stored_intensity("11/10"));
        assert!(!is_stored_intensity("7"));
        assert!(!is_stored_intensity("7/10 "));
    }

    #[test]
    fn test_format_reps_filters_and_collapses() {
        assert_eq!(format_reps_value("8-12"), "8-12");
        assert_eq!(format_reps_value("--8--12--5"), "8-12");
        assert_eq!(format_reps_value("-5"), "5");
        assert_eq!(format_reps_value("a1b2-c3"), "12-3");
        assert_eq!(format_reps_value("8-12-15"), "8-12");
        assert_eq!(format_reps_value("10-"), "10-");
        assert_eq!(format_reps_value("abc"), "");
        assert_eq!(format_reps_value(""), "");
    }

    #[test]
    fn test_format_reps_closure_and_idempotence() {
        let closure = Regex::new(r"^\d+(-\d+)?-?$").unwrap();
        let inputs = [
            "", "abc", "-", "--", "10", "10-", "10--", "8-12", "8--12", "-8-12-", "8-12-15-20",
            "1a2b3c", " 5 x 5 ", "3-", "0-0",
        ];
        for input in inputs {
            let once = format_reps_value(input);
            assert!(
                once.is_empty() || closure.is_match(&once),
                "closure violated for {input:?} -> {once:?}"
            );
            assert_eq!(format_reps_value(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_commit_reps_resolves_trailing_dash() {
        assert_eq!(commit_reps("10-").as_deref(), Some("10"));
        assert_eq!(commit_reps("8-12").as_deref(), Some("8-12"));
        assert_eq!(commit_reps("-"), None);
        assert_eq!(commit_reps(""), None);
        for value in [commit_reps("10-"), commit_reps("8--12")].into_iter().flatten() {
            assert!(is_stored_reps(&value));
        }
    }
}
