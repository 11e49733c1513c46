// crates/tagnorm-core/src/audit.rs
//
// Checks a normalizer's output against the properties every normalized tag
// must satisfy. Used by the `audit` command and by the property tests.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::charset::DisallowedSet;
use crate::normalize::Normalizer;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("disallowed character {ch:?} at byte {at}")]
    DisallowedChar { ch: char, at: usize },

    #[error("underscore run at byte {at}")]
    UnderscoreRun { at: usize },

    #[error("underscore next to period at byte {at}")]
    UnderscoreNextToDot { at: usize },

    #[error("leading underscore")]
    LeadingUnderscore,

    #[error("trailing underscore")]
    TrailingUnderscore,

    #[error("allowed character {ch:?} changed count: {before} -> {after}")]
    CharNotPreserved { ch: char, before: usize, after: usize },

    #[error("not idempotent: {first:?} -> {second:?}")]
    NotIdempotent { first: String, second: String },
}

#[derive(Clone, Debug)]
pub struct Report {
    pub input: String,
    pub output: String,
    pub violations: Vec<Violation>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Structural checks on an already-normalized value.
pub fn audit_output(output: &str, set: &DisallowedSet) -> Vec<Violation> {
    let mut v = Vec::new();

    for (at, ch) in output.char_indices() {
        if set.contains(ch) && ch != '_' {
            v.push(Violation::DisallowedChar { ch, at });
        }
    }

    let bytes = output.as_bytes();
    for (at, pair) in bytes.windows(2).enumerate() {
        match pair {
            [b'_', b'_'] => v.push(Violation::UnderscoreRun { at }),
            [b'_', b'.'] | [b'.', b'_'] => v.push(Violation::UnderscoreNextToDot { at }),
            _ => {}
        }
    }

    if output.starts_with('_') {
        v.push(Violation::LeadingUnderscore);
    }
    if output.ends_with('_') {
        v.push(Violation::TrailingUnderscore);
    }
    v
}

/// Every character that is neither disallowed nor `_` must keep its count.
pub fn check_preserved(input: &str, output: &str, set: &DisallowedSet) -> Vec<Violation> {
    let before = kept_counts(input, set);
    let after = kept_counts(output, set);

    let mut v = Vec::new();
    for (&ch, &n) in &before {
        let m = after.get(&ch).copied().unwrap_or(0);
        if n != m {
            v.push(Violation::CharNotPreserved { ch, before: n, after: m });
        }
    }
    for (&ch, &m) in &after {
        if !before.contains_key(&ch) {
            v.push(Violation::CharNotPreserved { ch, before: 0, after: m });
        }
    }
    v
}

pub fn check_idempotent(n: &Normalizer, output: &str) -> Option<Violation> {
    let second = n.normalize(output);
    if second == output {
        None
    } else {
        Some(Violation::NotIdempotent {
            first: output.to_owned(),
            second,
        })
    }
}

/// Normalize `input` and run every check on the result.
pub fn audit(n: &Normalizer, input: &str) -> Report {
    audit_against(n, input, &n.disallowed)
}

/// Like `audit`, but judge the output by `expected` instead of the set the
/// normalizer ran with. Auditing legacy output against `CORRECTED` reports
/// every rewritten minus and slash.
pub fn audit_against(n: &Normalizer, input: &str, expected: &DisallowedSet) -> Report {
    let output = n.normalize(input);
    let mut violations = audit_output(&output, expected);
    violations.extend(check_preserved(input, &output, expected));
    violations.extend(check_idempotent(n, &output));
    Report {
        input: input.to_owned(),
        output,
        violations,
    }
}

fn kept_counts(s: &str, set: &DisallowedSet) -> BTreeMap<char, usize> {
    let mut m = BTreeMap::new();
    for c in s.chars().filter(|&c| c != '_' && !set.contains(c)) {
        *m.entry(c).or_insert(0) += 1;
    }
    m
}
