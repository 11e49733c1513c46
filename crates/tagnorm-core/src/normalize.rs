// crates/tagnorm-core/src/normalize.rs
//
// Tag normalization.
//
// Rules, applied in order (each step sees the output of the previous one):
// 1. Replace every character of the disallowed set with `_`.
// 2. Collapse runs of `_` into a single `_`.
// 3. Collapse `_*._*` into `.`.
// 4. Strip leading and trailing `_` (periods are kept).
//
// Characters in neither the disallowed set nor the tag alphabet pass through
// untouched, so `LEGACY`/`CORRECTED` output may still hold e.g. `#` or `é`.

use crate::charset::DisallowedSet;
use crate::decode::{decode_lossy, InvalidUtf8};
use crate::tag::Tag;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Normalizer {
    pub disallowed: DisallowedSet,
    pub invalid_utf8: InvalidUtf8,
}

impl Normalizer {
    pub const fn new(disallowed: DisallowedSet) -> Self {
        Self {
            disallowed,
            invalid_utf8: InvalidUtf8::Drop,
        }
    }

    pub const fn corrected() -> Self {
        Self::new(DisallowedSet::CORRECTED)
    }

    pub const fn legacy() -> Self {
        Self::new(DisallowedSet::LEGACY)
    }

    pub const fn strict() -> Self {
        Self::new(DisallowedSet::STRICT)
    }

    pub const fn with_invalid_utf8(self, invalid_utf8: InvalidUtf8) -> Self {
        Self {
            disallowed: self.disallowed,
            invalid_utf8,
        }
    }

    pub fn normalize(&self, raw: &str) -> String {
        let s = substitute(raw, &self.disallowed);
        let s = collapse_underscores(&s);
        let s = squeeze_dot_underscores(&s);
        s.trim_matches('_').to_owned()
    }

    /// Decode with `self.invalid_utf8`, then normalize.
    pub fn normalize_bytes(&self, raw: &[u8]) -> String {
        self.normalize(&decode_lossy(raw, self.invalid_utf8))
    }

    pub fn tag(&self, raw: &str) -> Tag {
        Tag::from_normalized(self.normalize(raw))
    }

    pub fn tag_bytes(&self, raw: &[u8]) -> Tag {
        Tag::from_normalized(self.normalize_bytes(raw))
    }
}

/// Normalize with the corrected rules (minus and slash preserved).
pub fn normalize_tag(raw: &str) -> String {
    Normalizer::corrected().normalize(raw)
}

/// Normalization applied to the `instance:` tag of a check.
pub fn normalize_instance_tag(raw: &str) -> String {
    normalize_tag(raw)
}

/// Historical behavior, kept for regression comparison.
pub fn normalize_tag_legacy(raw: &str) -> String {
    Normalizer::legacy().normalize(raw)
}

fn substitute(s: &str, set: &DisallowedSet) -> String {
    s.chars().map(|c| if set.contains(c) { '_' } else { c }).collect()
}

fn collapse_underscores(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_underscore = false;
    for c in s.chars() {
        if c == '_' {
            if !prev_underscore {
                out.push(c);
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }
    out
}

fn squeeze_dot_underscores(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut after_dot = false;
    for c in s.chars() {
        match c {
            '.' => {
                while out.ends_with('_') {
                    out.pop();
                }
                out.push('.');
                after_dot = true;
            }
            '_' if after_dot => {}
            _ => {
                out.push(c);
                after_dot = false;
            }
        }
    }
    out
}
