// crates/tagnorm-core/src/profile/mod.rs
//
// A rule profile is everything that decides how tags get normalized: the
// disallowed set and the invalid-UTF-8 policy. Profiles persist as `.tnp`
// files (see `format`).

pub mod format;
pub mod presets;

use std::path::Path;

use crate::charset::DisallowedSet;
use crate::decode::InvalidUtf8;
use crate::error::Result;
use crate::normalize::Normalizer;

pub const PROFILE_VERSION: u16 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleProfile {
    pub version: u16,
    pub name: String,
    pub disallowed: DisallowedSet,
    pub invalid_utf8: InvalidUtf8,
}

impl RuleProfile {
    pub fn new(name: impl Into<String>, disallowed: DisallowedSet) -> Self {
        Self {
            version: PROFILE_VERSION,
            name: name.into(),
            disallowed,
            invalid_utf8: InvalidUtf8::Drop,
        }
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.disallowed).with_invalid_utf8(self.invalid_utf8)
    }
}

/// Read and decode a `.tnp` file.
pub fn load(path: impl AsRef<Path>) -> Result<RuleProfile> {
    let bytes = std::fs::read(path)?;
    format::decode(&bytes)
}

pub fn save(path: impl AsRef<Path>, profile: &RuleProfile) -> Result<()> {
    std::fs::write(path, format::encode(profile))?;
    Ok(())
}
