// crates/tagnorm-core/src/profile/presets.rs

use crate::charset::DisallowedSet;
use crate::profile::RuleProfile;

pub fn corrected() -> RuleProfile {
    RuleProfile::new("corrected", DisallowedSet::CORRECTED)
}

/// Rewrites `-` and `/`; only useful to reproduce the historical output.
pub fn legacy() -> RuleProfile {
    RuleProfile::new("legacy", DisallowedSet::LEGACY)
}

pub fn strict() -> RuleProfile {
    RuleProfile::new("strict", DisallowedSet::STRICT)
}
