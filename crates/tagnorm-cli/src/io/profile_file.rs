// crates/tagnorm-cli/src/io/profile_file.rs

use anyhow::{Context, Result};
use tagnorm_core::profile;
use tagnorm_core::RuleProfile;

/// Load a .tnp profile file.
pub fn load_tnp(path: &str) -> Result<RuleProfile> {
    profile::load(path).with_context(|| format!("decode profile {path}"))
}

pub fn save_tnp(path: &str, p: &RuleProfile) -> Result<()> {
    profile::save(path, p).with_context(|| format!("write profile {path}"))
}
