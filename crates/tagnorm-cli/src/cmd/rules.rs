// crates/tagnorm-cli/src/cmd/rules.rs

use clap::{Args, ValueEnum};
use tagnorm_core::profile::presets;
use tagnorm_core::{InvalidUtf8, RuleProfile};
use tracing::info;

use crate::io::profile_file;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Preset {
    Corrected,
    Legacy,
    Strict,
}

impl Preset {
    pub fn profile(self) -> RuleProfile {
        match self {
            Preset::Corrected => presets::corrected(),
            Preset::Legacy => presets::legacy(),
            Preset::Strict => presets::strict(),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Utf8Policy {
    Drop,
    Replace,
}

impl From<Utf8Policy> for InvalidUtf8 {
    fn from(p: Utf8Policy) -> Self {
        match p {
            Utf8Policy::Drop => InvalidUtf8::Drop,
            Utf8Policy::Replace => InvalidUtf8::Replace,
        }
    }
}

/// Rule selection shared by every command that normalizes.
#[derive(Args, Debug)]
pub struct RuleArgs {
    /// Built-in rule set
    #[arg(long, value_enum, default_value_t = Preset::Corrected)]
    pub preset: Preset,

    /// Rule profile (.tnp); takes precedence over --preset
    #[arg(long)]
    pub profile: Option<String>,

    /// Override the profile's handling of ill-formed UTF-8 input
    #[arg(long, value_enum)]
    pub invalid_utf8: Option<Utf8Policy>,
}

impl RuleArgs {
    pub fn resolve(&self) -> anyhow::Result<RuleProfile> {
        let mut p = match &self.profile {
            Some(path) => {
                let p = profile_file::load_tnp(path)?;
                info!(path = path.as_str(), name = p.name.as_str(), "loaded profile");
                p
            }
            None => self.preset.profile(),
        };
        if let Some(policy) = self.invalid_utf8 {
            p.invalid_utf8 = policy.into();
        }
        Ok(p)
    }
}
