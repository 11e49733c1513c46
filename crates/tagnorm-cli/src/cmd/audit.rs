// crates/tagnorm-cli/src/cmd/audit.rs

use clap::Args;
use tagnorm_core::audit::audit_against;
use tagnorm_core::decode::decode_lossy;
use tracing::warn;

use crate::cmd::compare::SAMPLES;
use crate::cmd::rules::{Preset, RuleArgs};
use crate::io::tag_file::InputArgs;

#[derive(Args, Debug)]
pub struct AuditArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub rules: RuleArgs,

    /// Judge outputs by this rule set instead of the one used to normalize
    #[arg(long, value_enum)]
    pub expect: Option<Preset>,
}

pub fn run(args: AuditArgs) -> anyhow::Result<()> {
    let profile = args.rules.resolve()?;
    let n = profile.normalizer();
    let expected = match args.expect {
        Some(p) => p.profile().disallowed,
        None => profile.disallowed,
    };

    let inputs: Vec<String> = match args.input.collect()? {
        Some(rows) => rows
            .iter()
            .map(|r| decode_lossy(r, profile.invalid_utf8).into_owned())
            .collect(),
        None => SAMPLES.iter().map(|s| s.to_string()).collect(),
    };

    let mut failed = 0usize;
    for s in &inputs {
        let r = audit_against(&n, s, &expected);
        if r.is_clean() {
            println!("ok    {:?} -> {:?}", r.input, r.output);
            continue;
        }
        failed += 1;
        println!("FAIL  {:?} -> {:?}", r.input, r.output);
        for v in &r.violations {
            println!("      - {v}");
        }
    }

    println!();
    println!("profile = {}", profile.name);
    println!("checked = {}", inputs.len());
    println!("failed  = {}", failed);

    if failed > 0 {
        warn!(failed, "normalized tags violate invariants");
        anyhow::bail!("{failed} of {} inputs violated tag invariants", inputs.len());
    }
    Ok(())
}
