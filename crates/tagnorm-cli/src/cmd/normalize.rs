// crates/tagnorm-cli/src/cmd/normalize.rs

use clap::Args;
use tracing::debug;

use crate::cmd::rules::RuleArgs;
use crate::io::tag_file::InputArgs;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub rules: RuleArgs,

    /// Prefix every output with `KEY:` (e.g. --key instance)
    #[arg(long)]
    pub key: Option<String>,

    /// Print `input<TAB>output` instead of the bare output
    #[arg(long, default_value_t = false)]
    pub tsv: bool,
}

pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    let n = args.rules.resolve()?.normalizer();
    let rows = args.input.collect()?.unwrap_or_default();
    if rows.is_empty() {
        debug!("no input rows");
    }

    for raw in &rows {
        let tag = n.tag_bytes(raw);
        let out = match &args.key {
            Some(k) => tag.with_key(k),
            None => tag.into(),
        };
        if args.tsv {
            println!("{}\t{}", String::from_utf8_lossy(raw), out);
        } else {
            println!("{out}");
        }
    }
    Ok(())
}
