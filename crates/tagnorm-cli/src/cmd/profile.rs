// crates/tagnorm-cli/src/cmd/profile.rs

use clap::{Args, Subcommand};
use tagnorm_core::profile::format as profile_format;
use tracing::info;

use crate::cmd::rules::{Preset, Utf8Policy};
use crate::io::profile_file;

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub cmd: ProfileCmd,
}

#[derive(Subcommand)]
pub enum ProfileCmd {
    /// Write a preset as a .tnp profile
    Write(WriteArgs),

    /// Print profile fields and its id
    Inspect(InspectArgs),
}

#[derive(Args)]
pub struct WriteArgs {
    #[arg(long, value_enum)]
    pub preset: Preset,

    /// Output path (.tnp)
    #[arg(long)]
    pub out: String,

    /// Profile name (defaults to the preset name)
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, value_enum)]
    pub invalid_utf8: Option<Utf8Policy>,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Profile path (.tnp)
    #[arg(long)]
    pub profile: String,
}

pub fn run(args: ProfileArgs) -> anyhow::Result<()> {
    match args.cmd {
        ProfileCmd::Write(a) => cmd_write(a),
        ProfileCmd::Inspect(a) => cmd_inspect(a),
    }
}

fn cmd_write(a: WriteArgs) -> anyhow::Result<()> {
    let mut p = a.preset.profile();
    if let Some(name) = a.name {
        p.name = name;
    }
    if let Some(policy) = a.invalid_utf8 {
        p.invalid_utf8 = policy.into();
    }
    profile_file::save_tnp(&a.out, &p)?;
    info!(out = a.out.as_str(), id = %profile_format::profile_id_hex(&p), "profile written");
    Ok(())
}

fn cmd_inspect(a: InspectArgs) -> anyhow::Result<()> {
    let p = profile_file::load_tnp(&a.profile)?;

    println!("profile_path  = {}", a.profile);
    println!("profile_id    = {}", profile_format::profile_id_hex(&p));
    println!("version       = {}", p.version);
    println!("name          = {}", p.name);
    println!("invalid_utf8  = {}", p.invalid_utf8.as_str());
    println!("disallowed    = {}", p.disallowed.describe());

    let keeps_minus = !p.disallowed.contains('-');
    let keeps_slash = !p.disallowed.contains('/');
    println!("keeps_minus   = {}", keeps_minus);
    println!("keeps_slash   = {}", keeps_slash);

    if !keeps_minus || !keeps_slash {
        println!();
        println!("WARN: profile rewrites valid tag characters (legacy behavior).");
    }
    Ok(())
}
