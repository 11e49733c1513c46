// crates/tagnorm-cli/src/cmd/compare.rs
//
// Side-by-side table of the historical and the fixed normalization.

use clap::Args;
use tagnorm_core::decode::decode_lossy;
use tagnorm_core::{InvalidUtf8, Normalizer};

use crate::io::tag_file::InputArgs;

/// Inputs used when none are given: the cases from the instance-tag bug report.
pub const SAMPLES: &[&str] = &[
    "my-service-name",
    "test_with_underscores",
    "test.with.dots",
    "test:with:colons",
    "test/with/slashes",
    "test with spaces",
    "test,with,commas",
    "test+with+plus",
    "test*with*asterisk",
    "test(with)parentheses",
    "test[with]brackets",
    "test{with}braces",
    "_need-to__be_normalized-",
];

const MAX_WIDTH: i64 = 200;

#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Column width
    #[arg(long, default_value_t = 25, value_parser = clap::value_parser!(u16).range(1..=MAX_WIDTH))]
    pub width: u16,
}

pub struct Row {
    pub input: String,
    pub legacy: String,
    pub corrected: String,
}

impl Row {
    /// Output changed and the input holds a character the legacy rules mangled.
    pub fn fixed(&self) -> bool {
        self.legacy != self.corrected && self.input.contains(['-', '/'])
    }
}

pub fn rows(inputs: &[String]) -> Vec<Row> {
    let (old, new) = (Normalizer::legacy(), Normalizer::corrected());
    inputs
        .iter()
        .map(|s| Row {
            input: s.clone(),
            legacy: old.normalize(s),
            corrected: new.normalize(s),
        })
        .collect()
}

pub fn run(args: CompareArgs) -> anyhow::Result<()> {
    let inputs: Vec<String> = match args.input.collect()? {
        Some(rows) => rows
            .iter()
            .map(|r| decode_lossy(r, InvalidUtf8::Drop).into_owned())
            .collect(),
        None => SAMPLES.iter().map(|s| s.to_string()).collect(),
    };

    let w = usize::from(args.width);
    println!("{:<w$} {:<w$} {:<w$} fixed", "input", "legacy", "corrected");
    println!("{}", "-".repeat(w.saturating_mul(3).saturating_add(8)));

    let rows = rows(&inputs);
    for r in &rows {
        let mark = if r.fixed() { "yes" } else { "" };
        println!("{:<w$} {:<w$} {:<w$} {}", r.input, r.legacy, r.corrected, mark);
    }

    let fixed = rows.iter().filter(|r| r.fixed()).count();
    println!();
    println!("rows  = {}", rows.len());
    println!("fixed = {}", fixed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_flag_minus_and_slash_rows() {
        let inputs: Vec<String> = SAMPLES.iter().map(|s| s.to_string()).collect();
        let fixed: Vec<String> = rows(&inputs).into_iter().filter(Row::fixed).map(|r| r.input).collect();
        assert_eq!(fixed, vec!["my-service-name", "test/with/slashes", "_need-to__be_normalized-"]);
    }
}
