// crates/tagnorm-cli/src/io/tag_file.rs
//
// Newline-separated tag lists. Lines stay raw bytes so the profile's
// invalid-utf8 policy decides what survives decoding. `.zst` inputs are
// decompressed first.

use std::fs::File;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Raw tags given on the command line
    pub tags: Vec<String>,

    /// Newline-separated tag file (zstd-compressed if it ends in .zst)
    #[arg(long)]
    pub r#in: Option<String>,
}

impl InputArgs {
    /// Command-line tags first, then file lines. `None` when neither was given.
    pub fn collect(&self) -> Result<Option<Vec<Vec<u8>>>> {
        if self.tags.is_empty() && self.r#in.is_none() {
            return Ok(None);
        }
        let mut rows: Vec<Vec<u8>> = self.tags.iter().map(|t| t.as_bytes().to_vec()).collect();
        if let Some(path) = &self.r#in {
            rows.extend(read_lines(path)?);
        }
        Ok(Some(rows))
    }
}

pub fn read_lines(path: &str) -> Result<Vec<Vec<u8>>> {
    let raw = if path.ends_with(".zst") {
        let f = File::open(path).with_context(|| format!("open {path}"))?;
        zstd::stream::decode_all(f).with_context(|| format!("zstd decode {path}"))?
    } else {
        std::fs::read(path).with_context(|| format!("read tags {path}"))?
    };

    let lines = split_lines(&normalize_newlines(&raw));
    if lines.is_empty() {
        debug!(path, "tag file has no rows");
    }
    Ok(lines)
}

/// CRLF and lone CR become LF.
fn normalize_newlines(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0usize;
    while i < input.len() {
        let b = input[i];
        if b == b'\r' {
            out.push(b'\n');
            i += if input.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
            continue;
        }
        out.push(b);
        i += 1;
    }
    out
}

/// A trailing newline does not produce an extra empty row.
fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n').map(<[u8]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_and_cr_split_like_lf() {
        let rows = split_lines(&normalize_newlines(b"a-b\r\nc d\re\n"));
        assert_eq!(rows, vec![b"a-b".to_vec(), b"c d".to_vec(), b"e".to_vec()]);
    }

    #[test]
    fn blank_lines_are_kept_as_empty_rows() {
        assert_eq!(split_lines(b"a\n\nb"), vec![b"a".to_vec(), Vec::new(), b"b".to_vec()]);
        assert!(split_lines(b"").is_empty());
        assert_eq!(split_lines(b"\n"), vec![Vec::<u8>::new()]);
    }
}
