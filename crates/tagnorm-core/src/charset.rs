// crates/tagnorm-core/src/charset.rs
//
// Disallowed character sets.
//
// A set is a 128-bit bitmap over ASCII plus one flag covering every non-ASCII
// scalar value. Legacy and corrected normalization differ only in which set is
// plugged into the normalizer.

use crate::error::{Result, TagError};

/// ASCII whitespace as matched by a byte-level `\s`.
pub const ASCII_WHITESPACE: &[u8] = b" \t\n\x0B\x0C\r";

/// Punctuation allowed in a tag next to alphanumerics.
pub const TAG_PUNCTUATION: &[u8] = b"_-:./";

const fn mask_of(bytes: &[u8]) -> u128 {
    let mut m = 0u128;
    let mut i = 0usize;
    while i < bytes.len() {
        m |= 1u128 << bytes[i];
        i += 1;
    }
    m
}

const fn mask_range(lo: u8, hi: u8) -> u128 {
    let mut m = 0u128;
    let mut b = lo;
    while b <= hi {
        m |= 1u128 << b;
        b += 1;
    }
    m
}

const TAG_ALPHABET: u128 =
    mask_range(b'0', b'9') | mask_range(b'a', b'z') | mask_range(b'A', b'Z') | mask_of(TAG_PUNCTUATION);

/// Returns true for characters a normalized tag may contain.
pub fn is_tag_char(c: char) -> bool {
    c.is_ascii() && TAG_ALPHABET & (1u128 << (c as u32)) != 0
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DisallowedSet {
    ascii: u128,
    non_ascii: bool,
}

impl DisallowedSet {
    /// Historical rule set: also rewrites `-` and `/`, which are valid tag characters.
    pub const LEGACY: Self = Self {
        ascii: mask_of(b",+*-/()[]{}") | mask_of(ASCII_WHITESPACE),
        non_ascii: false,
    };

    /// Fixed rule set: minus and slash are preserved.
    pub const CORRECTED: Self = Self {
        ascii: mask_of(b",+*()[]{}") | mask_of(ASCII_WHITESPACE),
        non_ascii: false,
    };

    /// Everything outside the tag alphabet, including all non-ASCII characters.
    pub const STRICT: Self = Self {
        ascii: !TAG_ALPHABET,
        non_ascii: true,
    };

    /// Build a set from explicit ASCII characters.
    pub fn from_chars<I>(chars: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut ascii = 0u128;
        for c in chars {
            if !c.is_ascii() {
                return Err(TagError::CharSet(format!("non-ascii character {c:?}")));
            }
            ascii |= 1u128 << (c as u32);
        }
        Ok(Self { ascii, non_ascii: false })
    }

    pub const fn from_bits(ascii: u128, non_ascii: bool) -> Self {
        Self { ascii, non_ascii }
    }

    pub const fn ascii_bits(&self) -> u128 {
        self.ascii
    }

    pub const fn covers_non_ascii(&self) -> bool {
        self.non_ascii
    }

    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii & (1u128 << (c as u32)) != 0
        } else {
            self.non_ascii
        }
    }

    /// ASCII members in ascending byte order.
    pub fn ascii_members(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..128).filter(move |&b| self.ascii & (1u128 << b) != 0)
    }

    /// Human readable listing, e.g. `, + * ( ) [ ] { } \s` (whitespace escaped).
    pub fn describe(&self) -> String {
        let ws = mask_of(ASCII_WHITESPACE);
        let mut parts: Vec<String> = Vec::new();
        let mut other_ctrl = 0usize;
        for b in self.ascii_members() {
            if ws & (1u128 << b) != 0 {
                continue;
            }
            if b.is_ascii_graphic() {
                parts.push((b as char).to_string());
            } else {
                other_ctrl += 1;
            }
        }
        if self.ascii & ws == ws {
            parts.push("\\s".into());
        } else {
            for &b in ASCII_WHITESPACE {
                if self.ascii & (1u128 << b) != 0 {
                    parts.push(b.escape_ascii().to_string());
                }
            }
        }
        if other_ctrl > 0 {
            parts.push(format!("<{other_ctrl} control>"));
        }
        if self.non_ascii {
            parts.push("<non-ascii>".into());
        }
        parts.join(" ")
    }
}

impl Default for DisallowedSet {
    fn default() -> Self {
        Self::CORRECTED
    }
}
