// crates/tagnorm-core/src/profile/format.rs

use crate::charset::DisallowedSet;
use crate::decode::InvalidUtf8;
use crate::error::{Result, TagError};
use crate::profile::{RuleProfile, PROFILE_VERSION};

const MAGIC: &[u8; 4] = b"TNP1";

const FLAG_NON_ASCII: u16 = 0x0001;
const KNOWN_LOW_FLAGS: u16 = FLAG_NON_ASCII;

/// Binary profile layout (little-endian):
/// MAGIC[4]
/// version:u16
/// flags:u16          bit0 = non-ascii disallowed, bits 8..15 = invalid_utf8 policy
/// ascii_table:u128   bit b set => ascii byte b is disallowed
/// name_len:u16
/// name:[name_len]    utf-8
/// crc32:u32          (over everything before crc32)
/// blake3_16:[16]     (over everything before blake3)
pub fn encode(p: &RuleProfile) -> Vec<u8> {
    let name = p.name.as_bytes();
    let name_len = name.len().min(u16::MAX as usize);

    let mut b = Vec::with_capacity(4 + 2 + 2 + 16 + 2 + name_len + 4 + 16);
    b.extend_from_slice(MAGIC);
    b.extend_from_slice(&p.version.to_le_bytes());
    b.extend_from_slice(&pack_flags(&p.disallowed, p.invalid_utf8).to_le_bytes());
    b.extend_from_slice(&p.disallowed.ascii_bits().to_le_bytes());

    // Names are short labels; truncate on a char boundary so decode stays valid.
    let mut cut = name_len;
    while !p.name.is_char_boundary(cut) {
        cut -= 1;
    }
    b.extend_from_slice(&(cut as u16).to_le_bytes());
    b.extend_from_slice(&name[..cut]);

    let c = crc32(&b);
    b.extend_from_slice(&c.to_le_bytes());

    let h = blake3_16(&b);
    b.extend_from_slice(&h);
    b
}

pub fn decode(bytes: &[u8]) -> Result<RuleProfile> {
    let mut i = 0usize;
    if bytes.len() < 4 || &bytes[0..4] != MAGIC {
        return Err(bad("bad magic"));
    }
    i += 4;

    let version = read_u16(bytes, &mut i)?;
    if version == 0 || version > PROFILE_VERSION {
        return Err(bad(format!("unsupported version {version}")));
    }

    let flags = read_u16(bytes, &mut i)?;
    let ascii = read_u128(bytes, &mut i)?;
    let (non_ascii, invalid_utf8) = unpack_flags(flags)?;

    let name_len = read_u16(bytes, &mut i)? as usize;
    need(bytes, i, name_len)?;
    let name = std::str::from_utf8(&bytes[i..i + name_len])
        .map_err(|_| bad("profile name is not utf-8"))?
        .to_owned();
    i += name_len;

    let crc_expected = read_u32(bytes, &mut i)?;
    if crc_expected != crc32(&bytes[0..(i - 4)]) {
        return Err(bad("crc32 mismatch"));
    }

    need(bytes, i, 16)?;
    if bytes[i..i + 16] != blake3_16(&bytes[0..i]) {
        return Err(bad("blake3 mismatch"));
    }
    if bytes.len() != i + 16 {
        return Err(bad("trailing bytes after trailer"));
    }

    Ok(RuleProfile {
        version,
        name,
        disallowed: DisallowedSet::from_bits(ascii, non_ascii),
        invalid_utf8,
    })
}

/// Stable profile identifier: the blake3_16 trailer that `encode()` appends.
pub fn profile_id_16(p: &RuleProfile) -> [u8; 16] {
    let enc = encode(p);
    let mut id = [0u8; 16];
    id.copy_from_slice(&enc[enc.len() - 16..]);
    id
}

pub fn profile_id_hex(p: &RuleProfile) -> String {
    profile_id_16(p).iter().map(|b| format!("{b:02x}")).collect()
}

fn crc32(bytes: &[u8]) -> u32 {
    crc32fast::hash(bytes)
}

fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let h = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&h.as_bytes()[..16]);
    out
}

fn pack_flags(set: &DisallowedSet, policy: InvalidUtf8) -> u16 {
    let low = if set.covers_non_ascii() { FLAG_NON_ASCII } else { 0 };
    let high = match policy {
        InvalidUtf8::Drop => 0u16,
        InvalidUtf8::Replace => 1u16,
    };
    low | (high << 8)
}

fn unpack_flags(flags: u16) -> Result<(bool, InvalidUtf8)> {
    let low = flags & 0x00FF;
    if low & !KNOWN_LOW_FLAGS != 0 {
        return Err(bad(format!("unknown flag bits 0x{low:02x}")));
    }
    let policy = match (flags >> 8) & 0x00FF {
        0 => InvalidUtf8::Drop,
        1 => InvalidUtf8::Replace,
        other => return Err(bad(format!("unknown invalid_utf8 policy {other}"))),
    };
    Ok((low & FLAG_NON_ASCII != 0, policy))
}

fn bad(msg: impl Into<String>) -> TagError {
    TagError::ProfileFormat(msg.into())
}

fn need(bytes: &[u8], i: usize, n: usize) -> Result<()> {
    if bytes.len() < i + n {
        return Err(bad("unexpected eof"));
    }
    Ok(())
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16> {
    need(bytes, *i, 2)?;
    let v = u16::from_le_bytes([bytes[*i], bytes[*i + 1]]);
    *i += 2;
    Ok(v)
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32> {
    need(bytes, *i, 4)?;
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[*i..*i + 4]);
    *i += 4;
    Ok(u32::from_le_bytes(buf))
}

fn read_u128(bytes: &[u8], i: &mut usize) -> Result<u128> {
    need(bytes, *i, 16)?;
    let mut buf = [0u8; 16];
    buf.copy_from_slice(&bytes[*i..*i + 16]);
    *i += 16;
    Ok(u128::from_le_bytes(buf))
}
