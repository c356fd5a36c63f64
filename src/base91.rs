//! Base-91 digits as used by the compressed position format.
//!
//! Each digit is a printable byte in `0x21..=0x7B` holding `byte - 33`.

pub(crate) const FIRST: u8 = 0x21;
pub(crate) const LAST: u8 = 0x7B;

pub fn digit_from_ascii(b: u8) -> Option<u8> {
    match b {
        FIRST..=LAST => Some(b - FIRST),
        _ => None,
    }
}

pub fn digit_to_ascii(d: u8) -> u8 {
    debug_assert!(d < 91);
    d + FIRST
}

/// Decodes a big-endian run of base-91 digits, weighting the first of four
/// digits by 91^3 and the last by 91^0.
pub fn decode_ascii(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |val, &b| {
        let d = digit_from_ascii(b)?;
        val.checked_mul(91)?.checked_add(u32::from(d))
    })
}

/// Fills `out` with the base-91 representation of `val`, most significant
/// digit first. Values that don't fit saturate to all `{`.
pub fn encode_ascii(mut val: u32, out: &mut [u8]) {
    let max = 91u64.pow(out.len() as u32) - 1;
    if u64::from(val) > max {
        val = max as u32;
    }

    for slot in out.iter_mut().rev() {
        *slot = digit_to_ascii((val % 91) as u8);
        val /= 91;
    }
}
