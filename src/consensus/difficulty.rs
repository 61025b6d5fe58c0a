//! Compact difficulty encoding
//!
//! Conversion between the 32-bit `bits` field and 256-bit targets.

use crate::crypto::Hash256;

/// Expand compact `bits` into a 256-bit target.
///
/// Returns `None` for negative or overflowing encodings.
pub fn compact_to_target(compact: u32) -> Option<Hash256> {
    let exponent = (compact >> 24) as usize;
    let mantissa = compact & 0x007f_ffff;
    let negative = compact & 0x0080_0000 != 0;

    if mantissa == 0 {
        return Some(Hash256::zero());
    }
    if negative {
        return None;
    }
    if exponent > 34 || (mantissa > 0xff && exponent > 33) || (mantissa > 0xffff && exponent > 32) {
        return None;
    }

    let mut target = [0u8; 32];
    if exponent <= 3 {
        let value = mantissa >> (8 * (3 - exponent));
        target[..4].copy_from_slice(&value.to_le_bytes());
    } else {
        let start = exponent - 3;
        for (i, byte) in mantissa.to_le_bytes()[..3].iter().enumerate() {
            if start + i < 32 {
                target[start + i] = *byte;
            }
        }
    }

    Some(Hash256(target))
}

/// Encode a 256-bit target in compact form
pub fn target_to_compact(target: &Hash256) -> u32 {
    let size = match target.0.iter().rposition(|b| *b != 0) {
        Some(pos) => pos + 1,
        None => return 0,
    };

    let mut mantissa: u32 = 0;
    for i in 0..3 {
        if size >= i + 1 {
            mantissa |= (target.0[size - 1 - i] as u32) << (16 - 8 * i);
        }
    }

    let mut exponent = size as u32;
    // Keep the sign bit clear
    if mantissa & 0x0080_0000 != 0 {
        mantissa >>= 8;
        exponent += 1;
    }

    (exponent << 24) | mantissa
}
