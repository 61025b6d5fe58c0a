//! Minimal script builder
//!
//! Only what genesis construction needs: data pushes, script numbers and
//! a handful of opcodes, encoded exactly as the reference client does.

use serde::{Deserialize, Serialize};

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_16: u8 = 0x60;
pub const OP_CHECKSIG: u8 = 0xac;

/// Raw script bytes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script(pub Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Push an integer, using the small-integer opcodes where they exist
    pub fn push_int(mut self, n: i64) -> Self {
        match n {
            0 => self.0.push(OP_0),
            -1 => self.0.push(OP_1NEGATE),
            1..=16 => self.0.push(OP_1 + (n as u8) - 1),
            _ => return self.push_slice(&script_num_bytes(n)),
        }
        self
    }

    /// Push an integer as minimally encoded script-number data, always as a data push
    pub fn push_num(self, n: i64) -> Self {
        self.push_slice(&script_num_bytes(n))
    }

    /// Push raw data with the shortest push opcode for its length
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.0.push(opcode);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Minimal little-endian sign-magnitude encoding of a script number
pub fn script_num_bytes(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }

    // The top bit is the sign; add a byte when the magnitude already uses it.
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_num_encoding() {
        assert!(script_num_bytes(0).is_empty());
        assert_eq!(script_num_bytes(4), vec![0x04]);
        assert_eq!(script_num_bytes(-1), vec![0x81]);
        assert_eq!(script_num_bytes(0x80), vec![0x80, 0x00]);
        assert_eq!(script_num_bytes(-0x80), vec![0x80, 0x80]);
        assert_eq!(script_num_bytes(504365040), vec![0xf0, 0xff, 0x0f, 0x1e]);
    }

    #[test]
    fn test_push_int_uses_small_opcodes() {
        assert_eq!(Script::new().push_int(0).0, vec![OP_0]);
        assert_eq!(Script::new().push_int(-1).0, vec![OP_1NEGATE]);
        assert_eq!(Script::new().push_int(16).0, vec![OP_16]);
        assert_eq!(Script::new().push_int(17).0, vec![0x01, 0x11]);
    }

    #[test]
    fn test_push_num_is_always_data() {
        assert_eq!(Script::new().push_num(4).0, vec![0x01, 0x04]);
    }

    #[test]
    fn test_push_slice_lengths() {
        let short = Script::new().push_slice(&[0xaa; 75]);
        assert_eq!(short.0[0], 75);
        assert_eq!(short.len(), 76);

        let medium = Script::new().push_slice(&[0xaa; 86]);
        assert_eq!(&medium.0[..2], &[OP_PUSHDATA1, 86]);

        let long = Script::new().push_slice(&[0xaa; 300]);
        assert_eq!(&long.0[..3], &[OP_PUSHDATA2, 0x2c, 0x01]);
    }
}
