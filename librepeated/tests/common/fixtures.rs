// fixtures.rs — commonly used patterns, messages and opcodes

use librepeated::Opcode;

pub const REFERENCE_PATTERN: &[u8] = b"abc";
pub const REFERENCE_MESSAGE: &[u8] = b"ignored";
pub const REFERENCE_OUTPUT: &[u8] = b"abcabca";

/// `_IOW('r', 0, int)` written out by hand
pub fn set_pattern_raw() -> u32 {
    (1 << 30) | (4 << 16) | (u32::from(b'r') << 8)
}

/// `_IO('r', 1)` written out by hand
pub fn reset_raw() -> u32 {
    (u32::from(b'r') << 8) | 1
}

pub fn unknown_opcode() -> Opcode {
    Opcode::from_raw((u32::from(b'r') << 8) | 0x7f)
}

pub fn filler(len: usize) -> Vec<u8> {
    vec![0x5a; len]
}
