//! The closed opcode enumeration. Values are part of the wire contract; gaps
//! in the numbering are intentional and reserved.
//!
//! Discriminants are pinned explicitly rather than left to declaration
//! order, since the numbering has deliberate gaps rather than being dense.

use std::fmt;

use num::traits::{FromPrimitive, ToPrimitive};
use num_derive::{FromPrimitive, ToPrimitive};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, FromPrimitive, ToPrimitive)]
#[repr(u8)]
pub enum OpCode {
    /// Reserved / not in the enumeration. Every byte without an explicit
    /// discriminant below also decodes to this opcode.
    Invalid = 0x00,
    Nop = 0x01,

    Load = 0x03,
    Store = 0x04,

    Push = 0x08,
    Pop = 0x09,

    Jal = 0x10,
    Jnn = 0x11,
    Jnz = 0x12,

    LogicalNot = 0x20,
    Negate = 0x21,
    Increment = 0x22,
    Decrement = 0x23,
    BitwiseNot = 0x24,

    And = 0x40,
    Or = 0x41,
    Xor = 0x42,
    Add = 0x43,
    Sub = 0x44,
    Mul = 0x45,
    Div = 0x46,
    Mod = 0x47,
    Shl = 0x48,
    Shr = 0x49,
    Ushr = 0x4A,

    Trap = 0xE0,
    Emit = 0xE1,

    Print = 0xFD,
    Err = 0xFE,
    Crash = 0xFF,
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl OpCode {
    /// Decodes a raw opcode byte, collapsing every reserved value (any byte
    /// not listed in the enumeration) to [`OpCode::Invalid`].
    pub fn from_byte(byte: u8) -> OpCode {
        FromPrimitive::from_u8(byte).unwrap_or(OpCode::Invalid)
    }

    pub fn as_byte(self) -> u8 {
        ToPrimitive::to_u8(&self).expect("OpCode always fits in a u8")
    }
}
