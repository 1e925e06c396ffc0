//! The decoded instruction sum type.
//!
//! One arm per distinct operand shape, with field names matching the
//! opcode table so a decoded value is easy to read back against it.

use super::address::{ProgramAddr, StackAddr, SymbolAddr};
use super::opcode::OpCode;

/// A decoded instruction, or one of the two failure shapes a decode can
/// produce (`Invalid` for a reserved opcode byte, `Bad` for a truncated
/// operand list).
///
/// Variants are declared in ascending opcode-tag order (`Invalid` is tag
/// `0x00`) so the derived `Ord` orders instructions by opcode tag, matching
/// how instructions are compared for debugging. `Bad` carries its own
/// `opcode` field rather than occupying a fixed tag, so it sorts last.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Instruction {
    Invalid,

    NoOp,

    Load {
        target: StackAddr,
        source_ptr: StackAddr,
    },
    Store {
        target_ptr: StackAddr,
        source: StackAddr,
    },

    Push {
        source: StackAddr,
    },
    Pop,

    Jal {
        target: ProgramAddr,
    },
    Jnn {
        target: ProgramAddr,
        subject: StackAddr,
    },
    Jnz {
        target: ProgramAddr,
        subject: StackAddr,
    },

    LogicalNot {
        result: ProgramAddr,
        subject: StackAddr,
    },
    Negate {
        result: ProgramAddr,
        subject: StackAddr,
    },
    Increment {
        result: ProgramAddr,
        subject: StackAddr,
    },
    Decrement {
        result: ProgramAddr,
        subject: StackAddr,
    },
    BitwiseNot {
        result: ProgramAddr,
        subject: StackAddr,
    },

    And {
        result: StackAddr,
        a: StackAddr,
        b: StackAddr,
    },
    Or {
        result: StackAddr,
        a: StackAddr,
        b: StackAddr,
    },
    Xor {
        result: StackAddr,
        a: StackAddr,
        b: StackAddr,
    },
    Add {
        sum: StackAddr,
        a: StackAddr,
        b: StackAddr,
    },
    Sub {
        diff: StackAddr,
        minuend: StackAddr,
        subtrahend: StackAddr,
    },
    Mul {
        product: StackAddr,
        multiplicand: StackAddr,
        multiplier: StackAddr,
    },
    Div {
        quotient: StackAddr,
        dividend: StackAddr,
        divisor: StackAddr,
    },
    Mod {
        remainder: StackAddr,
        dividend: StackAddr,
        divisor: StackAddr,
    },
    Shl {
        result: StackAddr,
        subject: StackAddr,
        shift: StackAddr,
    },
    Shr {
        result: StackAddr,
        subject: StackAddr,
        shift: StackAddr,
    },
    Ushr {
        result: StackAddr,
        subject: StackAddr,
        shift: StackAddr,
    },

    Trap {
        exception_type: SymbolAddr,
        handler: ProgramAddr,
    },
    Emit {
        exception_ptr: StackAddr,
    },

    Print,
    Err {
        message_ptr: StackAddr,
    },
    Crash,

    /// The program ran out of bytes while reading this opcode's operands.
    /// `found` counts complete operands read before the stream ran out.
    Bad {
        opcode: OpCode,
        expected: usize,
        found: usize,
    },
}
