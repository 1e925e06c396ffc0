//! The mnemonic assembler/disassembler.
//!
//! The opcode-to-mnemonic mapping lives in exactly one place, `MNEMONICS`,
//! rather than scattered across match arms. With fewer than thirty entries
//! a linear scan is simpler than a hash map and costs nothing that matters.

use super::opcode::OpCode;

const MNEMONICS: &[(OpCode, &str)] = &[
    (OpCode::Nop, "nop"),
    (OpCode::Load, "load"),
    (OpCode::Store, "store"),
    (OpCode::Push, "push"),
    (OpCode::Pop, "pop"),
    (OpCode::Jal, "jal"),
    (OpCode::Jnn, "jnn"),
    (OpCode::Jnz, "jnz"),
    (OpCode::LogicalNot, "lneg"),
    (OpCode::Negate, "numneg"),
    (OpCode::Increment, "inc"),
    (OpCode::Decrement, "dec"),
    (OpCode::BitwiseNot, "bwneg"),
    (OpCode::And, "and"),
    (OpCode::Or, "or"),
    (OpCode::Xor, "xor"),
    (OpCode::Add, "add"),
    (OpCode::Sub, "sub"),
    (OpCode::Mul, "mul"),
    (OpCode::Div, "div"),
    (OpCode::Mod, "mod"),
    (OpCode::Shl, "shl"),
    (OpCode::Shr, "shr"),
    (OpCode::Ushr, "ushr"),
    (OpCode::Trap, "trap"),
    (OpCode::Emit, "emit"),
    (OpCode::Print, "print"),
    (OpCode::Err, "err"),
    (OpCode::Crash, "crash"),
];

/// Resolves a mnemonic to its opcode, ASCII case-insensitively. An unknown
/// mnemonic (including the empty string) resolves to [`OpCode::Invalid`].
///
/// Lengths must match exactly; `assemble("jump")` does not match `"jal"`.
pub fn assemble(mnemonic: &str) -> OpCode {
    if mnemonic.is_empty() {
        return OpCode::Invalid;
    }

    MNEMONICS
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(mnemonic))
        .map(|(opcode, _)| *opcode)
        .unwrap_or(OpCode::Invalid)
}

/// Resolves an opcode to its canonical lowercase mnemonic. Opcodes with no
/// mnemonic entry (`OpCode::Invalid`, and any opcode that is not in the
/// enumeration's listed operations) return `None`.
pub fn disassemble(opcode: OpCode) -> Option<&'static str> {
    MNEMONICS
        .iter()
        .find(|(oc, _)| *oc == opcode)
        .map(|(_, name)| *name)
}
