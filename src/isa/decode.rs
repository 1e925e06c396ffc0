//! The binary decoder.
//!
//! One match arm per opcode, each declaring its operand fields in order —
//! this is the single place a reader needs to see the full
//! opcode-to-operand mapping. The per-field boilerplate of "read this
//! field, or bail out with `Bad` reporting how far we got" is factored
//! into the `read_operands!` macro.

use log::debug;

use super::address::Cursor;
use super::instruction::Instruction;
use super::opcode::OpCode;

/// Reads `expected` operands into `let` bindings, returning early with
/// `Instruction::Bad` (reporting how many operands were actually read) the
/// moment one of them runs out of bytes.
macro_rules! read_operands {
    ($cur:expr, $opcode:expr, $expected:expr, $( $field:ident : $kind:ident ),* $(,)?) => {
        let mut found = 0usize;
        $(
            let $field = match $cur.$kind() {
                Some(value) => { found += 1; value },
                None => return bad($opcode, $expected, found, $cur.pos()),
            };
        )*
    };
}

fn bad(opcode: OpCode, expected: usize, found: usize, consumed: usize) -> (Instruction, usize) {
    debug!(
        "decode: opcode {:?} truncated, expected {} operands, found {}",
        opcode, expected, found
    );
    (
        Instruction::Bad {
            opcode,
            expected,
            found,
        },
        consumed,
    )
}

fn ok(instruction: Instruction, consumed: usize) -> (Instruction, usize) {
    (instruction, consumed)
}

/// Decodes exactly one instruction starting at the front of `program`.
///
/// Returns the decoded instruction and how many bytes were consumed. Never
/// panics: every reserved opcode becomes [`Instruction::Invalid`] and every
/// truncated operand list becomes [`Instruction::Bad`].
pub fn decode_one(program: &[u8]) -> (Instruction, usize) {
    if program.is_empty() {
        return bad(OpCode::Invalid, 0, 0, 0);
    }

    let opcode = OpCode::from_byte(program[0]);
    let mut cur = Cursor::new(program, 1);

    match opcode {
        OpCode::Invalid => {
            debug!("decode: reserved opcode byte {:#04x}", program[0]);
            ok(Instruction::Invalid, cur.pos())
        }

        OpCode::Nop => ok(Instruction::NoOp, cur.pos()),

        OpCode::Load => {
            read_operands!(cur, opcode, 2, target: stack_addr, source_ptr: stack_addr);
            ok(Instruction::Load { target, source_ptr }, cur.pos())
        }
        OpCode::Store => {
            read_operands!(cur, opcode, 2, target_ptr: stack_addr, source: stack_addr);
            ok(Instruction::Store { target_ptr, source }, cur.pos())
        }

        OpCode::Push => {
            read_operands!(cur, opcode, 1, source: stack_addr);
            ok(Instruction::Push { source }, cur.pos())
        }
        OpCode::Pop => ok(Instruction::Pop, cur.pos()),

        OpCode::Jal => {
            read_operands!(cur, opcode, 1, target: program_addr);
            ok(Instruction::Jal { target }, cur.pos())
        }
        OpCode::Jnn => {
            read_operands!(cur, opcode, 2, target: program_addr, subject: stack_addr);
            ok(Instruction::Jnn { target, subject }, cur.pos())
        }
        OpCode::Jnz => {
            read_operands!(cur, opcode, 2, target: program_addr, subject: stack_addr);
            ok(Instruction::Jnz { target, subject }, cur.pos())
        }

        OpCode::LogicalNot => {
            read_operands!(cur, opcode, 2, result: program_addr, subject: stack_addr);
            ok(Instruction::LogicalNot { result, subject }, cur.pos())
        }
        OpCode::Negate => {
            read_operands!(cur, opcode, 2, result: program_addr, subject: stack_addr);
            ok(Instruction::Negate { result, subject }, cur.pos())
        }
        OpCode::Increment => {
            read_operands!(cur, opcode, 2, result: program_addr, subject: stack_addr);
            ok(Instruction::Increment { result, subject }, cur.pos())
        }
        OpCode::Decrement => {
            read_operands!(cur, opcode, 2, result: program_addr, subject: stack_addr);
            ok(Instruction::Decrement { result, subject }, cur.pos())
        }
        OpCode::BitwiseNot => {
            read_operands!(cur, opcode, 2, result: program_addr, subject: stack_addr);
            ok(Instruction::BitwiseNot { result, subject }, cur.pos())
        }

        OpCode::And => {
            read_operands!(cur, opcode, 3, result: stack_addr, a: stack_addr, b: stack_addr);
            ok(Instruction::And { result, a, b }, cur.pos())
        }
        OpCode::Or => {
            read_operands!(cur, opcode, 3, result: stack_addr, a: stack_addr, b: stack_addr);
            ok(Instruction::Or { result, a, b }, cur.pos())
        }
        OpCode::Xor => {
            read_operands!(cur, opcode, 3, result: stack_addr, a: stack_addr, b: stack_addr);
            ok(Instruction::Xor { result, a, b }, cur.pos())
        }
        OpCode::Add => {
            read_operands!(cur, opcode, 3, sum: stack_addr, a: stack_addr, b: stack_addr);
            ok(Instruction::Add { sum, a, b }, cur.pos())
        }
        OpCode::Sub => {
            read_operands!(
                cur, opcode, 3,
                diff: stack_addr, minuend: stack_addr, subtrahend: stack_addr
            );
            ok(
                Instruction::Sub {
                    diff,
                    minuend,
                    subtrahend,
                },
                cur.pos(),
            )
        }
        OpCode::Mul => {
            read_operands!(
                cur, opcode, 3,
                product: stack_addr, multiplicand: stack_addr, multiplier: stack_addr
            );
            ok(
                Instruction::Mul {
                    product,
                    multiplicand,
                    multiplier,
                },
                cur.pos(),
            )
        }
        OpCode::Div => {
            read_operands!(
                cur, opcode, 3,
                quotient: stack_addr, dividend: stack_addr, divisor: stack_addr
            );
            ok(
                Instruction::Div {
                    quotient,
                    dividend,
                    divisor,
                },
                cur.pos(),
            )
        }
        OpCode::Mod => {
            read_operands!(
                cur, opcode, 3,
                remainder: stack_addr, dividend: stack_addr, divisor: stack_addr
            );
            ok(
                Instruction::Mod {
                    remainder,
                    dividend,
                    divisor,
                },
                cur.pos(),
            )
        }
        OpCode::Shl => {
            read_operands!(cur, opcode, 3, result: stack_addr, subject: stack_addr, shift: stack_addr);
            ok(Instruction::Shl { result, subject, shift }, cur.pos())
        }
        OpCode::Shr => {
            read_operands!(cur, opcode, 3, result: stack_addr, subject: stack_addr, shift: stack_addr);
            ok(Instruction::Shr { result, subject, shift }, cur.pos())
        }
        OpCode::Ushr => {
            read_operands!(cur, opcode, 3, result: stack_addr, subject: stack_addr, shift: stack_addr);
            ok(Instruction::Ushr { result, subject, shift }, cur.pos())
        }

        OpCode::Trap => {
            read_operands!(cur, opcode, 2, exception_type: symbol_addr, handler: program_addr);
            ok(
                Instruction::Trap {
                    exception_type,
                    handler,
                },
                cur.pos(),
            )
        }
        OpCode::Emit => {
            read_operands!(cur, opcode, 1, exception_ptr: stack_addr);
            ok(Instruction::Emit { exception_ptr }, cur.pos())
        }

        OpCode::Print => ok(Instruction::Print, cur.pos()),
        OpCode::Err => {
            read_operands!(cur, opcode, 1, message_ptr: stack_addr);
            ok(Instruction::Err { message_ptr }, cur.pos())
        }
        OpCode::Crash => ok(Instruction::Crash, cur.pos()),
    }
}
