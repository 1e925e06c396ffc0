//! The ISA codec: the closed opcode taxonomy, the typed per-opcode
//! instruction records, the binary decoder, the streaming decoder, and the
//! mnemonic assembler/disassembler.

mod address;
mod decode;
mod instruction;
mod mnemonic;
mod opcode;
mod stream;


pub use address::{HeapAddr, ProgramAddr, StackAddr, SymbolAddr};
pub use decode::decode_one;
pub use instruction::Instruction;
pub use mnemonic::{assemble, disassemble};
pub use opcode::OpCode;
pub use stream::{decode_all, Decoder};
