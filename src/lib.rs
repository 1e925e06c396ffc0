//! Instruction set architecture for a stack-based virtual machine: the
//! closed opcode taxonomy, the typed per-opcode instruction records, the
//! binary decoder, the streaming decoder, and the mnemonic
//! assembler/disassembler.
//!
//! This crate only decodes and assembles/disassembles instructions — it
//! never executes them. The companion ordered index ("lookup tree") lives
//! in the sibling `lookup-tree` crate and shares no state with this one.

pub mod constants;
pub mod isa;

pub use isa::{
    assemble, decode_all, decode_one, disassemble, Decoder, HeapAddr, Instruction, OpCode,
    ProgramAddr, StackAddr, SymbolAddr,
};
