//! Wire-format widths shared by the decoder, the streaming decoder and the
//! assembler.

use std::mem;

pub const BYTE_BYTES: usize = mem::size_of::<u8>();
pub const STACK_ADDR_BYTES: usize = mem::size_of::<u16>();

/// `ProgramAddr` and `SymbolAddr` are pinned to 64 bits for portability.
pub const PROGRAM_ADDR_BYTES: usize = mem::size_of::<u64>();
pub const SYMBOL_ADDR_BYTES: usize = mem::size_of::<u64>();
