//! Address newtypes and the byte-stream cursor shared by the decoder and the
//! streaming decoder.
//!
//! Each address space gets its own `Copy` tuple struct rather than a plain
//! integer, so the stack/program/symbol address spaces can't be mixed up
//! at a call site.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::{PROGRAM_ADDR_BYTES, STACK_ADDR_BYTES, SYMBOL_ADDR_BYTES};

/// A 16-bit offset into the stack frame.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StackAddr(pub u16);

/// A 64-bit offset into the program byte slice.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ProgramAddr(pub u64);

/// A 64-bit index into an external symbol table.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SymbolAddr(pub u64);

/// A runtime-only machine pointer. Never appears on the wire; the decoder
/// never produces one.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct HeapAddr(pub usize);

/// A read-only walk over a borrowed program slice that tracks how many
/// bytes have actually been consumed.
///
/// Each `read_*` method either advances `pos` past a complete operand and
/// returns `Some`, or leaves `pos` untouched and returns `None` when the
/// slice runs out mid-operand. This is what lets the decoder report exactly
/// how many bytes it consumed even on a truncated operand.
pub(crate) struct Cursor<'p> {
    bytes: &'p [u8],
    pos: usize,
}

impl<'p> Cursor<'p> {
    pub(crate) fn new(bytes: &'p [u8], pos: usize) -> Self {
        Cursor { bytes, pos }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    fn take(&mut self, width: usize) -> Option<&'p [u8]> {
        if self.pos + width > self.bytes.len() {
            return None;
        }
        let slice = &self.bytes[self.pos..self.pos + width];
        self.pos += width;
        Some(slice)
    }

    pub(crate) fn stack_addr(&mut self) -> Option<StackAddr> {
        self.take(STACK_ADDR_BYTES)
            .map(|b| StackAddr(LittleEndian::read_u16(b)))
    }

    pub(crate) fn program_addr(&mut self) -> Option<ProgramAddr> {
        self.take(PROGRAM_ADDR_BYTES)
            .map(|b| ProgramAddr(LittleEndian::read_u64(b)))
    }

    pub(crate) fn symbol_addr(&mut self) -> Option<SymbolAddr> {
        self.take(SYMBOL_ADDR_BYTES)
            .map(|b| SymbolAddr(LittleEndian::read_u64(b)))
    }
}
