//! Y86-64 general-purpose register file.
//!
//! This module implements the 16-slot register storage. It performs:
//! 1. **Storage:** Maintains the fifteen addressable registers `%rax`-`%r14`.
//! 2. **Invariant Enforcement:** Writes to the `RNONE` sentinel are silently
//!    discarded; reads from it always yield zero.
//! 3. **Inspection:** Exposes the full ordered slot array for reporting.

use crate::common::Word;
use crate::isa::reg::{RegId, RNONE};

/// Number of register slots, including the sentinel.
const NUM_SLOTS: usize = 16;

/// General-purpose register file.
///
/// Slot 15 backs the `RNONE` sentinel: it is never written and reads as
/// zero, so it stays zero in the inspection array as well.
#[derive(Debug, Clone)]
pub struct RegisterFile {
    regs: [Word; NUM_SLOTS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with all slots zeroed.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_SLOTS],
        }
    }

    /// Zeroes every slot.
    pub fn reset(&mut self) {
        self.regs = [0; NUM_SLOTS];
    }

    /// Reads a register. The `RNONE` sentinel always yields zero.
    pub fn get(&self, id: RegId) -> Word {
        if id == RNONE {
            0
        } else {
            self.regs[id as usize]
        }
    }

    /// Writes a register. Writes targeting the `RNONE` sentinel are discarded.
    pub fn set(&mut self, id: RegId, val: Word) {
        if id != RNONE {
            self.regs[id as usize] = val;
        }
    }

    /// The full ordered slot array, for state inspection.
    pub fn get_all(&self) -> &[Word; NUM_SLOTS] {
        &self.regs
    }
}
