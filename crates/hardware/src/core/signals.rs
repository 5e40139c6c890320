//! Per-step micro-architectural signals.
//!
//! One [`StepSignals`] record is built fresh for every `step()` invocation
//! and threaded explicitly through the stage functions. Nothing in it is
//! architecturally meaningful between steps.

use crate::common::{Addr, Word};
use crate::isa::reg::{RegId, RNONE};
use crate::isa::Icode;

/// Transient signals passed between the five stages of one instruction.
#[derive(Debug, Clone)]
pub struct StepSignals {
    /// Decoded instruction class.
    pub icode: Icode,
    /// Raw function-code nibble; interpreted per class at the use site.
    pub ifun: u8,
    /// First register-specifier field (`rA`).
    pub ra: RegId,
    /// Second register-specifier field (`rB`).
    pub rb: RegId,
    /// First source operand value (`valA`).
    pub val_a: Word,
    /// Second source operand value (`valB`).
    pub val_b: Word,
    /// Fetched immediate or displacement (`valC`).
    pub val_c: Word,
    /// ALU result (`valE`).
    pub val_e: Word,
    /// Value loaded from memory (`valM`).
    pub val_m: Word,
    /// Address of the next sequential instruction (`valP`).
    pub val_p: Addr,
    /// Whether the instruction's condition function is satisfied (`Cnd`).
    pub cnd: bool,
}

impl Default for StepSignals {
    fn default() -> Self {
        Self {
            icode: Icode::Nop,
            ifun: 0,
            ra: RNONE,
            rb: RNONE,
            val_a: 0,
            val_b: 0,
            val_c: 0,
            val_e: 0,
            val_m: 0,
            val_p: 0,
            cnd: false,
        }
    }
}
