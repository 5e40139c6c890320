//! Architectural state containers.
//!
//! This module holds the register-level state mutated by the writeback and
//! execute stages:
//! 1. **Register File:** The 16-slot general-purpose register storage.
//! 2. **Condition Codes:** The zero, sign, and overflow flags.

/// Condition code register.
pub mod cc;

/// General-purpose register file.
pub mod regs;

pub use cc::ConditionCode;
pub use regs::RegisterFile;
