//! Y86-64 instruction set definitions.
//!
//! This module defines the architectural vocabulary of the simulator:
//! 1. **Instruction Classes:** The twelve Y86-64 instruction classes and
//!    their encoding-layout predicates.
//! 2. **ALU Operations:** The four integer operations selected by the `OPq`
//!    function code.
//! 3. **Conditions:** The seven condition functions shared by conditional
//!    moves and jumps.
//! 4. **Registers:** Architectural register ids and display names.

/// ALU operation selection.
pub mod alu;

/// Condition function definitions.
pub mod cond;

/// Instruction class definitions.
pub mod icode;

/// Register id constants and display names.
pub mod reg;

pub use alu::AluOp;
pub use cond::Cond;
pub use icode::Icode;
