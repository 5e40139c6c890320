//! CPU core: architectural state and the sequential step engine.
//!
//! This module owns the engine's state and drives one instruction per
//! `step()` call through five logical stages:
//! 1. **Fetch:** Opcode, specifier, and immediate bytes; computes `valP`.
//! 2. **Decode:** Source selection and register reads.
//! 3. **Execute:** ALU evaluation, flags, and condition evaluation.
//! 4. **Memory:** The instruction's single data read or write.
//! 5. **Writeback:** Register commits, then the PC update policy.

/// Arithmetic/logic unit.
pub mod alu;
/// Architectural state containers (registers, condition codes).
pub mod arch;
/// Condition evaluation shared by conditional moves and jumps.
pub mod cond;
/// Per-step transient signals.
pub mod signals;
/// The five stage functions.
pub mod stages;

use tracing::debug;

use crate::common::{Addr, Fault, Status};
use crate::mem::Memory;
use arch::{ConditionCode, RegisterFile};
use signals::StepSignals;

/// The sequential Y86-64 processor.
///
/// Owns the memory, register file, condition codes, program counter, and
/// status. One `step()` executes exactly one instruction; once the status
/// leaves [`Status::Aok`] every further `step()` is a no-op.
#[derive(Debug)]
pub struct Cpu {
    /// Flat data/instruction memory.
    pub mem: Memory,
    /// General-purpose register file.
    pub regs: RegisterFile,
    /// Condition code register.
    pub cc: ConditionCode,
    /// Program counter (byte address of the next instruction).
    pub pc: Addr,
    /// Architectural status.
    pub status: Status,
}

impl Cpu {
    /// Creates a CPU around the given memory, in reset state.
    pub fn new(mem: Memory) -> Self {
        Self {
            mem,
            regs: RegisterFile::new(),
            cc: ConditionCode::default(),
            pc: 0,
            status: Status::Aok,
        }
    }

    /// Resets registers, flags, PC, and status. Memory is left untouched;
    /// the loader rezeros it when a new program is loaded.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.cc = ConditionCode::default();
        self.pc = 0;
        self.status = Status::Aok;
    }

    /// Executes one instruction.
    ///
    /// A no-op unless the status is running. A fault in any stage sets the
    /// corresponding terminal status and leaves the PC unchanged, so the
    /// failed instruction never commits partially.
    pub fn step(&mut self) {
        if !self.status.is_running() {
            return;
        }

        let mut sig = StepSignals::default();
        if let Err(fault) = self.run_stages(&mut sig) {
            debug!(pc = self.pc, %fault, "step aborted");
            self.status = fault.status();
        }
    }

    /// Runs the stages of one instruction over a fresh signal record.
    fn run_stages(&mut self, sig: &mut StepSignals) -> Result<(), Fault> {
        stages::fetch(self, sig)?;
        if self.status == Status::Hlt {
            return Ok(());
        }
        stages::decode(self, sig)?;
        stages::execute(self, sig)?;
        stages::memory(self, sig)?;
        stages::writeback(self, sig)?;
        self.update_pc(sig);
        Ok(())
    }

    /// Program-counter update policy, applied only while still running.
    fn update_pc(&mut self, sig: &StepSignals) {
        use crate::isa::Icode;

        if !self.status.is_running() {
            return;
        }

        self.pc = match sig.icode {
            Icode::Jxx if sig.cnd => sig.val_c as Addr,
            Icode::Call => sig.val_c as Addr,
            Icode::Ret => sig.val_m as Addr,
            _ => sig.val_p,
        };
    }
}
