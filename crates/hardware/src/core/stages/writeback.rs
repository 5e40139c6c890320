//! Writeback stage.
//!
//! Commits the step's results to the register file. A single conditional
//! mechanism implements both unconditional `rrmovq` and the whole `cmovXX`
//! family: the move commits only when the condition evaluated in execute
//! held.

use tracing::trace;

use crate::common::{Fault, Status};
use crate::core::signals::StepSignals;
use crate::core::Cpu;
use crate::isa::reg::RSP;
use crate::isa::Icode;

/// Executes the writeback stage.
///
/// Commits nothing when the status is already halted or invalid; those
/// statuses abort the step before this stage runs.
pub fn writeback(cpu: &mut Cpu, sig: &mut StepSignals) -> Result<(), Fault> {
    if matches!(cpu.status, Status::Hlt | Status::Ins) {
        return Ok(());
    }

    match sig.icode {
        Icode::Rrmovq => {
            if sig.cnd {
                cpu.regs.set(sig.rb, sig.val_e);
            }
        }
        Icode::Irmovq | Icode::Opq => cpu.regs.set(sig.rb, sig.val_e),
        Icode::Mrmovq => cpu.regs.set(sig.ra, sig.val_m),
        Icode::Pushq | Icode::Call => cpu.regs.set(RSP, sig.val_e),
        Icode::Popq => {
            cpu.regs.set(RSP, sig.val_e);
            cpu.regs.set(sig.ra, sig.val_m);
        }
        Icode::Ret => cpu.regs.set(RSP, sig.val_e),
        Icode::Halt | Icode::Nop | Icode::Rmmovq | Icode::Jxx => {}
    }

    trace!("writeback");
    Ok(())
}
