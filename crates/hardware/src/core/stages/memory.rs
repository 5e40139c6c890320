//! Memory access stage.
//!
//! Performs the single data-memory read or write an instruction class may
//! carry. Stores target the ALU-computed address `valE`; pops and returns
//! read from the pre-decrement stack address held in `valB`.

use tracing::trace;

use crate::common::{Addr, Fault, Word};
use crate::core::signals::StepSignals;
use crate::core::Cpu;
use crate::isa::Icode;

/// Executes the memory stage.
///
/// # Errors
///
/// Returns [`Fault::AddressError`] on any out-of-bounds access; writeback
/// and the PC update are skipped by the engine in that case.
pub fn memory(cpu: &mut Cpu, sig: &mut StepSignals) -> Result<(), Fault> {
    match sig.icode {
        // M[valE] <- valA
        Icode::Rmmovq | Icode::Pushq => {
            cpu.mem.write_word(sig.val_e as Addr, sig.val_a)?;
            trace!(addr = sig.val_e, val = sig.val_a, "memory write");
        }
        // valM <- M[valE]
        Icode::Mrmovq => {
            sig.val_m = cpu.mem.read_word(sig.val_e as Addr)?;
            trace!(addr = sig.val_e, val = sig.val_m, "memory read");
        }
        // valM <- M[valB]  (valB = pre-decrement stack pointer)
        Icode::Popq | Icode::Ret => {
            sig.val_m = cpu.mem.read_word(sig.val_b as Addr)?;
            trace!(addr = sig.val_b, val = sig.val_m, "stack read");
        }
        // M[valE] <- valP  (return address)
        Icode::Call => {
            cpu.mem.write_word(sig.val_e as Addr, sig.val_p as Word)?;
            trace!(addr = sig.val_e, ret = sig.val_p, "call push");
        }
        Icode::Halt
        | Icode::Nop
        | Icode::Rrmovq
        | Icode::Irmovq
        | Icode::Opq
        | Icode::Jxx => {}
    }
    Ok(())
}
