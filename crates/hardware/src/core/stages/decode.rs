//! Operand decode stage.
//!
//! Selects the two source registers for the instruction class and reads
//! their values into `valA` and `valB`. Stack-affecting classes always
//! source `valB` from `%rsp` regardless of the fetched specifier fields.

use tracing::trace;

use crate::common::Fault;
use crate::core::signals::StepSignals;
use crate::core::Cpu;
use crate::isa::reg::RSP;

/// Executes the decode stage.
pub fn decode(cpu: &mut Cpu, sig: &mut StepSignals) -> Result<(), Fault> {
    let (src_a, src_b) = if sig.icode.uses_stack() {
        // call/ret never consume valA; ra is RNONE for them and reads zero.
        (sig.ra, RSP)
    } else {
        (sig.ra, sig.rb)
    };

    sig.val_a = cpu.regs.get(src_a);
    sig.val_b = cpu.regs.get(src_b);

    trace!(val_a = sig.val_a, val_b = sig.val_b, "decode");
    Ok(())
}
