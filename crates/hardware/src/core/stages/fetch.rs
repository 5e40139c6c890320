//! Instruction fetch stage.
//!
//! Reads the opcode byte at the program counter, splits it into the
//! instruction-class and function-code nibbles, and pulls in the
//! register-specifier byte and 8-byte immediate when the class's encoding
//! layout requires them. Computes `valP`, the next sequential address.

use tracing::trace;

use crate::common::constants::{
    NIBBLE_MASK, NIBBLE_SHIFT, OPCODE_SIZE, REGISTER_BYTE_SIZE, WORD_SIZE,
};
use crate::common::{Fault, Status};
use crate::core::signals::StepSignals;
use crate::core::Cpu;
use crate::isa::reg::RNONE;
use crate::isa::Icode;

/// Executes the fetch stage.
///
/// On a halt opcode, sets the halted status and leaves `valP` at the
/// current PC so the counter never advances past a halt.
///
/// # Errors
///
/// Returns [`Fault::AddressError`] if any instruction byte falls outside
/// memory, or [`Fault::InvalidInstruction`] for an unassigned
/// instruction-class nibble.
pub fn fetch(cpu: &mut Cpu, sig: &mut StepSignals) -> Result<(), Fault> {
    let opcode = cpu.mem.read_byte(cpu.pc)?;

    let class = (opcode >> NIBBLE_SHIFT) & NIBBLE_MASK;
    sig.ifun = opcode & NIBBLE_MASK;
    sig.icode = Icode::from_nibble(class).ok_or(Fault::InvalidInstruction { opcode })?;

    sig.val_p = cpu.pc + OPCODE_SIZE;

    if sig.icode == Icode::Halt {
        cpu.status = Status::Hlt;
        sig.val_p = cpu.pc;
        return Ok(());
    }

    if sig.icode.needs_registers() {
        let spec = cpu.mem.read_byte(sig.val_p)?;
        sig.ra = (spec >> NIBBLE_SHIFT) & NIBBLE_MASK;
        sig.rb = spec & NIBBLE_MASK;
        sig.val_p += REGISTER_BYTE_SIZE;
    } else {
        sig.ra = RNONE;
        sig.rb = RNONE;
    }

    if sig.icode.needs_immediate() {
        sig.val_c = cpu.mem.read_word(sig.val_p)?;
        sig.val_p += WORD_SIZE;
    }

    trace!(
        pc = cpu.pc,
        icode = ?sig.icode,
        ifun = sig.ifun,
        val_p = sig.val_p,
        "fetch"
    );
    Ok(())
}
