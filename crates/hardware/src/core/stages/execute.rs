//! Execute stage.
//!
//! Selects the ALU inputs and operation for the instruction class, computes
//! `valE`, updates the condition codes for `OPq`, and evaluates the
//! condition function for the conditional-move and jump families.

use tracing::trace;

use crate::common::{Fault, Word};
use crate::core::signals::StepSignals;
use crate::core::{alu, cond, Cpu};
use crate::isa::{AluOp, Icode};

/// Stack-pointer displacement applied by push and call.
const STACK_PUSH: Word = -8;

/// Stack-pointer displacement applied by pop and return.
const STACK_POP: Word = 8;

/// Executes the execute stage.
///
/// Jumps skip ALU evaluation entirely; their target was already fetched
/// into `valC`. Everything else runs the ALU with the class's input
/// selection, defaulting to addition.
///
/// # Errors
///
/// Returns [`Fault::InvalidInstruction`] for an `OPq` function code outside
/// the defined ALU operations, or a condition function code outside the
/// defined condition range.
pub fn execute(cpu: &mut Cpu, sig: &mut StepSignals) -> Result<(), Fault> {
    if sig.icode == Icode::Jxx {
        sig.cnd = cond::evaluate(sig.ifun, &cpu.cc)?;
        trace!(cnd = sig.cnd, "execute (jump)");
        return Ok(());
    }

    let (a, b, op) = alu_inputs(sig)?;
    sig.val_e = alu::execute(op, a, b);

    if sig.icode == Icode::Opq {
        cpu.cc = alu::flags(op, a, b, sig.val_e);
    }

    // cmovXX keys on the flags as they stood before this instruction;
    // rrmovq is not OPq, so the flags are untouched at this point.
    if sig.icode == Icode::Rrmovq {
        sig.cnd = cond::evaluate(sig.ifun, &cpu.cc)?;
    }

    trace!(val_e = sig.val_e, cnd = sig.cnd, "execute");
    Ok(())
}

/// ALU input and operation selection per instruction class.
///
/// The result is always computed as `B op A`.
fn alu_inputs(sig: &StepSignals) -> Result<(Word, Word, AluOp), Fault> {
    let inputs = match sig.icode {
        Icode::Rrmovq => (sig.val_a, 0, AluOp::Add),
        Icode::Irmovq => (sig.val_c, 0, AluOp::Add),
        Icode::Rmmovq | Icode::Mrmovq => (sig.val_c, sig.val_b, AluOp::Add),
        Icode::Opq => {
            let op = AluOp::from_fn(sig.ifun).ok_or(Fault::InvalidInstruction {
                opcode: sig.ifun,
            })?;
            (sig.val_a, sig.val_b, op)
        }
        // valB holds the stack pointer for all four stack classes.
        Icode::Pushq | Icode::Call => (STACK_PUSH, sig.val_b, AluOp::Add),
        Icode::Popq | Icode::Ret => (STACK_POP, sig.val_b, AluOp::Add),
        Icode::Halt | Icode::Nop | Icode::Jxx => (0, 0, AluOp::Add),
    };
    Ok(inputs)
}
