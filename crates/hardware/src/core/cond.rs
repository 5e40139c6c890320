//! Condition evaluation.
//!
//! Shared by the conditional-move (`cmovXX`) and conditional-jump (`jXX`)
//! families: both key the same seven condition functions off the current
//! condition codes.

use crate::common::Fault;
use crate::core::arch::ConditionCode;
use crate::isa::Cond;

/// Evaluates the condition function encoded in `ifun` against the flags.
///
/// # Errors
///
/// Returns [`Fault::InvalidInstruction`] for function codes outside the
/// defined range `0x0..=0x6`.
pub fn evaluate(ifun: u8, cc: &ConditionCode) -> Result<bool, Fault> {
    let cond = Cond::from_fn(ifun).ok_or(Fault::InvalidInstruction { opcode: ifun })?;
    Ok(satisfied(cond, cc))
}

/// Whether a condition holds under the given flags.
pub fn satisfied(cond: Cond, cc: &ConditionCode) -> bool {
    match cond {
        Cond::Always => true,
        Cond::Le => (cc.sf != cc.of) || cc.zf,
        Cond::L => cc.sf != cc.of,
        Cond::E => cc.zf,
        Cond::Ne => !cc.zf,
        Cond::Ge => cc.sf == cc.of,
        Cond::G => cc.sf == cc.of && !cc.zf,
    }
}
