//! Arithmetic/logic unit.
//!
//! Implements the four Y86-64 integer operations and the condition-flag
//! computation. The operand order is fixed: the result is always `B op A`,
//! matching the architectural definition of `OPq rA, rB` (`rB = rB op rA`).

use crate::common::Word;
use crate::core::arch::ConditionCode;
use crate::isa::AluOp;

/// Executes an ALU operation, computing `b op a` with wrapping arithmetic.
pub fn execute(op: AluOp, a: Word, b: Word) -> Word {
    match op {
        AluOp::Add => b.wrapping_add(a),
        AluOp::Sub => b.wrapping_sub(a),
        AluOp::And => b & a,
        AluOp::Xor => b ^ a,
    }
}

/// Computes the condition flags for an `OPq` execution.
///
/// ZF and SF are derived from the result unconditionally. OF follows the
/// two's-complement rules: addition overflows when both inputs share a sign
/// and the result's sign differs; subtraction (`b - a`) overflows when the
/// operands have opposite signs and the result's sign differs from `b`'s.
/// Bitwise operations never overflow.
pub fn flags(op: AluOp, a: Word, b: Word, result: Word) -> ConditionCode {
    let of = match op {
        AluOp::Add => (a > 0 && b > 0 && result < 0) || (a < 0 && b < 0 && result > 0),
        AluOp::Sub => (a < 0 && b > 0 && result < 0) || (a > 0 && b < 0 && result > 0),
        AluOp::And | AluOp::Xor => false,
    };
    ConditionCode {
        zf: result == 0,
        sf: result < 0,
        of,
    }
}
