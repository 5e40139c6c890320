//! Condition code register.

/// The three condition flags owned by the execution engine.
///
/// Only arithmetic/logic (`OPq`) instructions update the flags; every other
/// instruction path leaves them unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionCode {
    /// Zero flag: last ALU result was zero.
    pub zf: bool,
    /// Sign flag: last ALU result was negative.
    pub sf: bool,
    /// Overflow flag: last ALU operation overflowed in two's complement.
    pub of: bool,
}

impl Default for ConditionCode {
    /// Reset state: ZF set, SF and OF clear.
    fn default() -> Self {
        Self {
            zf: true,
            sf: false,
            of: false,
        }
    }
}
