//! Condition function definitions.
//!
//! The same seven condition functions key both the conditional-move family
//! (`rrmovq`/`cmovXX`) and the jump family (`jmp`/`jXX`), selected by the
//! function-code nibble of the opcode byte.

/// Condition function (low nibble of `rrmovq`/`jXX` opcodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cond {
    /// Unconditional (`rrmovq`/`jmp`).
    #[default]
    Always = 0x0,
    /// Less or equal: `(SF != OF) || ZF`.
    Le = 0x1,
    /// Less than: `SF != OF`.
    L = 0x2,
    /// Equal: `ZF`.
    E = 0x3,
    /// Not equal: `!ZF`.
    Ne = 0x4,
    /// Greater or equal: `!(SF != OF)`.
    Ge = 0x5,
    /// Greater than: `!(SF != OF) && !ZF`.
    G = 0x6,
}

impl Cond {
    /// Decodes a condition function from the function-code nibble.
    ///
    /// Returns `None` for function codes outside `0x0..=0x6`.
    pub fn from_fn(ifun: u8) -> Option<Self> {
        match ifun {
            0x0 => Some(Cond::Always),
            0x1 => Some(Cond::Le),
            0x2 => Some(Cond::L),
            0x3 => Some(Cond::E),
            0x4 => Some(Cond::Ne),
            0x5 => Some(Cond::Ge),
            0x6 => Some(Cond::G),
            _ => None,
        }
    }
}
