//! ALU operation selection.

/// Integer ALU operation.
///
/// For `OPq` instructions the operation is selected by the function-code
/// nibble; every other instruction class computes with [`AluOp::Add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AluOp {
    /// `addq`: result = B + A. The default operation for address arithmetic
    /// and stack-pointer adjustment.
    #[default]
    Add = 0x0,
    /// `subq`: result = B - A.
    Sub = 0x1,
    /// `andq`: result = B & A.
    And = 0x2,
    /// `xorq`: result = B ^ A.
    Xor = 0x3,
}

impl AluOp {
    /// Decodes an ALU operation from the `OPq` function-code nibble.
    ///
    /// Returns `None` for function codes outside `0x0..=0x3`.
    pub fn from_fn(ifun: u8) -> Option<Self> {
        match ifun {
            0x0 => Some(AluOp::Add),
            0x1 => Some(AluOp::Sub),
            0x2 => Some(AluOp::And),
            0x3 => Some(AluOp::Xor),
            _ => None,
        }
    }
}
