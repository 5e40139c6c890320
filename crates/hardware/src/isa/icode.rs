//! Y86-64 instruction class definitions.
//!
//! The instruction class is the high nibble of the opcode byte. It selects
//! the encoding layout (whether a register-specifier byte and an 8-byte
//! immediate follow) and drives stage behavior throughout the engine.

/// Instruction class (high nibble of the opcode byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Icode {
    /// Stop execution.
    Halt = 0x0,
    /// No operation.
    #[default]
    Nop = 0x1,
    /// Register move, including the conditional `cmovXX` family.
    Rrmovq = 0x2,
    /// Immediate-to-register move.
    Irmovq = 0x3,
    /// Register-to-memory store.
    Rmmovq = 0x4,
    /// Memory-to-register load.
    Mrmovq = 0x5,
    /// Arithmetic/logic operation (`addq`/`subq`/`andq`/`xorq`).
    Opq = 0x6,
    /// Conditional jump family (`jmp`/`jXX`).
    Jxx = 0x7,
    /// Procedure call.
    Call = 0x8,
    /// Procedure return.
    Ret = 0x9,
    /// Push onto the stack.
    Pushq = 0xA,
    /// Pop from the stack.
    Popq = 0xB,
}

impl Icode {
    /// Decodes an instruction class from the high nibble of the opcode byte.
    ///
    /// Returns `None` for the unassigned encodings `0xC..=0xF`.
    pub fn from_nibble(nibble: u8) -> Option<Self> {
        match nibble {
            0x0 => Some(Icode::Halt),
            0x1 => Some(Icode::Nop),
            0x2 => Some(Icode::Rrmovq),
            0x3 => Some(Icode::Irmovq),
            0x4 => Some(Icode::Rmmovq),
            0x5 => Some(Icode::Mrmovq),
            0x6 => Some(Icode::Opq),
            0x7 => Some(Icode::Jxx),
            0x8 => Some(Icode::Call),
            0x9 => Some(Icode::Ret),
            0xA => Some(Icode::Pushq),
            0xB => Some(Icode::Popq),
            _ => None,
        }
    }

    /// Whether the encoding carries a register-specifier byte after the opcode.
    pub fn needs_registers(self) -> bool {
        matches!(
            self,
            Icode::Rrmovq
                | Icode::Irmovq
                | Icode::Rmmovq
                | Icode::Mrmovq
                | Icode::Opq
                | Icode::Pushq
                | Icode::Popq
        )
    }

    /// Whether the encoding carries an 8-byte little-endian immediate.
    pub fn needs_immediate(self) -> bool {
        matches!(
            self,
            Icode::Irmovq | Icode::Rmmovq | Icode::Mrmovq | Icode::Jxx | Icode::Call
        )
    }

    /// Whether this class addresses the stack through `%rsp` during decode.
    pub fn uses_stack(self) -> bool {
        matches!(self, Icode::Pushq | Icode::Popq | Icode::Call | Icode::Ret)
    }
}
