//! Architectural status codes.

use std::fmt;

/// Engine status after a step.
///
/// The numeric values are a compatibility contract with external consumers
/// of the state trace and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Status {
    /// Running normally.
    #[default]
    Aok = 1,
    /// Halt instruction executed.
    Hlt = 2,
    /// Out-of-bounds memory access.
    Adr = 3,
    /// Invalid instruction encountered.
    Ins = 4,
}

impl Status {
    /// The numeric status code reported to external tooling.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Whether the engine may execute further steps.
    pub fn is_running(self) -> bool {
        self == Status::Aok
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Aok => "AOK",
            Status::Hlt => "HLT",
            Status::Adr => "ADR",
            Status::Ins => "INS",
        };
        write!(f, "{name}")
    }
}
