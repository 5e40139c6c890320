//! Fault and memory error definitions.
//!
//! This module defines the error handling types for the simulator:
//! 1. **Memory Errors:** Out-of-bounds access reported by the flat storage.
//! 2. **Faults:** Step-aborting conditions raised by the execution engine,
//!    each mapping onto a terminal architectural [`Status`](super::Status).

use thiserror::Error;

use super::status::Status;
use super::Addr;

/// Error raised by bounds-checked memory access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The address (or the word starting at it) falls outside memory.
    #[error("memory access out of bounds at {addr:#x}")]
    OutOfBounds {
        /// The offending byte address.
        addr: Addr,
    },
}

/// Fault raised while executing a single instruction step.
///
/// A fault aborts the remainder of the step: no further stages run, no
/// partial writeback occurs, and the program counter is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Fault {
    /// An out-of-bounds memory access during fetch or the memory stage.
    #[error("invalid address {addr:#x}")]
    AddressError {
        /// The offending byte address.
        addr: Addr,
    },

    /// An unrecognized instruction class or function code.
    #[error("invalid instruction {opcode:#04x}")]
    InvalidInstruction {
        /// The offending opcode byte.
        opcode: u8,
    },
}

impl Fault {
    /// The terminal status this fault transitions the engine into.
    pub fn status(self) -> Status {
        match self {
            Fault::AddressError { .. } => Status::Adr,
            Fault::InvalidInstruction { .. } => Status::Ins,
        }
    }
}

impl From<MemoryError> for Fault {
    fn from(err: MemoryError) -> Self {
        match err {
            MemoryError::OutOfBounds { addr } => Fault::AddressError { addr },
        }
    }
}
