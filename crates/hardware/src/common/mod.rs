//! Common utilities and types used throughout the Y86-64 simulator.
//!
//! This module provides fundamental building blocks shared across all components:
//! 1. **Scalar Types:** The architectural word and address types.
//! 2. **Constants:** Memory capacity, instruction field widths, defaults.
//! 3. **Faults:** Step-aborting fault and memory error definitions.
//! 4. **Status:** The architectural status code with its numeric contract.

/// Common constants used throughout the simulator.
pub mod constants;

/// Fault and memory error definitions.
pub mod error;

/// Architectural status codes.
pub mod status;

pub use error::{Fault, MemoryError};
pub use status::Status;

/// Architectural word: 64-bit two's-complement value.
///
/// Signed because ALU flag computation and the sparse memory report both
/// interpret words as signed quantities.
pub type Word = i64;

/// Byte address into simulator memory.
pub type Addr = u64;
