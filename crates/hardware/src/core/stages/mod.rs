//! The five logical stages of the sequential engine.
//!
//! Each stage is a free function taking the CPU and the per-step signal
//! record. A stage returns `Err(Fault)` to abort the remainder of the step;
//! the engine maps the fault onto a terminal status.

/// Operand selection and register reads.
pub mod decode;

/// ALU evaluation, flag update, and condition evaluation.
pub mod execute;

/// Instruction fetch and encoding-layout handling.
pub mod fetch;

/// Data memory reads and writes.
pub mod memory;

/// Register writeback.
pub mod writeback;

pub use decode::decode;
pub use execute::execute;
pub use fetch::fetch;
pub use memory::memory;
pub use writeback::writeback;
