//! Y86-64 sequential architectural simulator library.
//!
//! This crate implements a single-cycle (SEQ) Y86-64 simulator with the following:
//! 1. **Core:** The five-stage step engine (fetch, decode, execute, memory, writeback),
//!    register file, and condition codes.
//! 2. **Memory:** A flat, bounds-checked, byte-addressable storage with little-endian words.
//! 3. **ISA:** Instruction classes, ALU operations, condition functions, and register ids.
//! 4. **Loader:** A `.yo`-style `address: hexbytes | comment` listing parser.
//! 5. **Reporting:** Per-step JSON snapshots of the architectural state.

/// Common types, constants, and fault definitions.
pub mod common;
/// Simulator configuration (defaults and JSON-deserializable structures).
pub mod config;
/// CPU core (architectural state, per-step signals, stages, ALU, conditions).
pub mod core;
/// Instruction set definitions (classes, ALU ops, conditions, register ids).
pub mod isa;
/// Textual program listing loader.
pub mod loader;
/// Flat byte-addressable memory.
pub mod mem;
/// Architectural state snapshots for external tooling.
pub mod report;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; owns memory, registers, condition codes, PC, and status.
pub use crate::core::Cpu;
/// Flat memory type; construct with `Memory::new`.
pub use crate::mem::Memory;
