//! Global system constants.
//!
//! This module defines system-wide constants used across the simulator:
//! 1. **Memory Constants:** Capacity and word width of the flat storage.
//! 2. **Instruction Constants:** Field sizes of the variable-length encoding.
//! 3. **Simulation Constants:** Driver-level defaults.

/// Total capacity of simulator memory in bytes (8 KiB).
pub const MEMORY_SIZE: usize = 0x2000;

/// Size of an architectural word in bytes.
pub const WORD_SIZE: u64 = 8;

/// Size of the opcode byte (instruction class nibble + function nibble).
pub const OPCODE_SIZE: u64 = 1;

/// Size of the register-specifier byte (two 4-bit register ids).
pub const REGISTER_BYTE_SIZE: u64 = 1;

/// Mask for extracting a 4-bit instruction field.
pub const NIBBLE_MASK: u8 = 0xF;

/// Shift for the high nibble of a packed byte.
pub const NIBBLE_SHIFT: u8 = 4;

/// Default cap on driver step iterations (guards against runaway programs).
pub const DEFAULT_MAX_STEPS: u64 = 10_000;
