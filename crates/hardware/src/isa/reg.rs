//! Y86-64 register id constants and display names.
//!
//! Register ids are 4-bit fields in the register-specifier byte. Ids 0-14
//! name general-purpose registers; id 15 is the `RNONE` sentinel meaning
//! "no register" (writes discarded, reads yield zero).

/// Register id as encoded in a 4-bit specifier field.
pub type RegId = u8;

/// Register `%rax`.
pub const RAX: RegId = 0x0;
/// Register `%rcx`.
pub const RCX: RegId = 0x1;
/// Register `%rdx`.
pub const RDX: RegId = 0x2;
/// Register `%rbx`.
pub const RBX: RegId = 0x3;
/// Register `%rsp` (stack pointer).
pub const RSP: RegId = 0x4;
/// Register `%rbp`.
pub const RBP: RegId = 0x5;
/// Register `%rsi`.
pub const RSI: RegId = 0x6;
/// Register `%rdi`.
pub const RDI: RegId = 0x7;
/// Register `%r8`.
pub const R8: RegId = 0x8;
/// Register `%r9`.
pub const R9: RegId = 0x9;
/// Register `%r10`.
pub const R10: RegId = 0xA;
/// Register `%r11`.
pub const R11: RegId = 0xB;
/// Register `%r12`.
pub const R12: RegId = 0xC;
/// Register `%r13`.
pub const R13: RegId = 0xD;
/// Register `%r14`.
pub const R14: RegId = 0xE;
/// The "no register" sentinel.
pub const RNONE: RegId = 0xF;

/// Number of addressable general-purpose registers.
pub const NUM_GPRS: usize = 15;

/// Canonical lowercase names of the addressable registers, in id order.
pub const NAMES: [&str; NUM_GPRS] = [
    "rax", "rcx", "rdx", "rbx", "rsp", "rbp", "rsi", "rdi", "r8", "r9", "r10", "r11", "r12",
    "r13", "r14",
];
