//! Architectural state snapshots.
//!
//! Serializes the post-step state for external tooling (visualizers, trace
//! diffing). The field names, numeric status codes, 0/1 flag encoding, and
//! decimal-string memory keys are a compatibility contract and must not
//! change.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::constants::WORD_SIZE;
use crate::common::{Addr, Word};
use crate::core::Cpu;
use crate::isa::reg;

/// Register values keyed by architectural name, in id order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RegisterSnapshot {
    rax: Word,
    rcx: Word,
    rdx: Word,
    rbx: Word,
    rsp: Word,
    rbp: Word,
    rsi: Word,
    rdi: Word,
    r8: Word,
    r9: Word,
    r10: Word,
    r11: Word,
    r12: Word,
    r13: Word,
    r14: Word,
}

/// Condition flags encoded as 0/1 integers.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlagSnapshot {
    /// Zero flag.
    #[serde(rename = "ZF")]
    pub zf: u8,
    /// Sign flag.
    #[serde(rename = "SF")]
    pub sf: u8,
    /// Overflow flag.
    #[serde(rename = "OF")]
    pub of: u8,
}

/// One post-step record of the complete architectural state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Snapshot {
    /// Program counter.
    #[serde(rename = "PC")]
    pub pc: Addr,
    /// Numeric status code (running=1, halted=2, address-error=3,
    /// invalid-instruction=4).
    #[serde(rename = "STAT")]
    pub stat: u8,
    /// All fifteen addressable registers.
    #[serde(rename = "REG")]
    pub reg: RegisterSnapshot,
    /// Condition flags.
    #[serde(rename = "CC")]
    pub cc: FlagSnapshot,
    /// Non-zero 8-byte-aligned memory words, keyed by byte address.
    #[serde(rename = "MEM")]
    pub mem: BTreeMap<Addr, Word>,
}

impl Snapshot {
    /// Captures the current architectural state of `cpu`.
    pub fn capture(cpu: &Cpu) -> Self {
        let regs = cpu.regs.get_all();
        let reg = RegisterSnapshot {
            rax: regs[reg::RAX as usize],
            rcx: regs[reg::RCX as usize],
            rdx: regs[reg::RDX as usize],
            rbx: regs[reg::RBX as usize],
            rsp: regs[reg::RSP as usize],
            rbp: regs[reg::RBP as usize],
            rsi: regs[reg::RSI as usize],
            rdi: regs[reg::RDI as usize],
            r8: regs[reg::R8 as usize],
            r9: regs[reg::R9 as usize],
            r10: regs[reg::R10 as usize],
            r11: regs[reg::R11 as usize],
            r12: regs[reg::R12 as usize],
            r13: regs[reg::R13 as usize],
            r14: regs[reg::R14 as usize],
        };

        let mut mem = BTreeMap::new();
        let mut addr: Addr = 0;
        while addr + WORD_SIZE <= cpu.mem.capacity() as Addr {
            // Aligned scan over the full capacity; read_word cannot fail here.
            if let Ok(val) = cpu.mem.read_word(addr) {
                if val != 0 {
                    mem.insert(addr, val);
                }
            }
            addr += WORD_SIZE;
        }

        Self {
            pc: cpu.pc,
            stat: cpu.status.code(),
            reg,
            cc: FlagSnapshot {
                zf: u8::from(cpu.cc.zf),
                sf: u8::from(cpu.cc.sf),
                of: u8::from(cpu.cc.of),
            },
            mem,
        }
    }
}
