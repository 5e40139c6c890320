//! # Program Loader Tests
//!
//! Line-shape handling, local recovery of malformed lines, and fatal
//! out-of-bounds behavior. The scenarios mirror the accepted quirks of the
//! listing format.

use proptest::prelude::*;

use y86_core::common::constants::MEMORY_SIZE;
use y86_core::loader::{self, LoadError};
use y86_core::Memory;

#[test]
fn test_basic_instruction_load() {
    let yo = "0x000: 30f40002000000000000 | irmovq\n0x00a: 00                 | halt\n";
    let mut mem = Memory::default();
    loader::load(yo, &mut mem).unwrap();

    assert_eq!(mem.read_byte(0x000).unwrap(), 0x30);
    assert_eq!(mem.read_byte(0x001).unwrap(), 0xf4);
    assert_eq!(mem.read_byte(0x002).unwrap(), 0x00);
    assert_eq!(mem.read_byte(0x00a).unwrap(), 0x00);
}

#[test]
fn test_label_only_line_writes_nothing() {
    let yo = "0x010:                      | main:\n0x010: 30f40000000000000000 | irmovq\n";
    let mut mem = Memory::default();
    loader::load(yo, &mut mem).unwrap();
    assert_eq!(mem.read_byte(0x010).unwrap(), 0x30);
}

#[test]
fn test_comment_and_blank_lines_are_skipped() {
    let yo = "                            | comment line\n\n0x020: 00 | halt\n";
    let mut mem = Memory::default();
    loader::load(yo, &mut mem).unwrap();
    assert_eq!(mem.read_byte(0x020).unwrap(), 0x00);
}

#[test]
fn test_continuous_bytes() {
    let yo = "0x100: a1b2c3d4e5f60708 | data\n";
    let mut mem = Memory::default();
    loader::load(yo, &mut mem).unwrap();
    for (i, expected) in [0xa1, 0xb2, 0xc3, 0xd4, 0xe5, 0xf6, 0x07, 0x08]
        .iter()
        .enumerate()
    {
        assert_eq!(mem.read_byte(0x100 + i as u64).unwrap(), *expected);
    }
}

#[test]
fn test_bad_byte_token_keeps_bytes_before_it() {
    // "11" parses and is written; "zz" aborts the rest of the line.
    let yo = "0x000: 11zzff | partial\n0x010: 30 | next line still loads\n";
    let mut mem = Memory::default();
    loader::load(yo, &mut mem).unwrap();

    assert_eq!(mem.read_byte(0x000).unwrap(), 0x11);
    assert_eq!(mem.read_byte(0x001).unwrap(), 0x00);
    assert_eq!(mem.read_byte(0x002).unwrap(), 0x00);
    assert_eq!(mem.read_byte(0x010).unwrap(), 0x30);
}

#[test]
fn test_odd_length_token_drops_trailing_digit() {
    let yo = "0x000: 30f4a | odd\n";
    let mut mem = Memory::default();
    loader::load(yo, &mut mem).unwrap();

    assert_eq!(mem.read_byte(0x000).unwrap(), 0x30);
    assert_eq!(mem.read_byte(0x001).unwrap(), 0xf4);
    // The lone trailing "a" is not a byte; nothing is written for it.
    assert_eq!(mem.read_byte(0x002).unwrap(), 0x00);
}

#[test]
fn test_unparsable_address_skips_whole_line() {
    let yo = "xyz!: 30f4 | invalid address\n0x010: 00    | valid\n";
    let mut mem = Memory::default();
    loader::load(yo, &mut mem).unwrap();

    assert_eq!(mem.read_byte(0x000).unwrap(), 0x00);
    assert_eq!(mem.read_byte(0x010).unwrap(), 0x00);
}

#[test]
fn test_line_without_colon_is_skipped() {
    let yo = "just some text\n0x000: ff | valid\n";
    let mut mem = Memory::default();
    loader::load(yo, &mut mem).unwrap();
    assert_eq!(mem.read_byte(0x000).unwrap(), 0xff);
}

#[test]
fn test_out_of_bounds_write_fails_the_load() {
    let yo = "0xFFFFFF: 30 | out of bounds\n";
    let mut mem = Memory::default();
    assert_eq!(
        loader::load(yo, &mut mem),
        Err(LoadError::OutOfBounds { addr: 0xFFFFFF })
    );
}

#[test]
fn test_out_of_bounds_does_not_roll_back_prior_writes() {
    let cap = MEMORY_SIZE as u64;
    let yo = format!("0x000: aa | ok\n{cap:#x}: bb | too far\n");
    let mut mem = Memory::default();
    assert!(loader::load(&yo, &mut mem).is_err());
    assert_eq!(mem.read_byte(0x000).unwrap(), 0xaa);
}

#[test]
fn test_load_rezeros_previous_contents() {
    let mut mem = Memory::default();
    mem.write_byte(0x040, 0x99).unwrap();
    loader::load("0x000: 00 | halt\n", &mut mem).unwrap();
    assert_eq!(mem.read_byte(0x040).unwrap(), 0);
}

#[test]
fn test_run_across_capacity_boundary_fails_mid_line() {
    let start = MEMORY_SIZE as u64 - 1;
    let yo = format!("{start:#x}: aabb | crosses the end\n");
    let mut mem = Memory::default();
    assert_eq!(
        loader::load(&yo, &mut mem),
        Err(LoadError::OutOfBounds {
            addr: MEMORY_SIZE as u64
        })
    );
    // The in-bounds first byte was written before the failure.
    assert_eq!(mem.read_byte(start).unwrap(), 0xaa);
}

proptest! {
    /// The loader must never panic, whatever the input text.
    #[test]
    fn prop_load_never_panics(content in "\\PC{0,256}") {
        let mut mem = Memory::default();
        let _ = loader::load(&content, &mut mem);
    }

    /// Lines of valid shape always load, and every written byte is
    /// readable back at the advancing address.
    #[test]
    fn prop_wellformed_line_loads(addr in 0u64..(MEMORY_SIZE as u64 - 64), bytes in proptest::collection::vec(any::<u8>(), 1..32)) {
        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        let yo = format!("{addr:#x}: {hex} | generated\n");
        let mut mem = Memory::default();
        loader::load(&yo, &mut mem).unwrap();
        for (i, b) in bytes.iter().enumerate() {
            prop_assert_eq!(mem.read_byte(addr + i as u64).unwrap(), *b);
        }
    }
}
