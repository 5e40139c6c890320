//! Textual program listing loader.
//!
//! Parses the line-oriented `.yo`-style listing format and populates
//! memory:
//! 1. **Line shape:** `<hex address>: <hex byte pairs> | comment`.
//! 2. **Local recovery:** Malformed lines (no colon, bad address, empty
//!    payload) are skipped; a bad byte token aborts only that line's
//!    remaining writes, keeping the bytes already written.
//! 3. **Fatal errors:** An out-of-bounds write fails the whole load with no
//!    rollback of earlier writes.

use thiserror::Error;
use tracing::{debug, warn};

use crate::common::Addr;
use crate::mem::Memory;

/// Error terminating a program load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// A listing line addressed memory beyond capacity.
    #[error("program write out of bounds at {addr:#x}")]
    OutOfBounds {
        /// The first out-of-bounds byte address.
        addr: Addr,
    },
}

/// Loads a listing into memory, rezeroing it first.
///
/// # Errors
///
/// Returns [`LoadError::OutOfBounds`] if any byte write lands outside
/// memory. Bytes written before the failure are kept.
pub fn load(content: &str, mem: &mut Memory) -> Result<(), LoadError> {
    mem.reset();

    for line in content.lines() {
        let Some((addr_part, rest)) = line.split_once(':') else {
            continue;
        };

        // Everything after '|' is a comment.
        let payload = match rest.split_once('|') {
            Some((bytes, _comment)) => bytes,
            None => rest,
        };

        let addr_str = addr_part.trim();
        if addr_str.is_empty() {
            continue;
        }
        let Ok(mut addr) = parse_hex_addr(addr_str) else {
            debug!(line, "skipping line with unparsable address");
            continue;
        };

        let hex = payload.trim();
        if hex.is_empty() {
            // Label-only line.
            continue;
        }

        for chunk in hex.as_bytes().chunks(2) {
            // An odd trailing digit or a non-hex pair ends this line's
            // writes; earlier bytes stay in memory.
            let Some(val) = parse_byte_pair(chunk) else {
                warn!(line, "malformed byte token; keeping bytes written so far");
                break;
            };
            mem.write_byte(addr, val)
                .map_err(|_| LoadError::OutOfBounds { addr })?;
            addr += 1;
        }
    }

    Ok(())
}

/// Parses a hex address token, tolerating an optional `0x` prefix.
fn parse_hex_addr(token: &str) -> Result<Addr, std::num::ParseIntError> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    Addr::from_str_radix(digits, 16)
}

/// Parses exactly two hex digits into a byte.
fn parse_byte_pair(chunk: &[u8]) -> Option<u8> {
    if chunk.len() != 2 {
        return None;
    }
    let token = std::str::from_utf8(chunk).ok()?;
    u8::from_str_radix(token, 16).ok()
}
