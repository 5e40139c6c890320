//! Flat byte-addressable simulator memory.
//!
//! This module implements the storage container backing the engine:
//! 1. **Byte Access:** Bounds-checked single-byte reads and writes.
//! 2. **Word Access:** Bounds-checked 8-byte little-endian reads and writes.
//! 3. **Lifecycle:** Zero-filled at construction; `reset` rezeros in place.

use crate::common::constants::{MEMORY_SIZE, WORD_SIZE};
use crate::common::{Addr, MemoryError, Word};

/// Flat, fixed-capacity byte memory.
///
/// All addresses `0 <= a < capacity` are valid for byte access; word access
/// additionally requires `a <= capacity - 8`. Words are little-endian.
#[derive(Debug, Clone)]
pub struct Memory {
    data: Vec<u8>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(MEMORY_SIZE)
    }
}

impl Memory {
    /// Creates a zero-filled memory of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
        }
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Rezeros every byte, keeping the capacity.
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Writes a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if `addr` is outside memory.
    pub fn write_byte(&mut self, addr: Addr, val: u8) -> Result<(), MemoryError> {
        let slot = self
            .data
            .get_mut(addr as usize)
            .ok_or(MemoryError::OutOfBounds { addr })?;
        *slot = val;
        Ok(())
    }

    /// Reads a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if `addr` is outside memory.
    pub fn read_byte(&self, addr: Addr) -> Result<u8, MemoryError> {
        self.data
            .get(addr as usize)
            .copied()
            .ok_or(MemoryError::OutOfBounds { addr })
    }

    /// Writes an 8-byte little-endian word.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] unless the full word fits.
    pub fn write_word(&mut self, addr: Addr, val: Word) -> Result<(), MemoryError> {
        self.check_word_bounds(addr)?;
        let at = addr as usize;
        self.data[at..at + WORD_SIZE as usize].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Reads an 8-byte little-endian word.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] unless the full word fits.
    pub fn read_word(&self, addr: Addr) -> Result<Word, MemoryError> {
        self.check_word_bounds(addr)?;
        let at = addr as usize;
        let mut bytes = [0u8; WORD_SIZE as usize];
        bytes.copy_from_slice(&self.data[at..at + WORD_SIZE as usize]);
        Ok(Word::from_le_bytes(bytes))
    }

    /// Word bounds check. Compares against `capacity - 8` rather than
    /// computing `addr + 8`, which could wrap for addresses near `u64::MAX`.
    fn check_word_bounds(&self, addr: Addr) -> Result<(), MemoryError> {
        let capacity = self.data.len() as Addr;
        if capacity < WORD_SIZE || addr > capacity - WORD_SIZE {
            return Err(MemoryError::OutOfBounds { addr });
        }
        Ok(())
    }
}
