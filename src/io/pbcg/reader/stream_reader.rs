//! Big-endian primitive reader and the normalization helpers.
//!
//! Every multi-byte field in a PBCG blob is big-endian. The reader wraps a
//! `Cursor` over the borrowed blob; the cursor only moves forward, and a read
//! that would run past the end fails with [`PbcgError::TruncatedInput`]
//! without consuming anything.

use std::f64::consts::PI;
use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt};

use crate::error::{PbcgError, Result};
use crate::io::pbcg::constants::{SIGNED_LIMIT, UNSIGNED_LIMIT};

/// Map a `u16` onto [0.0, 1.0].
#[inline]
pub fn normalize_unsigned(value: u16) -> f64 {
    value as f64 / UNSIGNED_LIMIT
}

/// Map an `i16` onto [-1.0078, 1.0].
///
/// The divisor is 32767, so `i16::MIN` lands slightly below -1. Not clamped.
#[inline]
pub fn normalize_signed(value: i16) -> f64 {
    value as f64 / SIGNED_LIMIT
}

/// Map a `u16` onto [0, 2π].
#[inline]
pub fn normalize_angle(value: u16) -> f64 {
    (2.0 * PI * value as f64) / UNSIGNED_LIMIT
}

/// Read a big-endian `u16` at `offset`, returning the value and the next offset.
pub fn read_u16_at(blob: &[u8], offset: usize) -> Result<(u16, usize)> {
    let mut reader = PbcgStreamReader::new_at(blob, offset);
    let value = reader.read_u16()?;
    Ok((value, reader.position()))
}

/// Read a big-endian two's-complement `i16` at `offset`.
pub fn read_i16_at(blob: &[u8], offset: usize) -> Result<(i16, usize)> {
    let mut reader = PbcgStreamReader::new_at(blob, offset);
    let value = reader.read_i16()?;
    Ok((value, reader.position()))
}

/// Forward-only reader over a PBCG blob.
pub struct PbcgStreamReader<'a> {
    stream: Cursor<&'a [u8]>,
}

impl<'a> PbcgStreamReader<'a> {
    pub fn new(blob: &'a [u8]) -> Self {
        Self {
            stream: Cursor::new(blob),
        }
    }

    /// Create a reader starting at `offset`.
    pub fn new_at(blob: &'a [u8], offset: usize) -> Self {
        let mut stream = Cursor::new(blob);
        stream.set_position(offset as u64);
        Self { stream }
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.stream.position() as usize
    }

    /// Bytes left after the cursor.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.stream.get_ref().len().saturating_sub(self.position())
    }

    /// Look at up to `len` bytes without consuming them.
    pub fn peek(&self, len: usize) -> &'a [u8] {
        let blob: &'a [u8] = *self.stream.get_ref();
        let start = self.position().min(blob.len());
        let end = start.saturating_add(len).min(blob.len());
        &blob[start..end]
    }

    fn ensure(&self, len: usize) -> Result<()> {
        let remaining = self.remaining();
        if remaining < len {
            return Err(PbcgError::TruncatedInput {
                offset: self.position(),
                needed: len - remaining,
            });
        }
        Ok(())
    }

    fn truncated(&self, len: usize) -> PbcgError {
        PbcgError::TruncatedInput {
            offset: self.position(),
            needed: len.saturating_sub(self.remaining()).max(1),
        }
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        self.stream.read_u8().map_err(|_| self.truncated(1))
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.ensure(2)?;
        self.stream
            .read_u16::<BigEndian>()
            .map_err(|_| self.truncated(2))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.ensure(2)?;
        self.stream
            .read_i16::<BigEndian>()
            .map_err(|_| self.truncated(2))
    }

    /// Consume `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.ensure(len)?;
        let bytes = self.peek(len);
        self.stream.set_position((self.position() + len) as u64);
        Ok(bytes)
    }
}
