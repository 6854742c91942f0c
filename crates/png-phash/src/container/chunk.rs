//! Chunk framing.
//!
//! Every chunk is a 4-byte big-endian payload length, a 4-byte type tag,
//! the payload, and a 4-byte CRC. CRCs are skipped, never verified.

use std::fmt;
use std::io::{self, Read};

use super::FormatError;

/// The eight bytes every PNG stream starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Largest payload length a chunk may declare (2^31 - 1).
pub const MAX_CHUNK_LEN: u32 = 0x7fff_ffff;

/// Length of the CRC trailing every payload.
pub(crate) const CRC_LEN: u64 = 4;

/// Four-byte chunk type tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType(pub [u8; 4]);

impl ChunkType {
    pub const IHDR: Self = Self(*b"IHDR");
    pub const IDAT: Self = Self(*b"IDAT");
    pub const IEND: Self = Self(*b"IEND");

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Ancillary chunks carry a lowercase first letter (bit 5 set).
    #[inline]
    pub fn is_ancillary(&self) -> bool {
        self.0[0] & 0x20 != 0
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            if b.is_ascii_graphic() {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkType({})", self)
    }
}

/// Length and type of one chunk, read ahead of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    pub length: u32,
    pub kind: ChunkType,
}

impl ChunkHeader {
    /// Encoded size: length + type.
    pub const SIZE: usize = 8;

    pub fn parse(raw: &[u8; Self::SIZE]) -> Self {
        Self {
            length: be_u32(raw, 0),
            kind: ChunkType([raw[4], raw[5], raw[6], raw[7]]),
        }
    }

    /// Read the next header; end of stream is [`FormatError::Truncated`].
    pub fn read_from<R: Read>(src: &mut R) -> Result<Self, FormatError> {
        let mut raw = [0u8; Self::SIZE];
        src.read_exact(&mut raw)?;
        Ok(Self::parse(&raw))
    }
}

// big-endian u32 (PNG uses network byte order)
#[inline]
pub(crate) fn be_u32(d: &[u8], o: usize) -> u32 {
    u32::from_be_bytes([d[o], d[o + 1], d[o + 2], d[o + 3]])
}

/// Discard exactly `n` bytes from the source.
pub(crate) fn skip<R: Read>(src: &mut R, n: u64) -> Result<(), FormatError> {
    let skipped = io::copy(&mut src.by_ref().take(n), &mut io::sink())?;
    if skipped < n {
        return Err(FormatError::Truncated);
    }
    Ok(())
}
