//! Signature check, IHDR validation and IDAT reassembly.

use std::io::Read;

use super::chunk::{be_u32, skip, ChunkHeader, ChunkType, CRC_LEN, MAX_CHUNK_LEN, PNG_SIGNATURE};
use super::FormatError;

/// Truecolor with alpha, the only color type decoded.
pub const COLOR_TYPE_RGBA: u8 = 6;

/// Bytes per RGBA8 pixel; also the filter stride.
pub const BYTES_PER_PIXEL: usize = 4;

/// Resource limits applied while reading a PNG.
///
/// # Example
///
/// ```
/// use png_phash::DecodeLimits;
///
/// let limits = DecodeLimits::new().max_pixels(1024 * 1024);
/// assert_eq!(limits.max_pixels, 1024 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Largest `width * height` accepted before any allocation.
    pub max_pixels: u64,
}

impl DecodeLimits {
    /// 64 megapixels.
    pub const DEFAULT_MAX_PIXELS: u64 = 1 << 26;

    pub fn new() -> Self {
        Self {
            max_pixels: Self::DEFAULT_MAX_PIXELS,
        }
    }

    /// No pixel budget; only arithmetic overflow is rejected.
    pub fn unlimited() -> Self {
        Self {
            max_pixels: u64::MAX,
        }
    }

    #[inline]
    pub fn max_pixels(mut self, max_pixels: u64) -> Self {
        self.max_pixels = max_pixels;
        self
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self::new()
    }
}

/// Parsed IHDR payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
    pub interlace: u8,
}

impl ImageHeader {
    /// IHDR payload length.
    pub const LEN: u32 = 13;

    fn parse(raw: &[u8; Self::LEN as usize]) -> Self {
        Self {
            width: be_u32(raw, 0),
            height: be_u32(raw, 4),
            bit_depth: raw[8],
            color_type: raw[9],
            interlace: raw[12],
        }
    }

    /// Bytes in one reconstructed scanline, without the filter byte.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Size of the inflated stream: one filter byte plus `width * 4` color
    /// bytes for every scanline. `None` on overflow.
    pub fn raw_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(BYTES_PER_PIXEL)?
            .checked_add(1)?
            .checked_mul(self.height as usize)
    }

    /// Check the header against the supported subset and `limits`,
    /// returning the inflated stream size.
    fn validate(&self, limits: &DecodeLimits) -> Result<usize, FormatError> {
        if self.width == 0 || self.height == 0 {
            return Err(FormatError::BadHeader("zero width or height"));
        }
        if self.color_type != COLOR_TYPE_RGBA {
            return Err(FormatError::UnsupportedColorType(self.color_type));
        }
        if self.bit_depth != 8 {
            return Err(FormatError::UnsupportedBitDepth(self.bit_depth));
        }
        if self.interlace != 0 {
            return Err(FormatError::Interlaced);
        }
        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels > limits.max_pixels {
            return Err(FormatError::ImageTooLarge {
                width: self.width,
                height: self.height,
                max_pixels: limits.max_pixels,
            });
        }
        self.raw_len().ok_or(FormatError::Overflow)
    }
}

/// Validated header plus the concatenated IDAT payload, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngStream {
    header: ImageHeader,
    /// zlib stream; length is the sum of all IDAT chunk lengths.
    payload: Vec<u8>,
    /// Expected inflated size, checked against overflow at read time.
    raw_len: usize,
}

impl PngStream {
    #[inline]
    pub fn header(&self) -> &ImageHeader {
        &self.header
    }

    /// The concatenated IDAT payload.
    #[inline]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// `height * (1 + width * 4)`.
    #[inline]
    pub fn raw_len(&self) -> usize {
        self.raw_len
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

/// Read a PNG from `src` up to and including IEND.
///
/// Ancillary and unknown chunks are skipped unread. CRCs are not checked.
/// Nothing past IEND is consumed.
///
/// # Example
///
/// ```
/// use png_phash::{read_png, DecodeLimits, FormatError};
///
/// let err = read_png(&b"GIF89a.."[..], &DecodeLimits::default()).unwrap_err();
/// assert!(matches!(err, FormatError::BadSignature));
/// ```
pub fn read_png<R: Read>(mut src: R, limits: &DecodeLimits) -> Result<PngStream, FormatError> {
    read_signature(&mut src)?;
    let header = read_ihdr(&mut src)?;
    let raw_len = header.validate(limits)?;

    tracing::debug!(
        width = header.width,
        height = header.height,
        "Parsed IHDR"
    );

    let mut payload = Vec::new();
    let mut idat_chunks = 0usize;

    loop {
        let chunk = ChunkHeader::read_from(&mut src)?;
        if chunk.length > MAX_CHUNK_LEN {
            return Err(FormatError::Overflow);
        }

        match chunk.kind {
            ChunkType::IDAT => {
                let len = chunk.length as usize;
                let total = payload
                    .len()
                    .checked_add(len)
                    .ok_or(FormatError::Overflow)?;
                // capacity follows the bytes actually read, not the declared length
                src.by_ref()
                    .take(u64::from(chunk.length))
                    .read_to_end(&mut payload)?;
                if payload.len() != total {
                    return Err(FormatError::Truncated);
                }
                skip(&mut src, CRC_LEN)?;
                idat_chunks += 1;
                tracing::trace!(length = chunk.length, total, "Appended IDAT chunk");
            }
            ChunkType::IEND => break,
            other => {
                tracing::trace!(
                    chunk = %other,
                    length = chunk.length,
                    ancillary = other.is_ancillary(),
                    "Skipping chunk"
                );
                skip(&mut src, u64::from(chunk.length) + CRC_LEN)?;
            }
        }
    }

    if payload.is_empty() {
        return Err(FormatError::MissingImageData);
    }

    tracing::debug!(
        idat_chunks,
        compressed_len = payload.len(),
        "Reassembled image data"
    );

    Ok(PngStream {
        header,
        payload,
        raw_len,
    })
}

fn read_signature<R: Read>(src: &mut R) -> Result<(), FormatError> {
    let mut sig = Vec::with_capacity(PNG_SIGNATURE.len());
    src.by_ref()
        .take(PNG_SIGNATURE.len() as u64)
        .read_to_end(&mut sig)?;

    // a short prefix of the real signature is truncation, anything else is not PNG
    if sig[..] != PNG_SIGNATURE[..sig.len()] {
        return Err(FormatError::BadSignature);
    }
    if sig.len() < PNG_SIGNATURE.len() {
        return Err(FormatError::Truncated);
    }
    Ok(())
}

fn read_ihdr<R: Read>(src: &mut R) -> Result<ImageHeader, FormatError> {
    let chunk = ChunkHeader::read_from(src)?;
    if chunk.kind != ChunkType::IHDR {
        return Err(FormatError::BadHeader("first chunk is not IHDR"));
    }
    if chunk.length != ImageHeader::LEN {
        return Err(FormatError::BadHeader("IHDR length is not 13"));
    }

    let mut raw = [0u8; ImageHeader::LEN as usize];
    src.read_exact(&mut raw)?;
    skip(src, CRC_LEN)?;

    Ok(ImageHeader::parse(&raw))
}
