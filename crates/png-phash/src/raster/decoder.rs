//! Inflate + unfilter: [`PngStream`] to [`Image`].

use miniz_oxide::inflate::{decompress_to_vec_zlib_with_limit, TINFLStatus};

use super::filter::{unfilter_row, FilterType};
use super::{DecodeError, Image};
use crate::container::{PngStream, BYTES_PER_PIXEL};

/// Decompress and unfilter a reassembled PNG stream.
///
/// Consumes the stream; the compressed payload is dropped once inflated and
/// the inflated buffer is compacted in place into the returned pixel buffer.
///
/// The inflated stream must be exactly `height * (1 + width * 4)` bytes:
/// one filter byte followed by `width * 4` color bytes per scanline.
pub fn decode(stream: PngStream) -> Result<Image, DecodeError> {
    let header = *stream.header();
    let expected = stream.raw_len();
    let payload = stream.into_payload();

    // one spare byte so a stream of exactly `expected` bytes can finish
    let limit = expected.saturating_add(1);
    let mut buf = match decompress_to_vec_zlib_with_limit(&payload, limit) {
        Ok(buf) => buf,
        Err(err) if err.status == TINFLStatus::HasMoreOutput => {
            return Err(DecodeError::TrailingData { expected });
        }
        Err(err) => return Err(DecodeError::Inflate(format!("{:?}", err.status))),
    };
    drop(payload);

    if buf.len() > expected {
        return Err(DecodeError::TrailingData { expected });
    }
    if buf.len() < expected {
        return Err(DecodeError::SizeMismatch {
            expected,
            actual: buf.len(),
        });
    }

    tracing::debug!(
        width = header.width,
        height = header.height,
        inflated_len = buf.len(),
        "Inflated image data"
    );

    let stride = header.stride();
    let height = header.height as usize;
    let zero_row = vec![0u8; stride];

    for row in 0..height {
        // filtered row `row` starts after `row` earlier filter bytes; its
        // reconstructed bytes move left to `row * stride`
        let src = row * (stride + 1);
        let dst = row * stride;

        let filter_byte = buf[src];
        let filter = FilterType::from_byte(filter_byte).ok_or(DecodeError::BadFilter {
            row: row as u32,
            filter: filter_byte,
        })?;

        buf.copy_within(src + 1..src + 1 + stride, dst);

        let (done, rest) = buf.split_at_mut(dst);
        let current = &mut rest[..stride];
        let prev = if row == 0 {
            &zero_row[..]
        } else {
            &done[dst - stride..]
        };
        unfilter_row(filter, current, prev, BYTES_PER_PIXEL);
    }

    buf.truncate(height * stride);
    Ok(Image::from_parts(header.width, header.height, buf))
}
