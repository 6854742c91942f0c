//! PNG builders shared by the unit tests.
//!
//! CRC fields are written as zeros; the reader skips them.

use crate::container::PNG_SIGNATURE;
use crate::raster::paeth;

/// One chunk: length, type, payload, zeroed CRC.
pub fn chunk(kind: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(12 + payload.len());
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(payload);
    out.extend_from_slice(&[0; 4]);
    out
}

/// 13-byte IHDR payload, non-interlaced.
pub fn ihdr_payload(width: u32, height: u32, bit_depth: u8, color_type: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(13);
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out.extend_from_slice(&[bit_depth, color_type, 0, 0, 0]);
    out
}

/// Signature followed by the given chunks.
pub fn png_from_chunks(chunks: &[Vec<u8>]) -> Vec<u8> {
    let mut out = PNG_SIGNATURE.to_vec();
    for c in chunks {
        out.extend_from_slice(c);
    }
    out
}

pub fn zlib(data: &[u8]) -> Vec<u8> {
    miniz_oxide::deflate::compress_to_vec_zlib(data, 6)
}

/// RGBA8 PNG whose single IDAT holds `raw` (filter bytes included) compressed.
pub fn png_from_scanlines(width: u32, height: u32, raw: &[u8]) -> Vec<u8> {
    png_from_chunks(&[
        chunk(b"IHDR", &ihdr_payload(width, height, 8, 6)),
        chunk(b"IDAT", &zlib(raw)),
        chunk(b"IEND", &[]),
    ])
}

/// RGBA8 PNG of `pixels`, filtering row `y` with `filters[y % filters.len()]`.
pub fn rgba_png_filtered(width: u32, height: u32, pixels: &[u8], filters: &[u8]) -> Vec<u8> {
    assert!(!filters.is_empty(), "at least one filter type");
    let stride = width as usize * 4;
    assert_eq!(pixels.len(), stride * height as usize);

    let zero_row = vec![0u8; stride];
    let mut raw = Vec::with_capacity((stride + 1) * height as usize);
    for (y, row) in pixels.chunks_exact(stride).enumerate() {
        let prev = if y == 0 {
            &zero_row[..]
        } else {
            &pixels[(y - 1) * stride..y * stride]
        };
        let filter = filters[y % filters.len()];
        raw.push(filter);
        for i in 0..stride {
            let a = if i >= 4 { row[i - 4] } else { 0 };
            let b = prev[i];
            let c = if i >= 4 { prev[i - 4] } else { 0 };
            let predictor = match filter {
                0 => 0,
                1 => a,
                2 => b,
                3 => ((a as u16 + b as u16) / 2) as u8,
                4 => paeth(a, b, c),
                other => panic!("no encoder for filter {}", other),
            };
            raw.push(row[i].wrapping_sub(predictor));
        }
    }
    png_from_scanlines(width, height, &raw)
}

/// Solid `width x height` RGBA8 PNG filled with `rgba`.
pub fn rgba_png(width: u32, height: u32, rgba: &[u8; 4]) -> Vec<u8> {
    let pixels: Vec<u8> = rgba
        .iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 4)
        .collect();
    rgba_png_filtered(width, height, &pixels, &[0])
}

/// Encode through the `png` crate with a fixed row filter.
pub fn encode_with_png_crate(
    width: u32,
    height: u32,
    pixels: &[u8],
    filter: png::FilterType,
) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_filter(filter);
        encoder.set_adaptive_filter(png::AdaptiveFilterType::NonAdaptive);
        let mut writer = encoder.write_header().expect("png header");
        writer.write_image_data(pixels).expect("png data");
        writer.finish().expect("png finish");
    }
    out
}
