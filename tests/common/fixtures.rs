//! Test fixtures: PNG files written into a temporary directory.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Encode RGBA8 pixels with the `png` crate.
pub fn encode_rgba(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    encode(width, height, pixels, png::ColorType::Rgba)
}

/// Encode RGB8 pixels (color type 2, which pnghash rejects).
pub fn encode_rgb(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
    encode(width, height, pixels, png::ColorType::Rgb)
}

fn encode(width: u32, height: u32, pixels: &[u8], color: png::ColorType) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("png header");
        writer.write_image_data(pixels).expect("png data");
        writer.finish().expect("png finish");
    }
    out
}

/// `width x height` filled with one RGBA color.
pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    rgba.iter()
        .copied()
        .cycle()
        .take(width as usize * height as usize * 4)
        .collect()
}

/// Gray ramp brightening to the right: every gradient bit set.
pub fn horizontal_ramp(width: u32, height: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / width.max(1)) as u8;
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
    }
    pixels
}

/// Temporary directory holding fixture files for one test.
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write raw bytes to `name` and return its path.
    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).expect("write fixture");
        path
    }

    /// Write an RGBA PNG to `name`.
    pub fn png(&self, name: &str, width: u32, height: u32, pixels: &[u8]) -> PathBuf {
        self.write(name, &encode_rgba(width, height, pixels))
    }
}
