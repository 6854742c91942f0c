//! Scanline filter reversal.
//!
//! Each scanline is prefixed by a filter type byte selecting how its bytes
//! were predicted from already-decoded neighbors:
//!
//! ```text
//!   c b      c = upper-left, b = up
//!   a x      a = left,       x = current byte
//! ```
//!
//! Neighbors outside the image read as zero. All arithmetic is modulo 256.

/// Per-scanline prediction scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FilterType {
    None = 0,
    Sub = 1,
    Up = 2,
    Average = 3,
    Paeth = 4,
}

impl FilterType {
    /// `None` for bytes outside 0..=4.
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(FilterType::None),
            1 => Some(FilterType::Sub),
            2 => Some(FilterType::Up),
            3 => Some(FilterType::Average),
            4 => Some(FilterType::Paeth),
            _ => None,
        }
    }
}

/// Reconstruct one scanline in place.
///
/// `prev` is the previous reconstructed row (all zeros for the first row);
/// `bpp` is the byte distance to the left neighbor.
pub fn unfilter_row(filter: FilterType, row: &mut [u8], prev: &[u8], bpp: usize) {
    debug_assert_eq!(row.len(), prev.len());
    let len = row.len();
    match filter {
        FilterType::None => {}
        FilterType::Sub => {
            for i in bpp..len {
                row[i] = row[i].wrapping_add(row[i - bpp]);
            }
        }
        FilterType::Up => {
            for i in 0..len {
                row[i] = row[i].wrapping_add(prev[i]);
            }
        }
        FilterType::Average => {
            for i in 0..len {
                let a = if i >= bpp { row[i - bpp] as u16 } else { 0 };
                let b = prev[i] as u16;
                row[i] = row[i].wrapping_add(((a + b) / 2) as u8);
            }
        }
        FilterType::Paeth => {
            for i in 0..len {
                let a = if i >= bpp { row[i - bpp] } else { 0 };
                let b = prev[i];
                let c = if i >= bpp { prev[i - bpp] } else { 0 };
                row[i] = row[i].wrapping_add(paeth(a, b, c));
            }
        }
    }
}

/// Paeth predictor: whichever of left, up, upper-left is closest to
/// `a + b - c`, ties broken in that order.
#[inline]
pub fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let a16 = a as i16;
    let b16 = b as i16;
    let c16 = c as i16;
    let p = a16 + b16 - c16;
    let pa = (p - a16).unsigned_abs();
    let pb = (p - b16).unsigned_abs();
    let pc = (p - c16).unsigned_abs();
    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}
