//! 32-bit BMP decoding.
//!
//! Only uncompressed (`BI_RGB`) and `BI_BITFIELDS` images with 32 bits per
//! pixel are accepted. Pixels are stored as little-endian BGRA, which reads
//! directly as a packed `0xAARRGGBB` word. Colour channels are premultiplied
//! by alpha as they are decoded.

use std::fs;
use std::path::Path;

use crate::error::AssetError;
use crate::texture::Texture;

const MAGIC: u16 = 0x4D42;
const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_MIN_LEN: usize = 40;
const BI_RGB: u32 = 0;
const BI_BITFIELDS: u32 = 3;

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]])
}

fn read_i32(bytes: &[u8], offset: usize) -> i32 {
    read_u32(bytes, offset) as i32
}

/// `c * a / 255` on each colour channel; alpha is kept.
pub fn premultiply(argb: u32) -> u32 {
    let a = argb >> 24;
    let scale = |shift: u32| (((argb >> shift) & 0xFF) * a / 255) << shift;
    (a << 24) | scale(16) | scale(8) | scale(0)
}

/// Decodes a BMP file held in memory.
pub fn load_bitmap(bytes: &[u8]) -> Result<Texture, AssetError> {
    let header_len = FILE_HEADER_LEN + INFO_HEADER_MIN_LEN;
    if bytes.len() < header_len {
        return Err(AssetError::Truncated {
            needed: header_len,
            actual: bytes.len(),
        });
    }

    let magic = read_u16(bytes, 0);
    if magic != MAGIC {
        return Err(AssetError::BadMagic(magic));
    }
    let data_offset = read_u32(bytes, 10) as usize;
    let width = read_i32(bytes, 18);
    let height = read_i32(bytes, 22);
    let bit_count = read_u16(bytes, 28);
    let compression = read_u32(bytes, 30);

    if bit_count != 32 {
        return Err(AssetError::UnsupportedBitDepth(bit_count));
    }
    if compression != BI_RGB && compression != BI_BITFIELDS {
        return Err(AssetError::UnsupportedCompression(compression));
    }
    if width <= 0 || height == 0 || height == i32::MIN {
        return Err(AssetError::InvalidDimensions { width, height });
    }

    let w = width as usize;
    let h = height.unsigned_abs() as usize;
    let row_bytes = w * 4;
    let needed = row_bytes
        .checked_mul(h)
        .and_then(|n| n.checked_add(data_offset))
        .ok_or(AssetError::InvalidDimensions { width, height })?;
    if bytes.len() < needed {
        return Err(AssetError::Truncated {
            needed,
            actual: bytes.len(),
        });
    }

    // Positive height: rows are stored bottom-up.
    let bottom_up = height > 0;
    let mut pixels = Vec::with_capacity(w * h);
    for y in 0..h {
        let stored_row = if bottom_up { h - 1 - y } else { y };
        let row = &bytes[data_offset + stored_row * row_bytes..][..row_bytes];
        pixels.extend(
            row.chunks_exact(4)
                .map(|px| premultiply(u32::from_le_bytes([px[0], px[1], px[2], px[3]]))),
        );
    }

    Texture::from_pixels(w as u32, h as u32, pixels)
}

/// Reads and decodes the BMP file at `path`.
pub fn load_bitmap_file(path: &Path) -> Result<Texture, AssetError> {
    let bytes = fs::read(path).map_err(|source| AssetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_bitmap(&bytes)
}
