//! Binary PPM (P6) export of a framebuffer. Alpha is dropped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use softdesk_compositor::Texture;

pub fn write_ppm<W: Write>(out: &mut W, framebuffer: &Texture) -> std::io::Result<()> {
    write!(out, "P6\n{} {}\n255\n", framebuffer.width(), framebuffer.height())?;
    let mut row = Vec::with_capacity(framebuffer.width() as usize * 3);
    for line in framebuffer.pixels().chunks_exact(framebuffer.width().max(1) as usize) {
        row.clear();
        for &argb in line {
            row.extend_from_slice(&[(argb >> 16) as u8, (argb >> 8) as u8, argb as u8]);
        }
        out.write_all(&row)?;
    }
    Ok(())
}

pub fn dump(path: &Path, framebuffer: &Texture) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_ppm(&mut out, framebuffer).with_context(|| format!("Failed to write {}", path.display()))?;
    out.flush().with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}
