//! Lane-generic span kernels.
//!
//! Each kernel walks a row span in chunks of `N` pixels and finishes the
//! remainder one pixel at a time with the `N = 1` kernel. Every lane runs the
//! same `f32` operations in the same order, so results do not depend on `N`.

/// One pixel span unpacked into per-channel lanes, values in `[0, 255]`.
#[derive(Clone, Copy)]
struct Lanes<const N: usize> {
    a: [f32; N],
    r: [f32; N],
    g: [f32; N],
    b: [f32; N],
}

impl<const N: usize> Lanes<N> {
    #[inline(always)]
    fn load(pixels: &[u32]) -> Self {
        let mut lanes = Lanes {
            a: [0.0; N],
            r: [0.0; N],
            g: [0.0; N],
            b: [0.0; N],
        };
        for (i, &px) in pixels.iter().take(N).enumerate() {
            lanes.a[i] = ((px >> 24) & 0xFF) as f32;
            lanes.r[i] = ((px >> 16) & 0xFF) as f32;
            lanes.g[i] = ((px >> 8) & 0xFF) as f32;
            lanes.b[i] = (px & 0xFF) as f32;
        }
        lanes
    }

    #[inline(always)]
    fn splat(px: u32) -> Self {
        Self::load(&[px; N])
    }

    #[inline(always)]
    fn store(&self, out: &mut [u32]) {
        for (i, px) in out.iter_mut().take(N).enumerate() {
            *px = ((self.a[i] as u32) << 24)
                | ((self.r[i] as u32) << 16)
                | ((self.g[i] as u32) << 8)
                | (self.b[i] as u32);
        }
    }

    /// `src` over `self`, per channel: `dst * (1 - sa) + src * sa`, rounded half up.
    #[inline(always)]
    fn over(&self, src: &Self) -> Self {
        let mut out = *self;
        for i in 0..N {
            let sa = src.a[i] / 255.0;
            let inv = 1.0 - sa;
            out.a[i] = self.a[i] * inv + src.a[i] * sa + 0.5;
            out.r[i] = self.r[i] * inv + src.r[i] * sa + 0.5;
            out.g[i] = self.g[i] * inv + src.g[i] * sa + 0.5;
            out.b[i] = self.b[i] * inv + src.b[i] * sa + 0.5;
        }
        out
    }
}

/// Composites a single `src` pixel over `dst`.
#[inline]
pub fn blend_pixel(dst: u32, src: u32) -> u32 {
    let mut out = [dst];
    Lanes::<1>::load(&out).over(&Lanes::<1>::load(&[src])).store(&mut out);
    out[0]
}

pub(crate) fn fill_span<const N: usize>(dst: &mut [u32], color: u32) {
    let lane = [color; N];
    let mut chunks = dst.chunks_exact_mut(N);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&lane);
    }
    for px in chunks.into_remainder() {
        *px = color;
    }
}

pub(crate) fn blend_color_span<const N: usize>(dst: &mut [u32], color: u32) {
    let src = Lanes::<N>::splat(color);
    let mut chunks = dst.chunks_exact_mut(N);
    for chunk in &mut chunks {
        Lanes::<N>::load(chunk).over(&src).store(chunk);
    }
    for px in chunks.into_remainder() {
        *px = blend_pixel(*px, color);
    }
}

/// `dst` and `src` must have the same length.
pub(crate) fn blend_texture_span<const N: usize>(dst: &mut [u32], src: &[u32]) {
    let mut dst_chunks = dst.chunks_exact_mut(N);
    let mut src_chunks = src.chunks_exact(N);
    for (d, s) in (&mut dst_chunks).zip(&mut src_chunks) {
        Lanes::<N>::load(d).over(&Lanes::<N>::load(s)).store(d);
    }
    for (d, &s) in dst_chunks.into_remainder().iter_mut().zip(src_chunks.remainder()) {
        *d = blend_pixel(*d, s);
    }
}
