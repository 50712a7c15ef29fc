// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use peniko::Color;
use spyglass_view::{Drawable, ScreenPoint, ScreenRect, ScreenSize, Surface};

/// Color used by [`Surface::debug_outline`].
pub const DEBUG_COLOR: Color = Color::from_rgb8(255, 0, 255);

const CHANNELS: usize = 4;

/// Straight-alpha RGBA8 pixel buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// Creates a fully transparent pixmap.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * CHANNELS],
        }
    }

    /// Creates a pixmap filled with `color`.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let mut pixmap = Self::new(width, height);
        pixmap.fill(color);
        pixmap
    }

    /// Overwrites every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        let rgba = to_rgba(color);
        for px in self.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row by row.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the pixmap, returning its RGBA8 bytes.
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the RGBA8 value at `(x, y)`, or `None` outside the pixmap.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.index(x, y)?;
        let mut px = [0; 4];
        px.copy_from_slice(&self.data[i..i + CHANNELS]);
        Some(px)
    }

    /// Writes one pixel; coordinates outside the pixmap are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + CHANNELS].copy_from_slice(&rgba);
        }
    }

    /// Nearest-neighbour resample to exactly `width x height`.
    #[must_use]
    pub fn resized(&self, width: u32, height: u32) -> Self {
        let mut out = Self::new(width, height);
        if self.width == 0 || self.height == 0 {
            return out;
        }
        for y in 0..height {
            let sy = source_index(y, height, self.height);
            for x in 0..width {
                let sx = source_index(x, width, self.width);
                if let Some(px) = self.pixel(sx, sy) {
                    out.set_pixel(x, y, px);
                }
            }
        }
        out
    }

    fn bounds(&self) -> ScreenRect {
        ScreenRect::new(0, 0, self.width, self.height)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * CHANNELS)
    }
}

impl core::fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Drawable for Pixmap {
    fn size(&self) -> ScreenSize {
        ScreenSize::new(self.width, self.height)
    }

    fn scaled_by(&self, factor: f64) -> Self {
        let scale = |v: u32| scaled_extent(v, factor);
        self.resized(scale(self.width), scale(self.height))
    }
}

impl Surface<Self> for Pixmap {
    fn size(&self) -> ScreenSize {
        ScreenSize::new(self.width, self.height)
    }

    fn blit(&mut self, src: &Self, at: ScreenPoint, clip: ScreenRect) {
        let footprint = ScreenRect::new(at.x, at.y, src.width, src.height);
        let area = footprint.intersect(clip).intersect(self.bounds());
        if area.is_empty() {
            return;
        }
        // `area` lies inside both pixmaps, so these offsets are non-negative.
        let (ax, ay) = (i64::from(area.x), i64::from(area.y));
        for dy in 0..i64::from(area.height) {
            for dx in 0..i64::from(area.width) {
                let (tx, ty) = (ax + dx, ay + dy);
                let (sx, sy) = (tx - i64::from(at.x), ty - i64::from(at.y));
                let (Ok(tx), Ok(ty), Ok(sx), Ok(sy)) = (
                    u32::try_from(tx),
                    u32::try_from(ty),
                    u32::try_from(sx),
                    u32::try_from(sy),
                ) else {
                    continue;
                };
                let (Some(top), Some(bottom)) = (src.pixel(sx, sy), self.pixel(tx, ty)) else {
                    continue;
                };
                self.set_pixel(tx, ty, source_over(top, bottom));
            }
        }
    }

    fn debug_outline(&mut self, rect: ScreenRect) {
        let area = rect.intersect(self.bounds());
        if area.is_empty() {
            return;
        }
        let rgba = to_rgba(DEBUG_COLOR);
        // `area` is inside the pixmap, so its edges fit in `u32`.
        let (Ok(x0), Ok(y0)) = (u32::try_from(area.x), u32::try_from(area.y)) else {
            return;
        };
        let (x1, y1) = (x0 + area.width - 1, y0 + area.height - 1);
        for x in x0..=x1 {
            self.set_pixel(x, y0, rgba);
            self.set_pixel(x, y1, rgba);
        }
        for y in y0..=y1 {
            self.set_pixel(x0, y, rgba);
            self.set_pixel(x1, y, rgba);
        }
    }
}

fn to_rgba(color: Color) -> [u8; 4] {
    let c = color.to_rgba8();
    [c.r, c.g, c.b, c.a]
}

/// Blend a straight-alpha `top` pixel over `bottom`.
fn source_over(top: [u8; 4], bottom: [u8; 4]) -> [u8; 4] {
    match top[3] {
        255 => top,
        0 => bottom,
        alpha => {
            let a = u16::from(alpha);
            let mix = |s: u8, d: u8| {
                let v = u16::from(s) * a + u16::from(d) * (255 - a);
                // Fast divide by 255.
                u8::try_from((v + 1 + (v >> 8)) >> 8).unwrap_or(u8::MAX)
            };
            let out_a = a + u16::from(bottom[3]) * (255 - a) / 255;
            [
                mix(top[0], bottom[0]),
                mix(top[1], bottom[1]),
                mix(top[2], bottom[2]),
                u8::try_from(out_a).unwrap_or(u8::MAX),
            ]
        }
    }
}

fn source_index(dst: u32, dst_len: u32, src_len: u32) -> u32 {
    let i = u64::from(dst) * u64::from(src_len) / u64::from(dst_len);
    u32::try_from(i).unwrap_or(src_len - 1).min(src_len - 1)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Scaled extents are clamped to at least one pixel and saturate above"
)]
fn scaled_extent(v: u32, factor: f64) -> u32 {
    ((f64::from(v) * factor).round() as u32).max(1)
}
