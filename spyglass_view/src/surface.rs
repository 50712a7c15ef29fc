// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-provided drawing capabilities consumed by [`crate::Viewport::render`].

use crate::screen::{ScreenPoint, ScreenRect, ScreenSize};

/// Something with a pixel size that can produce a rescaled copy of itself.
///
/// Tile textures and sprites implement this.
pub trait Drawable {
    /// Size in pixels.
    fn size(&self) -> ScreenSize;

    /// Returns a copy scaled uniformly by `factor`.
    ///
    /// `factor` is always positive. Implementations must preserve the
    /// aspect ratio.
    #[must_use]
    fn scaled_by(&self, factor: f64) -> Self
    where
        Self: Sized;
}

/// A pixel target that drawables of type `D` can be composited into.
pub trait Surface<D: Drawable> {
    /// Size of the surface; its origin is always `(0, 0)`.
    fn size(&self) -> ScreenSize;

    /// Copies `src` with its top-left corner at `at`.
    ///
    /// Only pixels inside both `clip` and the surface bounds may be written.
    fn blit(&mut self, src: &D, at: ScreenPoint, clip: ScreenRect);

    /// Draws a diagnostic outline of `rect`.
    ///
    /// Only called for debug renders. The default does nothing.
    fn debug_outline(&mut self, rect: ScreenRect) {
        let _ = rect;
    }
}

/// Options for [`crate::Viewport::render`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw diagnostic overlays. Item pixels are unaffected.
    pub debug: bool,
}

/// Counters returned from [`crate::Viewport::render`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Items consumed from the input sequence.
    pub visited: usize,
    /// Items whose clipped footprint covered at least one pixel.
    pub drawn: usize,
}
