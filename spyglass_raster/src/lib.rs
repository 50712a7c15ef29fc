// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spyglass Raster: a reference CPU pixmap.
//!
//! This crate provides [`Pixmap`], a small RGBA8 pixel buffer implementing
//! [`spyglass_view::Drawable`] and [`spyglass_view::Surface`]. It is meant for
//! tests, headless demos, and as a template for host integrations:
//! - Scaling is nearest-neighbour.
//! - Blits are source-over and honor the clip rectangle exactly.
//! - Debug outlines are drawn in [`DEBUG_COLOR`].
//!
//! It is intentionally *not* a fast renderer; real hosts implement the
//! traits for their GPU textures or platform surfaces.
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use spyglass_raster::{Color, Pixmap};
//! use spyglass_view::{RenderOptions, ViewMode, Viewport};
//!
//! let view = Viewport::new(ViewMode::Letterbox, Rect::new(0.0, 0.0, 40.0, 30.0))?;
//! let mut screen = Pixmap::new(80, 60);
//! let tile = Pixmap::filled(10, 10, Color::from_rgb8(200, 255, 200));
//!
//! view.render(&mut screen, [(Point::new(0.0, 0.0), &tile)], RenderOptions::default())?;
//! assert_eq!(screen.pixel(19, 19), Some([200, 255, 200, 255]));
//! assert_eq!(screen.pixel(20, 20), Some([0, 0, 0, 0]));
//! # Ok::<(), spyglass_view::ViewError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod pixmap;

pub use peniko::Color;
pub use pixmap::{DEBUG_COLOR, Pixmap};
