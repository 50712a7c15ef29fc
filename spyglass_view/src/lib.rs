// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spyglass View: a 2D camera for tile-based rendering.
//!
//! This crate maps a rectangular region of an unbounded world space onto a
//! target pixel surface. It focuses on:
//! - Camera state: a world-space region whose center is the look-at point,
//!   optionally confined to world limits.
//! - Two fitting policies, [`ViewMode::Letterbox`] and [`ViewMode::Expand`].
//! - Coordinate conversion between world and screen (pixel) space.
//! - Draw dispatch: scaling and blitting host drawables, clipped to the area
//!   the region occupies on screen.
//!
//! It does **not** own windows, textures, or an event loop. Hosts are
//! expected to:
//! - Implement [`Drawable`] and [`Surface`] for their pixel types.
//! - Move the camera once per frame, ask for [`Viewport::get_bounding_box`],
//!   look up whatever overlaps it (for example with `spyglass_tiles`), and
//!   hand the result to [`Viewport::render`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use spyglass_view::{ScreenPoint, ScreenSize, ViewMode, Viewport};
//!
//! let screen = ScreenSize::new(1920, 1080);
//! let mut view = Viewport::new(ViewMode::Letterbox, Rect::new(0.0, 0.0, 400.0, 300.0))?;
//!
//! // Letterbox renders exactly the region, scaled by 1080 / 300.
//! assert_eq!(view.get_bounding_box(screen)?, Rect::new(0.0, 0.0, 400.0, 300.0));
//! assert_eq!(view.world_to_screen(screen, Point::new(40.0, 30.0))?, ScreenPoint::new(384, 108));
//!
//! // Pixels in the side padding have no world position.
//! assert_eq!(view.screen_to_world(screen, ScreenPoint::new(0, 0))?, None);
//!
//! // Follow a target smoothly.
//! view.lerp_to(Point::new(1000.0, 0.0), 0.1);
//! # Ok::<(), spyglass_view::ViewError>(())
//! ```
//!
//! ## Design notes
//!
//! - Scaling is uniform; there is no rotation or skew.
//! - Screens are passed as [`ScreenSize`] or [`ScreenRect`]; a rectangle
//!   that does not start at the origin is a contract violation reported as
//!   [`ViewError::NonOriginScreen`].
//! - Expected absence (a pixel in the letterbox padding) is an `Option`,
//!   never an error.
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod mode;
mod screen;
mod surface;
mod viewport;

pub use error::ViewError;
pub use mode::ViewMode;
pub use screen::{ScreenExtent, ScreenPoint, ScreenRect, ScreenSize};
pub use surface::{Drawable, RenderOptions, RenderStats, Surface};
pub use viewport::{Viewport, ViewportDebugInfo, ViewportSettings};
