// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spyglass Tiles: a uniform-grid spatial index for 2D tile maps.
//!
//! A [`TileGrid`] maps integer tile coordinates to tiles (a world position
//! plus a caller payload). It is generated once, deterministically, and is
//! read-only afterwards. Its main query, [`TileGrid::query`], answers "which
//! tiles overlap this world rectangle" by walking only the grid cells the
//! rectangle covers, so the cost follows the number of tiles returned rather
//! than the number stored.
//!
//! [`FlatTiles`] keeps the same tiles in a plain vector and answers the same
//! question with a linear scan. Both implement [`TileSource`] and return the
//! same set of tiles for any rectangle.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use spyglass_tiles::{GridSpec, TileGrid};
//!
//! // 50x50 tiles of 32 world units centered on the origin. Every tile keeps
//! // its sampled tone as payload.
//! let spec = GridSpec::centered(50, 50, 32.0);
//! let grid = TileGrid::generate_seeded(&spec, 123, |_coord, tone| tone)?;
//!
//! // Four tiles overlap a 64x64 box aligned to the grid.
//! let visible: Vec<_> = grid.query(Rect::new(0.0, 0.0, 64.0, 64.0)).collect();
//! assert_eq!(visible.len(), 4);
//! # Ok::<(), spyglass_tiles::TileError>(())
//! ```
//!
//! Generation takes a caller-owned random source ([`TileGrid::generate`]);
//! [`TileGrid::generate_seeded`] is a shortcut that seeds a `ChaCha8Rng`, so
//! two call sites with the same seed build identical grids without sharing
//! any state.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod flat;
mod grid;
mod layout;
mod source;

pub use error::TileError;
pub use flat::{FlatScan, FlatTiles};
pub use grid::{GridQuery, GridSpec, TONE_RANGE, Tile, TileGrid};
pub use layout::{GridLayout, TileCoord, TileSpan};
pub use source::TileSource;
