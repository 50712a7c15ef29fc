// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common query interface over tile stores.

use kurbo::{Point, Rect};

use crate::flat::{FlatScan, FlatTiles};
use crate::grid::{GridQuery, TileGrid};

/// A read-only store that can list the tiles overlapping a world rectangle.
///
/// Implemented by [`TileGrid`] (indexed, `O(k)`) and [`FlatTiles`] (linear
/// scan, `O(N)`). Both return the same set of tiles for any rectangle, so
/// hosts and benchmarks can swap one for the other.
pub trait TileSource<P> {
    /// Iterator over `(top-left position, payload)` pairs.
    type Tiles<'a>: Iterator<Item = (Point, &'a P)>
    where
        Self: 'a,
        P: 'a;

    /// Side length of every tile.
    fn tile_size(&self) -> f64;

    /// Tiles whose area overlaps `bbox`.
    fn tiles_in(&self, bbox: Rect) -> Self::Tiles<'_>;

    /// Calls `f` for every tile overlapping `bbox`.
    fn visit_rect<F: FnMut(Point, &P)>(&self, bbox: Rect, mut f: F) {
        for (position, payload) in self.tiles_in(bbox) {
            f(position, payload);
        }
    }
}

impl<P> TileSource<P> for TileGrid<P> {
    type Tiles<'a>
        = GridQuery<'a, P>
    where
        P: 'a;

    fn tile_size(&self) -> f64 {
        self.layout().tile_size()
    }

    fn tiles_in(&self, bbox: Rect) -> Self::Tiles<'_> {
        self.query(bbox)
    }
}

impl<P> TileSource<P> for FlatTiles<P> {
    type Tiles<'a>
        = FlatScan<'a, P>
    where
        P: 'a;

    fn tile_size(&self) -> f64 {
        self.tile_size()
    }

    fn tiles_in(&self, bbox: Rect) -> Self::Tiles<'_> {
        self.scan(bbox)
    }
}
