// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat tile list with linear scans. Small and simple; the reference the grid
//! query is checked against.

use core::fmt::Debug;
use core::iter::FusedIterator;

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::grid::{Tile, TileGrid};
use crate::layout::overlaps;

/// Tiles in a plain vector, queried by testing every tile.
#[derive(Clone)]
pub struct FlatTiles<P> {
    tile_size: f64,
    tiles: Vec<Tile<P>>,
}

impl<P> FlatTiles<P> {
    /// Wraps tiles that all share `tile_size`.
    #[must_use]
    pub fn new(tile_size: f64, tiles: Vec<Tile<P>>) -> Self {
        Self { tile_size, tiles }
    }

    /// Copies every tile of `grid`, row by row.
    #[must_use]
    pub fn from_grid(grid: &TileGrid<P>) -> Self
    where
        P: Clone,
    {
        let tiles = grid
            .sorted_tiles()
            .into_iter()
            .map(|(_, tile)| tile.clone())
            .collect();
        Self::new(grid.layout().tile_size(), tiles)
    }

    /// Side length of every tile.
    #[must_use]
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Stored tiles.
    #[must_use]
    pub fn tiles(&self) -> &[Tile<P>] {
        &self.tiles
    }

    /// Lazily yields tiles whose area overlaps `bbox`, in storage order.
    ///
    /// Touching edges do not count as overlap. Costs `O(N)` in the number of
    /// stored tiles.
    #[must_use]
    pub fn scan(&self, bbox: Rect) -> FlatScan<'_, P> {
        FlatScan {
            tiles: self.tiles.iter(),
            bbox: bbox.abs(),
            tile_size: self.tile_size,
        }
    }
}

impl<P> Debug for FlatTiles<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatTiles")
            .field("tile_size", &self.tile_size)
            .field("tiles", &self.tiles.len())
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`FlatTiles::scan`].
#[derive(Clone, Debug)]
pub struct FlatScan<'a, P> {
    tiles: core::slice::Iter<'a, Tile<P>>,
    bbox: Rect,
    tile_size: f64,
}

impl<'a, P> Iterator for FlatScan<'a, P> {
    type Item = (Point, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        let (bbox, size) = (self.bbox, self.tile_size);
        self.tiles
            .find(|tile| overlaps(tile.position, size, bbox))
            .map(|tile| (tile.position, &tile.payload))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.tiles.size_hint().1)
    }
}

impl<P> FusedIterator for FlatScan<'_, P> {}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Point, Rect};

    use super::FlatTiles;
    use crate::grid::Tile;

    #[test]
    fn scan_excludes_touching_tiles() {
        let flat = FlatTiles::new(
            32.0,
            vec![
                Tile {
                    position: Point::new(0.0, 0.0),
                    payload: 0,
                },
                Tile {
                    position: Point::new(32.0, 0.0),
                    payload: 1,
                },
                Tile {
                    position: Point::new(64.0, 0.0),
                    payload: 2,
                },
            ],
        );
        let hits: Vec<_> = flat
            .scan(Rect::new(32.0, 0.0, 64.0, 32.0))
            .map(|(_, p)| *p)
            .collect();
        assert_eq!(hits, [1]);

        let inverted: Vec<_> = flat
            .scan(Rect::new(40.0, 10.0, 20.0, 0.0))
            .map(|(_, p)| *p)
            .collect();
        assert_eq!(inverted, [0, 1]);
    }
}
