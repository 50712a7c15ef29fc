// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable tile grid and its bounding-box query.

use core::iter::FusedIterator;
use core::ops::RangeInclusive;

use alloc::vec::Vec;
use hashbrown::HashMap;
use kurbo::{Point, Rect, Vec2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::TileError;
use crate::layout::{GridLayout, TileCoord, TileSpan, overlaps};

/// Range tile tones are sampled from during generation.
pub const TONE_RANGE: RangeInclusive<u8> = 64..=240;

/// A square tile anchored at its top-left world position.
#[derive(Clone, Debug, PartialEq)]
pub struct Tile<P> {
    /// Top-left corner in world space.
    pub position: Point,
    /// Caller data, typically a texture.
    pub payload: P,
}

/// Parameters for [`TileGrid::generate`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSpec {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub columns: u32,
    /// World position of tile `(0, 0)`.
    pub offset: Vec2,
    /// Side length of every tile in world units.
    pub tile_size: f64,
}

impl GridSpec {
    /// Spec for a `rows x columns` grid centered on the world origin.
    #[must_use]
    pub fn centered(rows: u32, columns: u32, tile_size: f64) -> Self {
        Self {
            rows,
            columns,
            offset: Vec2::new(
                -f64::from(columns) * tile_size / 2.0,
                -f64::from(rows) * tile_size / 2.0,
            ),
            tile_size,
        }
    }

    /// World rectangle covered by the generated grid.
    #[must_use]
    pub fn world_rect(&self) -> Rect {
        Rect::new(
            self.offset.x,
            self.offset.y,
            self.offset.x + f64::from(self.columns) * self.tile_size,
            self.offset.y + f64::from(self.rows) * self.tile_size,
        )
    }
}

/// Uniform-grid spatial index of tiles.
///
/// The grid is built once and never mutated afterwards; every method takes
/// `&self`. Lookups by tile coordinate are hash lookups and
/// [`TileGrid::query`] visits only the cells a rectangle overlaps, so its
/// cost follows the size of the answer rather than the number of tiles.
#[derive(Clone, Debug)]
pub struct TileGrid<P> {
    layout: GridLayout,
    tiles: HashMap<TileCoord, Tile<P>>,
    extent: Option<TileSpan>,
}

impl<P> TileGrid<P> {
    /// Generates a `rows x columns` grid.
    ///
    /// Tiles are visited row by row. Each draws one tone from [`TONE_RANGE`]
    /// using `rng`, and `make` turns the coordinate and tone into a payload.
    /// The same spec and an identically seeded `rng` reproduce the same grid.
    ///
    /// # Errors
    ///
    /// - [`TileError::InvalidTileSize`] / [`TileError::InvalidOffset`] for a
    ///   bad layout.
    /// - [`TileError::TooManyTiles`] if the tile count overflows `usize`.
    pub fn generate<R, F>(spec: &GridSpec, rng: &mut R, mut make: F) -> Result<Self, TileError>
    where
        R: Rng + ?Sized,
        F: FnMut(TileCoord, u8) -> P,
    {
        let layout = GridLayout::new(spec.offset, spec.tile_size)?;
        let count = usize::try_from(u64::from(spec.rows) * u64::from(spec.columns)).map_err(
            |_| TileError::TooManyTiles {
                rows: spec.rows,
                columns: spec.columns,
            },
        )?;

        let mut tiles = HashMap::with_capacity(count);
        for row in 0..i64::from(spec.rows) {
            for column in 0..i64::from(spec.columns) {
                let coord = TileCoord::new(column, row);
                let tone = rng.gen_range(TONE_RANGE);
                let tile = Tile {
                    position: layout.origin_of(coord),
                    payload: make(coord, tone),
                };
                tiles.insert(coord, tile);
            }
        }

        let grid = Self::from_map(layout, tiles);
        tracing::debug!(
            rows = spec.rows,
            columns = spec.columns,
            tile_size = spec.tile_size,
            tiles = grid.len(),
            "generated tile grid"
        );
        Ok(grid)
    }

    /// Generates a grid from a fresh `ChaCha8Rng` seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Same as [`TileGrid::generate`].
    pub fn generate_seeded<F>(spec: &GridSpec, seed: u64, make: F) -> Result<Self, TileError>
    where
        F: FnMut(TileCoord, u8) -> P,
    {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate(spec, &mut rng, make)
    }

    /// Builds a possibly sparse grid from explicit tiles.
    ///
    /// Each tile is positioned by `layout`. A coordinate given more than
    /// once keeps the last payload.
    pub fn from_tiles<I>(layout: GridLayout, tiles: I) -> Self
    where
        I: IntoIterator<Item = (TileCoord, P)>,
    {
        let tiles = tiles
            .into_iter()
            .map(|(coord, payload)| {
                let tile = Tile {
                    position: layout.origin_of(coord),
                    payload,
                };
                (coord, tile)
            })
            .collect();
        Self::from_map(layout, tiles)
    }

    fn from_map(layout: GridLayout, tiles: HashMap<TileCoord, Tile<P>>) -> Self {
        let extent = tiles.keys().fold(None, |acc: Option<TileSpan>, &coord| {
            Some(acc.map_or(TileSpan::single(coord), |span| span.including(coord)))
        });
        Self {
            layout,
            tiles,
            extent,
        }
    }

    /// The tiling this grid uses.
    #[must_use]
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Number of tiles stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns `true` if the grid stores no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Smallest span covering every stored tile.
    #[must_use]
    pub fn extent(&self) -> Option<TileSpan> {
        self.extent
    }

    /// World rectangle covering every stored tile.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        let span = self.extent?;
        let first = self.layout.tile_rect(TileCoord::new(span.first_column, span.first_row));
        let last = self.layout.tile_rect(TileCoord::new(span.last_column, span.last_row));
        Some(first.union(last))
    }

    /// Tile at `coord`, if present.
    #[must_use]
    pub fn get(&self, coord: TileCoord) -> Option<&Tile<P>> {
        self.tiles.get(&coord)
    }

    /// Tile containing the world point `pt`, if present.
    #[must_use]
    pub fn tile_at(&self, pt: Point) -> Option<&Tile<P>> {
        self.get(self.layout.coord_of(pt))
    }

    /// All tiles with their coordinates, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, &Tile<P>)> + '_ {
        self.tiles.iter().map(|(coord, tile)| (*coord, tile))
    }

    /// All tiles sorted row by row, then by column.
    #[must_use]
    pub fn sorted_tiles(&self) -> Vec<(TileCoord, &Tile<P>)> {
        let mut tiles: Vec<_> = self.iter().collect();
        tiles.sort_unstable_by_key(|(coord, _)| (coord.row, coord.column));
        tiles
    }

    /// Lazily yields the tiles overlapping `bbox`.
    ///
    /// A tile is returned when its area strictly overlaps `bbox`; tiles that
    /// only share an edge with it are not. Tiles come row by row, and by
    /// column within a row. The walk covers the cells under `bbox` plus a
    /// one-cell border, clipped to the stored extent, and skips empty cells.
    /// The returned iterator is finite and not restartable; collect it to
    /// consume it twice.
    #[must_use]
    pub fn query(&self, bbox: Rect) -> GridQuery<'_, P> {
        let span = self
            .layout
            .candidate_span(bbox)
            .zip(self.extent)
            .and_then(|(wanted, stored)| wanted.intersect(stored));
        tracing::trace!(?span, "tile grid query");
        GridQuery::new(&self.tiles, span, bbox.abs(), self.layout.tile_size())
    }
}

/// Iterator returned by [`TileGrid::query`].
#[derive(Clone, Debug)]
pub struct GridQuery<'a, P> {
    tiles: &'a HashMap<TileCoord, Tile<P>>,
    span: Option<TileSpan>,
    next: TileCoord,
    bbox: Rect,
    tile_size: f64,
}

impl<'a, P> GridQuery<'a, P> {
    fn new(
        tiles: &'a HashMap<TileCoord, Tile<P>>,
        span: Option<TileSpan>,
        bbox: Rect,
        tile_size: f64,
    ) -> Self {
        let next = span.map_or(TileCoord::default(), |s| {
            TileCoord::new(s.first_column, s.first_row)
        });
        Self {
            tiles,
            span,
            next,
            bbox,
            tile_size,
        }
    }

    /// Advances to the next cell, returning the current one.
    fn step(&mut self, span: TileSpan) -> TileCoord {
        let current = self.next;
        if current.column < span.last_column {
            self.next.column += 1;
        } else if current.row < span.last_row {
            self.next = TileCoord::new(span.first_column, current.row + 1);
        } else {
            self.span = None;
        }
        current
    }
}

impl<'a, P> Iterator for GridQuery<'a, P> {
    type Item = (Point, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(span) = self.span {
            let coord = self.step(span);
            let Some(tile) = self.tiles.get(&coord) else {
                continue;
            };
            if overlaps(tile.position, self.tile_size, self.bbox) {
                return Some((tile.position, &tile.payload));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(span) = self.span else {
            return (0, Some(0));
        };
        let width = span.last_column.abs_diff(span.first_column).saturating_add(1);
        let rows_after = span.last_row.abs_diff(self.next.row);
        let in_row = span.last_column.abs_diff(self.next.column).saturating_add(1);
        let remaining = rows_after
            .saturating_mul(width)
            .saturating_add(in_row)
            .min(self.tiles.len() as u64);
        (0, usize::try_from(remaining).ok())
    }
}

impl<P> FusedIterator for GridQuery<'_, P> {}
