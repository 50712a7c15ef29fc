// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between world coordinates and tile coordinates.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`, `ceil`
use kurbo::{Point, Rect, Vec2};

use crate::TileError;

/// Integer tile coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCoord {
    /// Column index, growing with world `x`.
    pub column: i64,
    /// Row index, growing with world `y`.
    pub row: i64,
}

impl TileCoord {
    /// Creates a new tile coordinate.
    #[must_use]
    pub const fn new(column: i64, row: i64) -> Self {
        Self { column, row }
    }
}

/// Inclusive rectangle of tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileSpan {
    /// First column, inclusive.
    pub first_column: i64,
    /// Last column, inclusive.
    pub last_column: i64,
    /// First row, inclusive.
    pub first_row: i64,
    /// Last row, inclusive.
    pub last_row: i64,
}

impl TileSpan {
    /// Span covering exactly one tile.
    #[must_use]
    pub const fn single(coord: TileCoord) -> Self {
        Self {
            first_column: coord.column,
            last_column: coord.column,
            first_row: coord.row,
            last_row: coord.row,
        }
    }

    /// Smallest span covering both `self` and `coord`.
    #[must_use]
    pub fn including(self, coord: TileCoord) -> Self {
        Self {
            first_column: self.first_column.min(coord.column),
            last_column: self.last_column.max(coord.column),
            first_row: self.first_row.min(coord.row),
            last_row: self.last_row.max(coord.row),
        }
    }

    /// Overlap of two spans, or `None` if they are disjoint.
    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        let span = Self {
            first_column: self.first_column.max(other.first_column),
            last_column: self.last_column.min(other.last_column),
            first_row: self.first_row.max(other.first_row),
            last_row: self.last_row.min(other.last_row),
        };
        (span.first_column <= span.last_column && span.first_row <= span.last_row).then_some(span)
    }

    /// Returns `true` if `coord` lies inside the span.
    #[must_use]
    pub fn contains(self, coord: TileCoord) -> bool {
        (self.first_column..=self.last_column).contains(&coord.column)
            && (self.first_row..=self.last_row).contains(&coord.row)
    }

    /// Number of cells in the span, saturating at `u64::MAX`.
    #[must_use]
    pub fn cell_count(self) -> u64 {
        let width = self.last_column.abs_diff(self.first_column).saturating_add(1);
        let height = self.last_row.abs_diff(self.first_row).saturating_add(1);
        width.saturating_mul(height)
    }
}

/// Uniform square tiling of world space.
///
/// Tile `(column, row)` covers the half-open world rectangle starting at
/// `offset + (column, row) * tile_size` with side `tile_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    offset: Vec2,
    tile_size: f64,
}

impl GridLayout {
    /// Creates a layout.
    ///
    /// # Errors
    ///
    /// - [`TileError::InvalidTileSize`] if `tile_size` is not positive and finite.
    /// - [`TileError::InvalidOffset`] if `offset` is not finite.
    pub fn new(offset: Vec2, tile_size: f64) -> Result<Self, TileError> {
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(TileError::InvalidTileSize(tile_size));
        }
        if !(offset.x.is_finite() && offset.y.is_finite()) {
            return Err(TileError::InvalidOffset {
                x: offset.x,
                y: offset.y,
            });
        }
        Ok(Self { offset, tile_size })
    }

    /// World position of tile `(0, 0)`.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Side length of every tile in world units.
    #[must_use]
    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// Coordinate of the tile containing `pt`.
    #[must_use]
    pub fn coord_of(&self, pt: Point) -> TileCoord {
        TileCoord::new(
            to_index(((pt.x - self.offset.x) / self.tile_size).floor()),
            to_index(((pt.y - self.offset.y) / self.tile_size).floor()),
        )
    }

    /// World position of the top-left corner of `coord`.
    #[must_use]
    pub fn origin_of(&self, coord: TileCoord) -> Point {
        let (column, row) = (coord.column as f64, coord.row as f64);
        Point::new(
            self.offset.x + column * self.tile_size,
            self.offset.y + row * self.tile_size,
        )
    }

    /// World rectangle covered by `coord`.
    #[must_use]
    pub fn tile_rect(&self, coord: TileCoord) -> Rect {
        let origin = self.origin_of(coord);
        Rect::new(
            origin.x,
            origin.y,
            origin.x + self.tile_size,
            origin.y + self.tile_size,
        )
    }

    /// Tiles overlapping `rect`, or `None` if there are none.
    ///
    /// The rectangle is normalized first. The last column is derived from
    /// the right edge rounded *up* to a tile boundary, so tiles that overlap
    /// only partially are included while tiles that merely touch the right
    /// or bottom edge are not. Non-finite rectangles yield `None`.
    ///
    /// The span is found by dividing by the tile size, while tile edges are
    /// found by multiplying. With tile sizes or offsets that are not exact
    /// binary fractions the two can disagree by one cell on a boundary, so
    /// [`TileGrid::query`](crate::TileGrid::query) walks
    /// [`GridLayout::candidate_span`] and tests each tile instead.
    #[must_use]
    pub fn span_of(&self, rect: Rect) -> Option<TileSpan> {
        let rect = rect.abs();
        let finite = rect.x0.is_finite()
            && rect.y0.is_finite()
            && rect.x1.is_finite()
            && rect.y1.is_finite();
        if !finite {
            return None;
        }
        let (ox, oy, ts) = (self.offset.x, self.offset.y, self.tile_size);
        let span = TileSpan {
            first_column: to_index(((rect.x0 - ox) / ts).floor()),
            last_column: to_index(((rect.x1 - ox) / ts).ceil()).saturating_sub(1),
            first_row: to_index(((rect.y0 - oy) / ts).floor()),
            last_row: to_index(((rect.y1 - oy) / ts).ceil()).saturating_sub(1),
        };
        (span.first_column <= span.last_column && span.first_row <= span.last_row).then_some(span)
    }

    /// Every cell that can overlap `rect`, padded by one cell on each side.
    ///
    /// The rectangle is normalized first. Infinite edges saturate to the
    /// outermost index. Returns `None` if an edge is still NaN afterwards.
    #[must_use]
    pub fn candidate_span(&self, rect: Rect) -> Option<TileSpan> {
        let rect = rect.abs();
        if rect.x0.is_nan() || rect.y0.is_nan() || rect.x1.is_nan() || rect.y1.is_nan() {
            return None;
        }
        let (ox, oy, ts) = (self.offset.x, self.offset.y, self.tile_size);
        Some(TileSpan {
            first_column: to_index(((rect.x0 - ox) / ts).floor()).saturating_sub(1),
            last_column: to_index(((rect.x1 - ox) / ts).floor()).saturating_add(1),
            first_row: to_index(((rect.y0 - oy) / ts).floor()).saturating_sub(1),
            last_row: to_index(((rect.y1 - oy) / ts).floor()).saturating_add(1),
        })
    }
}

/// Strict overlap between the `size`-sided tile at `origin` and `rect`.
///
/// `rect` must be normalized. Shared edges do not count.
pub(crate) fn overlaps(origin: Point, size: f64, rect: Rect) -> bool {
    origin.x < rect.x1
        && rect.x0 < origin.x + size
        && origin.y < rect.y1
        && rect.y0 < origin.y + size
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Callers pass floored or ceiled values; out-of-range saturates"
)]
fn to_index(v: f64) -> i64 {
    v as i64
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::{GridLayout, TileCoord, TileSpan, overlaps};
    use crate::TileError;

    fn layout32() -> GridLayout {
        GridLayout::new(Vec2::ZERO, 32.0).unwrap()
    }

    #[test]
    fn coord_of_floors_negative_positions() {
        let layout = GridLayout::new(Vec2::new(-800.0, -800.0), 32.0).unwrap();
        assert_eq!(layout.coord_of(Point::new(-800.0, -800.0)), TileCoord::new(0, 0));
        assert_eq!(layout.coord_of(Point::new(-800.5, -768.0)), TileCoord::new(-1, 1));
        assert_eq!(
            layout.origin_of(TileCoord::new(2, 3)),
            Point::new(-736.0, -704.0)
        );
    }

    #[test]
    fn span_includes_partial_tiles_but_not_touching_ones() {
        let layout = layout32();
        assert_eq!(
            layout.span_of(Rect::new(0.0, 0.0, 64.0, 64.0)),
            Some(TileSpan {
                first_column: 0,
                last_column: 1,
                first_row: 0,
                last_row: 1,
            })
        );
        assert_eq!(
            layout.span_of(Rect::new(31.5, 0.0, 64.5, 1.0)),
            Some(TileSpan {
                first_column: 0,
                last_column: 2,
                first_row: 0,
                last_row: 0,
            })
        );
        // Zero-width box on a tile boundary touches no tile interior.
        assert_eq!(layout.span_of(Rect::new(32.0, 0.0, 32.0, 10.0)), None);
        assert_eq!(layout.span_of(Rect::new(0.0, 0.0, f64::NAN, 1.0)), None);
    }

    #[test]
    fn candidate_span_pads_and_saturates() {
        let layout = layout32();
        assert_eq!(
            layout.candidate_span(Rect::new(0.0, 0.0, 64.0, 10.0)),
            Some(TileSpan {
                first_column: -1,
                last_column: 3,
                first_row: -1,
                last_row: 1,
            })
        );
        let everything = layout
            .candidate_span(Rect::new(f64::NEG_INFINITY, 0.0, f64::INFINITY, 1.0))
            .unwrap();
        assert_eq!(everything.first_column, i64::MIN);
        assert_eq!(everything.last_column, i64::MAX);
        assert_eq!(
            layout.candidate_span(Rect::new(f64::NAN, 0.0, f64::NAN, 1.0)),
            None
        );
    }

    #[test]
    fn overlap_excludes_shared_edges() {
        let origin = Point::new(32.0, 0.0);
        assert!(overlaps(origin, 32.0, Rect::new(0.0, 0.0, 33.0, 1.0)));
        assert!(!overlaps(origin, 32.0, Rect::new(0.0, 0.0, 32.0, 1.0)));
        assert!(!overlaps(origin, 32.0, Rect::new(64.0, 0.0, 70.0, 1.0)));
        // A zero-width box inside the tile still overlaps it.
        assert!(overlaps(origin, 32.0, Rect::new(40.0, 0.0, 40.0, 1.0)));
    }

    #[test]
    fn invalid_layouts_are_rejected() {
        assert_eq!(
            GridLayout::new(Vec2::ZERO, 0.0),
            Err(TileError::InvalidTileSize(0.0))
        );
        assert!(GridLayout::new(Vec2::new(f64::INFINITY, 0.0), 1.0).is_err());
    }

    #[test]
    fn span_set_operations() {
        let a = TileSpan::single(TileCoord::new(0, 0)).including(TileCoord::new(3, 2));
        assert_eq!(a.cell_count(), 12);
        assert!(a.contains(TileCoord::new(3, 0)));
        let b = TileSpan::single(TileCoord::new(5, 5));
        assert_eq!(a.intersect(b), None);
        assert_eq!(
            a.intersect(TileSpan::single(TileCoord::new(2, 1))),
            Some(TileSpan::single(TileCoord::new(2, 1)))
        );
    }
}
