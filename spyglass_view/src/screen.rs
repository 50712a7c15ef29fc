// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer screen-space value types.
//!
//! World space uses Kurbo's float types. Screen space is a pixel grid whose
//! origin is the top-left corner of the target surface, so it gets its own
//! small integer types.

use crate::ViewError;

/// Size of a target surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ScreenSize {
    /// Creates a new screen size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns `true` if either dimension is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl From<(u32, u32)> for ScreenSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// A pixel position on a target surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenPoint {
    /// Horizontal pixel coordinate, growing to the right.
    pub x: i32,
    /// Vertical pixel coordinate, growing downwards.
    pub y: i32,
}

impl ScreenPoint {
    /// Creates a new screen point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for ScreenPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned pixel rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScreenRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ScreenRect {
    /// Creates a new screen rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin covering a whole surface.
    #[must_use]
    pub const fn from_size(size: ScreenSize) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Returns the size of this rectangle.
    #[must_use]
    pub const fn size(self) -> ScreenSize {
        ScreenSize::new(self.width, self.height)
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }

    /// Exclusive right edge, computed in `i64` so it cannot overflow.
    #[must_use]
    pub fn right(self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// Exclusive bottom edge, computed in `i64` so it cannot overflow.
    #[must_use]
    pub fn bottom(self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if `pt` lies inside the rectangle (right/bottom exclusive).
    #[must_use]
    pub fn contains(self, pt: ScreenPoint) -> bool {
        let (x, y) = (i64::from(pt.x), i64::from(pt.y));
        x >= i64::from(self.x) && x < self.right() && y >= i64::from(self.y) && y < self.bottom()
    }

    /// Intersection of two rectangles; empty rectangles keep the clamped origin.
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        let x0 = i64::from(self.x).max(i64::from(other.x));
        let y0 = i64::from(self.y).max(i64::from(other.y));
        let x1 = self.right().min(other.right()).max(x0);
        let y1 = self.bottom().min(other.bottom()).max(y0);
        Self::from_edges(x0, y0, x1, y1)
    }

    /// Builds a rectangle from `i64` edges, saturating into the field types.
    #[must_use]
    pub fn from_edges(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        let width = (x1 - x0).clamp(0, i64::from(u32::MAX));
        let height = (y1 - y0).clamp(0, i64::from(u32::MAX));
        Self::new(
            saturate_i32(x0),
            saturate_i32(y0),
            u32::try_from(width).unwrap_or(u32::MAX),
            u32::try_from(height).unwrap_or(u32::MAX),
        )
    }
}

fn saturate_i32(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}

/// The screen a viewport operation targets.
///
/// Hosts usually have either the surface size or the surface rectangle at
/// hand. Both are accepted, but a rectangle must start at the origin: all
/// viewport math assumes the destination surface begins at `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenExtent {
    /// A bare surface size.
    Size(ScreenSize),
    /// A surface rectangle; its origin must be `(0, 0)`.
    Rect(ScreenRect),
}

impl ScreenExtent {
    /// Returns the validated screen size.
    ///
    /// # Errors
    ///
    /// - [`ViewError::NonOriginScreen`] if a rectangle does not start at `(0, 0)`.
    /// - [`ViewError::EmptyScreen`] if the width or height is zero.
    pub fn validated_size(self) -> Result<ScreenSize, ViewError> {
        let size = match self {
            Self::Size(size) => size,
            Self::Rect(rect) => {
                if rect.x != 0 || rect.y != 0 {
                    return Err(ViewError::NonOriginScreen {
                        x: rect.x,
                        y: rect.y,
                    });
                }
                rect.size()
            }
        };
        if size.is_empty() {
            return Err(ViewError::EmptyScreen {
                width: size.width,
                height: size.height,
            });
        }
        Ok(size)
    }
}

impl From<ScreenSize> for ScreenExtent {
    fn from(size: ScreenSize) -> Self {
        Self::Size(size)
    }
}

impl From<ScreenRect> for ScreenExtent {
    fn from(rect: ScreenRect) -> Self {
        Self::Rect(rect)
    }
}

impl From<(u32, u32)> for ScreenExtent {
    fn from(size: (u32, u32)) -> Self {
        Self::Size(size.into())
    }
}

#[cfg(test)]
mod tests {
    use super::{ScreenExtent, ScreenPoint, ScreenRect, ScreenSize};
    use crate::ViewError;

    #[test]
    fn rect_extent_must_start_at_origin() {
        let ok = ScreenExtent::from(ScreenRect::new(0, 0, 1920, 1080));
        assert_eq!(ok.validated_size(), Ok(ScreenSize::new(1920, 1080)));

        let shifted = ScreenExtent::from(ScreenRect::new(10, 0, 1920, 1080));
        assert_eq!(
            shifted.validated_size(),
            Err(ViewError::NonOriginScreen { x: 10, y: 0 })
        );
    }

    #[test]
    fn zero_sized_extent_is_rejected() {
        let empty = ScreenExtent::from(ScreenSize::new(0, 600));
        assert_eq!(
            empty.validated_size(),
            Err(ViewError::EmptyScreen {
                width: 0,
                height: 600
            })
        );
    }

    #[test]
    fn intersect_and_contains() {
        let a = ScreenRect::new(0, 0, 100, 50);
        let b = ScreenRect::new(80, -10, 40, 30);
        let i = a.intersect(b);
        assert_eq!(i, ScreenRect::new(80, 0, 20, 20));
        assert!(i.contains(ScreenPoint::new(80, 0)));
        assert!(!i.contains(ScreenPoint::new(100, 0)));

        let disjoint = a.intersect(ScreenRect::new(200, 200, 10, 10));
        assert!(disjoint.is_empty());
    }
}
