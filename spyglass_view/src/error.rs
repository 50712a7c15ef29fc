// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Contract violations reported by [`crate::Viewport`].
///
/// These indicate caller misuse rather than runtime conditions, so they are
/// surfaced to the caller and never retried. Expected absences, such as a
/// pixel in the letterbox padding, are `Option`s instead.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ViewError {
    /// A screen rectangle did not start at `(0, 0)`.
    #[error("screen rects must start at x=0, y=0 (got x={x}, y={y})")]
    NonOriginScreen {
        /// Left edge of the rejected rectangle.
        x: i32,
        /// Top edge of the rejected rectangle.
        y: i32,
    },
    /// A screen had a zero width or height.
    #[error("screen must have a positive size (got {width}x{height})")]
    EmptyScreen {
        /// Rejected width.
        width: u32,
        /// Rejected height.
        height: u32,
    },
    /// A region or limits rectangle was not positive and finite in both axes.
    #[error("world rect must have a positive, finite size (got {width}x{height})")]
    InvalidRegion {
        /// Rejected width.
        width: f64,
        /// Rejected height.
        height: f64,
    },
    /// A region scale factor was not positive and finite.
    #[error("scale factor must be positive and finite (got {0})")]
    InvalidScale(f64),
}
