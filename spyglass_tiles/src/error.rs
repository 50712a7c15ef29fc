// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised while building a tile grid.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum TileError {
    /// The tile size was not positive and finite.
    #[error("tile size must be positive and finite (got {0})")]
    InvalidTileSize(f64),
    /// The grid offset was not finite.
    #[error("grid offset must be finite (got {x}, {y})")]
    InvalidOffset {
        /// Rejected horizontal offset.
        x: f64,
        /// Rejected vertical offset.
        y: f64,
    },
    /// `rows * columns` does not fit in memory addressing.
    #[error("{rows}x{columns} tiles cannot be allocated")]
    TooManyTiles {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        columns: u32,
    },
}
