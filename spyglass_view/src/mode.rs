// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a viewport fits its world region onto a screen.
///
/// Both modes scale uniformly; they differ in what happens on the axis where
/// the screen and region aspect ratios disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ViewMode {
    /// Render exactly the region, centered; the screen may show padding on
    /// the shorter axis.
    #[default]
    Letterbox,
    /// Grow the bounding box to match the screen aspect ratio, so every
    /// screen pixel has a world position. Rendering is still clipped to
    /// the region's screen rectangle.
    Expand,
}
