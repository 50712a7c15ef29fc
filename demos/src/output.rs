// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use anyhow::Context as _;
use image::RgbaImage;
use spyglass_raster::Pixmap;
use tracing_subscriber::EnvFilter;

/// Installs a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Writes `frame` as a PNG file.
pub fn save_png(frame: &Pixmap, path: &Path) -> anyhow::Result<()> {
    let image = RgbaImage::from_raw(frame.width(), frame.height(), frame.data().to_vec())
        .context("pixmap buffer does not match its size")?;
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "frame saved");
    Ok(())
}
