// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared host glue for the Spyglass demos.
//!
//! The demos play the role of a game host without a window: a [`World`]
//! owns the generated tiles, a player square, and a fixed-step frame clock.
//! Each example drives the camera its own way and writes the final frame
//! to a PNG file.
//!
//! Run them with, for example:
//!   `cargo run -p spyglass_demos --example follow -- --out follow.png`
//!   `cargo run -p spyglass_demos --example minimap -- --config scene.json`
//!
//! Logging goes through `tracing`; set `RUST_LOG=debug` to see per-frame
//! render summaries.

mod config;
mod output;
mod world;

pub use config::{ModeArg, SceneArgs, SceneConfig};
pub use output::{init_tracing, save_png};
pub use world::{FRAME_DT, FrameClock, PLAYER_SIZE, Player, World, patrol_direction};
