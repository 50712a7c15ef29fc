// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smoothed camera follow.
//!
//! The player walks a square loop while the camera eases toward it with
//! `lerp_to`, staying inside the grid bounds. The last frame is written to
//! a PNG file.
//!
//! Examples:
//!   `cargo run -p spyglass_demos --example follow`
//!   `cargo run -p spyglass_demos --example follow -- --mode expand --debug`

use clap::Parser;
use spyglass_demos::{SceneArgs, World, init_tracing, patrol_direction, save_png};
use spyglass_view::RenderOptions;

#[derive(Parser, Debug)]
#[command(about = "Camera smoothly follows a patrolling player")]
struct Args {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frames per patrol leg
    #[arg(long, default_value = "90")]
    leg: u64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut world = World::new(args.scene.scene()?)?;
    let mut view = world.viewport()?;
    let smoothing = world.config().follow_smoothing;
    let options = RenderOptions {
        debug: args.scene.debug,
    };

    let mut frame = world.blank_frame();
    for _ in 0..world.config().frames {
        world.step(patrol_direction(world.clock().frame(), args.leg));
        view.lerp_to(world.player().center(), smoothing);

        frame = world.blank_frame();
        world.draw(&view, &mut frame, options)?;
    }

    let info = view.debug_info();
    tracing::info!(
        frames = world.clock().frame(),
        seconds = world.clock().elapsed(),
        region = ?info.region,
        "follow finished"
    );
    save_png(&frame, &args.scene.out)
}
