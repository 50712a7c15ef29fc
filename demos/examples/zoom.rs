// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zooming by scaling the camera region.
//!
//! Every `--period` frames the region alternately doubles (zoom out) and
//! halves (zoom in) around its center, the way a host would react to `+`
//! and `-` key presses. The camera snaps to the player each frame.
//!
//! Example:
//!   `cargo run -p spyglass_demos --example zoom -- --period 60 --out zoom.png`

use clap::Parser;
use spyglass_demos::{SceneArgs, World, init_tracing, patrol_direction, save_png};
use spyglass_view::RenderOptions;

#[derive(Parser, Debug)]
#[command(about = "Alternately zooms the camera out and back in")]
struct Args {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frames between zoom steps
    #[arg(long, default_value = "60")]
    period: u64,

    /// Frames per patrol leg
    #[arg(long, default_value = "120")]
    leg: u64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut world = World::new(args.scene.scene()?)?;
    let mut view = world.viewport()?;
    let options = RenderOptions {
        debug: args.scene.debug,
    };
    let period = args.period.max(1);

    let mut zoomed_out = false;
    let mut frame = world.blank_frame();
    for _ in 0..world.config().frames {
        world.step(patrol_direction(world.clock().frame(), args.leg));
        if world.clock().frame() % period == 0 {
            let factor = if zoomed_out { 0.5 } else { 2.0 };
            view.scale_region(factor)?;
            zoomed_out = !zoomed_out;
            let region = view.region();
            tracing::info!(
                frame = world.clock().frame(),
                width = region.width(),
                height = region.height(),
                "zoom"
            );
        }
        view.move_to(world.player().center());

        frame = world.blank_frame();
        world.draw(&view, &mut frame, options)?;
    }
    save_png(&frame, &args.scene.out)
}
