// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Main view plus a minimap.
//!
//! A second letterbox viewport shows a 1000x750 world region around the
//! player on a 200x150 pixmap, which is then composited into the bottom
//! right corner of the main frame. Both cameras read the same tile grid.
//!
//! Example:
//!   `cargo run -p spyglass_demos --example minimap -- --out minimap.png`

use clap::Parser;
use kurbo::Rect;
use peniko::Color;
use spyglass_demos::{SceneArgs, World, init_tracing, patrol_direction, save_png};
use spyglass_raster::Pixmap;
use spyglass_view::{
    RenderOptions, ScreenPoint, ScreenRect, ScreenSize, Surface, ViewMode, Viewport,
};

const MAP_SIZE: ScreenSize = ScreenSize::new(200, 150);

#[derive(Parser, Debug)]
#[command(about = "Renders the main view with a minimap in the corner")]
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
    let options = RenderOptions {
        debug: args.scene.debug,
    };

    let mut view = world.viewport()?;
    let mut map_view = Viewport::with_limits(
        ViewMode::Letterbox,
        Rect::new(0.0, 0.0, 1000.0, 750.0),
        world.config().grid.world_rect(),
    )?;
    map_view.move_to(world.player().center());

    let mut frame = world.blank_frame();
    for _ in 0..world.config().frames {
        world.step(patrol_direction(world.clock().frame(), args.leg));
        view.lerp_to(world.player().center(), world.config().follow_smoothing);
        map_view.move_to(world.player().center());

        frame = world.blank_frame();
        world.draw(&view, &mut frame, options)?;

        let mut map = Pixmap::filled(MAP_SIZE.width, MAP_SIZE.height, Color::from_rgb8(0, 0, 0));
        world.draw(&map_view, &mut map, options)?;
        blit_corner(&mut frame, &map);
    }
    save_png(&frame, &args.scene.out)
}

/// Composites `map` into the bottom right corner of `frame`.
fn blit_corner(frame: &mut Pixmap, map: &Pixmap) {
    let at = ScreenPoint::new(
        i32::try_from(frame.width().saturating_sub(map.width())).unwrap_or(0),
        i32::try_from(frame.height().saturating_sub(map.height())).unwrap_or(0),
    );
    let clip = ScreenRect::new(0, 0, frame.width(), frame.height());
    frame.blit(map, at, clip);
}
