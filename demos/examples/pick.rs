// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking the tile under a cursor.
//!
//! A fixed cursor pixel stands in for the mouse. Each frame it is mapped
//! back into world space with `screen_to_world`; the tile under it is drawn
//! again in a highlight color before the player. Cursors in the letterbox
//! padding pick nothing.
//!
//! Example:
//!   `cargo run -p spyglass_demos --example pick -- --cursor-x 620 --cursor-y 200`

use clap::Parser;
use peniko::Color;
use spyglass_demos::{SceneArgs, World, init_tracing, patrol_direction, save_png};
use spyglass_raster::Pixmap;
use spyglass_view::{Drawable, RenderOptions, ScreenPoint, ScreenSize};

const HIGHLIGHT: Color = Color::from_rgb8(0, 128, 255);

#[derive(Parser, Debug)]
#[command(about = "Highlights the tile under a cursor pixel")]
struct Args {
    #[command(flatten)]
    scene: SceneArgs,

    /// Cursor column in pixels
    #[arg(long, default_value = "500")]
    cursor_x: i32,

    /// Cursor row in pixels
    #[arg(long, default_value = "300")]
    cursor_y: i32,

    /// Frames per patrol leg
    #[arg(long, default_value = "90")]
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
    let cursor = ScreenPoint::new(args.cursor_x, args.cursor_y);

    let mut frame = world.blank_frame();
    let mut last_pick = None;
    for _ in 0..world.config().frames {
        world.step(patrol_direction(world.clock().frame(), args.leg));
        view.move_to(world.player().center());

        frame = world.blank_frame();
        world.draw_tiles(&view, &mut frame, options)?;

        let screen = ScreenSize::new(frame.width(), frame.height());
        let picked = view
            .screen_to_world(screen, cursor)?
            .and_then(|pt| world.tiles().tile_at(pt));
        if let Some(tile) = picked {
            let size = tile.payload.size();
            let marker = Pixmap::filled(size.width, size.height, HIGHLIGHT);
            view.render(&mut frame, [(tile.position, &marker)], RenderOptions::default())?;
            let coord = world.tiles().layout().coord_of(tile.position);
            if last_pick != Some(coord) {
                tracing::info!(column = coord.column, row = coord.row, "picked tile");
                last_pick = Some(coord);
            }
        } else if last_pick.take().is_some() {
            tracing::info!("cursor left the tiles");
        }

        world.draw_player(&view, &mut frame)?;
    }
    save_png(&frame, &args.scene.out)
}
