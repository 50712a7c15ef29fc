// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flip-screen camera.
//!
//! The camera holds still until the player enters one of the four regions
//! next to the current one, then moves there: horizontal flips snap, vertical
//! flips ease in. The side the camera just came from is ignored until the
//! player leaves every neighbour, so standing on a border does not make the
//! camera bounce.
//!
//! Example:
//!   `cargo run -p spyglass_demos --example flip_screen -- --leg 150`

use clap::Parser;
use kurbo::{Point, Rect, Vec2};
use spyglass_demos::{SceneArgs, World, init_tracing, patrol_direction, save_png};
use spyglass_view::{RenderOptions, Viewport};

#[derive(Parser, Debug)]
#[command(about = "Static camera that flips to neighbouring regions")]
struct Args {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frames per patrol leg
    #[arg(long, default_value = "150")]
    leg: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Up,
    Right,
    Down,
    Left,
}

impl Side {
    const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    fn neighbour(self, region: Rect) -> Rect {
        let offset = match self {
            Self::Up => Vec2::new(0.0, -region.height()),
            Self::Right => Vec2::new(region.width(), 0.0),
            Self::Down => Vec2::new(0.0, region.height()),
            Self::Left => Vec2::new(-region.width(), 0.0),
        };
        region + offset
    }
}

/// Camera target that only changes when the player crosses a region edge.
#[derive(Debug)]
struct FlipCamera {
    target: Point,
    neighbours: [(Side, Rect); 4],
    came_from: Option<Side>,
}

impl FlipCamera {
    fn new(region: Rect) -> Self {
        Self {
            target: region.center(),
            neighbours: neighbours_of(region),
            came_from: None,
        }
    }

    fn update(&mut self, view: &mut Viewport, player: Rect, smoothing: f64) {
        view.lerp_to(self.target, smoothing);

        let entered = self
            .neighbours
            .iter()
            .copied()
            .find(|(_, region)| player.intersect(*region).area() > 0.0);
        let Some((side, region)) = entered else {
            self.came_from = None;
            return;
        };
        if Some(side) == self.came_from {
            return;
        }
        self.target = region.center();
        if side.is_horizontal() {
            view.move_to(self.target);
        }
        self.neighbours = neighbours_of(region);
        self.came_from = Some(side.opposite());
        tracing::info!(?side, x = self.target.x, y = self.target.y, "flip");
    }
}

fn neighbours_of(region: Rect) -> [(Side, Rect); 4] {
    Side::ALL.map(|side| (side, side.neighbour(region)))
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut world = World::new(args.scene.scene()?)?;
    let mut view = world.viewport()?;
    let options = RenderOptions {
        debug: args.scene.debug,
    };
    let mut camera = FlipCamera::new(view.region());
    let smoothing = world.config().follow_smoothing;

    let mut frame = world.blank_frame();
    for _ in 0..world.config().frames {
        world.step(patrol_direction(world.clock().frame(), args.leg));
        camera.update(&mut view, world.player().rect, smoothing);

        frame = world.blank_frame();
        world.draw(&view, &mut frame, options)?;
    }
    save_png(&frame, &args.scene.out)
}
