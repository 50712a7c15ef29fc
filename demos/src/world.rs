// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::Context as _;
use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use spyglass_raster::Pixmap;
use spyglass_tiles::{TileGrid, TileSource};
use spyglass_view::{RenderOptions, RenderStats, ScreenSize, Viewport};

use crate::SceneConfig;

/// Side of the player square in world units.
pub const PLAYER_SIZE: f64 = 10.0;

/// Fixed simulation step, in seconds.
pub const FRAME_DT: f64 = 1.0 / 60.0;

/// Fixed-step frame counter.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    frame: u64,
}

impl FrameClock {
    /// Advances one frame and returns the step length in seconds.
    pub fn tick(&mut self) -> f64 {
        self.frame += 1;
        FRAME_DT
    }

    /// Frames simulated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Simulated time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.frame as f64 * FRAME_DT
    }
}

/// A square moving through world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    /// World-space footprint.
    pub rect: Rect,
    /// Speed in world units per second.
    pub speed: f64,
}

impl Player {
    /// Creates a player centered on `center`.
    pub fn centered_at(center: Point, speed: f64) -> Self {
        Self {
            rect: Rect::from_center_size(center, (PLAYER_SIZE, PLAYER_SIZE)),
            speed,
        }
    }

    /// Center of the footprint, used as the camera target.
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// Moves along `direction` for `dt` seconds. Zero directions are ignored.
    pub fn step(&mut self, direction: Vec2, dt: f64) {
        if direction.hypot2() > 0.0 {
            self.rect = self.rect + direction.normalize() * self.speed * dt;
        }
    }
}

/// Scripted stand-in for keyboard input: walks a square loop.
///
/// The player heads right, down, left, then up, `leg` frames each.
pub fn patrol_direction(frame: u64, leg: u64) -> Vec2 {
    match (frame / leg.max(1)) % 4 {
        0 => Vec2::new(1.0, 0.0),
        1 => Vec2::new(0.0, 1.0),
        2 => Vec2::new(-1.0, 0.0),
        _ => Vec2::new(0.0, -1.0),
    }
}

/// Demo host state: tiles, the player, and the frame clock.
#[derive(Debug)]
pub struct World {
    config: SceneConfig,
    tiles: TileGrid<Pixmap>,
    player: Player,
    player_sprite: Pixmap,
    clock: FrameClock,
}

impl World {
    /// Generates the tile grid and places the player at `(200, 150)`.
    pub fn new(config: SceneConfig) -> anyhow::Result<Self> {
        let side = tile_pixels(config.grid.tile_size);
        let tiles = TileGrid::generate_seeded(&config.grid, config.seed, |_, tone| {
            Pixmap::filled(side, side, Color::from_rgb8(tone, 255, tone))
        })
        .context("generating tiles")?;
        tracing::info!(
            tiles = tiles.len(),
            seed = config.seed,
            width = config.screen.width,
            height = config.screen.height,
            "world ready"
        );
        let sprite_side = tile_pixels(PLAYER_SIZE);
        Ok(Self {
            player: Player::centered_at(Point::new(200.0, 150.0), config.player_speed),
            player_sprite: Pixmap::filled(sprite_side, sprite_side, Color::from_rgb8(255, 0, 0)),
            config,
            tiles,
            clock: FrameClock::default(),
        })
    }

    /// Scene parameters.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The generated tiles.
    pub fn tiles(&self) -> &TileGrid<Pixmap> {
        &self.tiles
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The frame clock.
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// World rectangle the main camera is kept within.
    pub fn limits(&self) -> Rect {
        self.config.view.limits.unwrap_or_else(|| {
            let margin = self.config.limits_margin;
            self.config.grid.world_rect().inflate(margin, margin)
        })
    }

    /// Main camera from the scene settings, centered on the player.
    pub fn viewport(&self) -> anyhow::Result<Viewport> {
        let mut view = Viewport::with_limits(
            self.config.view.mode,
            self.config.view.region,
            self.limits(),
        )
        .context("building viewport")?;
        view.move_to(self.player.center());
        Ok(view)
    }

    /// A black frame of the configured screen size.
    pub fn blank_frame(&self) -> Pixmap {
        let screen = self.config.screen;
        Pixmap::filled(screen.width, screen.height, Color::from_rgb8(0, 0, 0))
    }

    /// Advances the clock and moves the player. Returns the step length.
    pub fn step(&mut self, direction: Vec2) -> f64 {
        let dt = self.clock.tick();
        self.player.step(direction, dt);
        dt
    }

    /// Draws visible tiles, then the player, through `view`.
    pub fn draw(
        &self,
        view: &Viewport,
        target: &mut Pixmap,
        options: RenderOptions,
    ) -> anyhow::Result<RenderStats> {
        let stats = self.draw_tiles(view, target, options)?;
        self.draw_player(view, target)?;
        Ok(stats)
    }

    /// Draws the tiles overlapping the bounding box of `view`.
    pub fn draw_tiles(
        &self,
        view: &Viewport,
        target: &mut Pixmap,
        options: RenderOptions,
    ) -> anyhow::Result<RenderStats> {
        let screen = ScreenSize::new(target.width(), target.height());
        let bbox = view.get_bounding_box(screen)?;
        let stats = view.render(target, self.tiles.tiles_in(bbox), options)?;
        tracing::debug!(
            frame = self.clock.frame(),
            visited = stats.visited,
            drawn = stats.drawn,
            "tiles drawn"
        );
        Ok(stats)
    }

    /// Draws the player square.
    pub fn draw_player(&self, view: &Viewport, target: &mut Pixmap) -> anyhow::Result<()> {
        view.render(
            target,
            [(self.player.rect.origin(), &self.player_sprite)],
            RenderOptions::default(),
        )?;
        Ok(())
    }
}

/// Pixel side for a texture covering `world` units at unit scale.
fn tile_pixels(world: f64) -> u32 {
    // Scene sizes are small positive numbers; `as` saturates otherwise.
    world.round().max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use spyglass_tiles::GridSpec;
    use spyglass_view::RenderOptions;

    use super::{FRAME_DT, Player, World, patrol_direction};
    use crate::SceneConfig;

    #[test]
    fn player_moves_at_constant_speed() {
        let mut player = Player::centered_at(Point::new(0.0, 0.0), 120.0);
        player.step(Vec2::new(3.0, 4.0), 0.5);
        let moved = player.center().to_vec2();
        assert!((moved.hypot() - 60.0).abs() < 1e-9, "moved {moved:?}");
        player.step(Vec2::ZERO, 1.0);
        assert!((player.center().to_vec2().hypot() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn patrol_walks_a_loop() {
        assert_eq!(patrol_direction(0, 10), Vec2::new(1.0, 0.0));
        assert_eq!(patrol_direction(10, 10), Vec2::new(0.0, 1.0));
        assert_eq!(patrol_direction(25, 10), Vec2::new(-1.0, 0.0));
        assert_eq!(patrol_direction(39, 10), Vec2::new(0.0, -1.0));
        assert_eq!(patrol_direction(40, 10), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn default_world_draws_a_letterboxed_frame() {
        let scene = SceneConfig {
            grid: GridSpec::centered(20, 20, 32.0),
            ..SceneConfig::default()
        };
        let mut world = World::new(scene).unwrap();
        assert_eq!(world.tiles().len(), 400);
        let dt = world.step(Vec2::new(1.0, 0.0));
        assert_eq!(dt, FRAME_DT);

        let view = world.viewport().unwrap();
        let mut frame = world.blank_frame();
        let stats = world.draw(&view, &mut frame, RenderOptions::default()).unwrap();
        assert!(stats.drawn > 0, "some tiles are visible");
        // 1000x600 showing a 4:3 region leaves 100 px of padding on each side.
        assert_eq!(frame.pixel(50, 300), Some([0, 0, 0, 255]));
        assert_ne!(frame.pixel(500, 300), Some([0, 0, 0, 255]));
    }
}
