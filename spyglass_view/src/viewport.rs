// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::borrow::Borrow;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`, `ceil`, `round`
use kurbo::{Point, Rect};

use crate::ViewError;
use crate::mode::ViewMode;
use crate::screen::{ScreenExtent, ScreenPoint, ScreenRect, ScreenSize};
use crate::surface::{Drawable, RenderOptions, RenderStats, Surface};

/// Scaling factors closer to `1.0` than this skip resampling.
const UNIT_SCALE_EPSILON: f64 = 1e-9;

/// Camera over a world-space region.
///
/// A `Viewport` owns a world-space rectangle (the *region*) whose center is
/// the camera look-at point. For a given screen it derives:
/// - the world rectangle that must be rendered ([`Viewport::get_bounding_box`]),
/// - a uniform world-to-pixel factor ([`Viewport::scaling_factor`]),
/// - where the region lands on screen ([`Viewport::region_screen_rect`]),
/// - point conversions in both directions.
///
/// The region is a value: every camera operation computes a new rectangle
/// and assigns it, then clamps it to the optional limits.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    mode: ViewMode,
    region: Rect,
    limits: Option<Rect>,
}

/// Plain description of a [`Viewport`], suitable for configuration files.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportSettings {
    /// Fitting mode.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: ViewMode,
    /// Initial world-space region.
    pub region: Rect,
    /// Optional world-space rectangle the region is confined to.
    #[cfg_attr(feature = "serde", serde(default))]
    pub limits: Option<Rect>,
}

/// Per-screen fitting parameters shared by the conversions.
#[derive(Clone, Copy, Debug)]
struct Fit {
    screen: ScreenSize,
    factor: f64,
    left: f64,
    top: f64,
    scaled_width: f64,
    scaled_height: f64,
}

impl Viewport {
    /// Creates a viewport over `region`.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidRegion`] if `region` is not positive and finite in
    /// both axes.
    pub fn new(mode: ViewMode, region: Rect) -> Result<Self, ViewError> {
        Ok(Self {
            mode,
            region: validate_rect(region)?,
            limits: None,
        })
    }

    /// Creates a viewport whose region is confined to `limits`.
    ///
    /// The initial region is clamped immediately.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidRegion`] if either rectangle is not positive and
    /// finite in both axes.
    pub fn with_limits(mode: ViewMode, region: Rect, limits: Rect) -> Result<Self, ViewError> {
        let mut vp = Self::new(mode, region)?;
        vp.set_limits(Some(limits))?;
        Ok(vp)
    }

    /// Creates a viewport from settings.
    ///
    /// # Errors
    ///
    /// Same as [`Viewport::with_limits`].
    pub fn from_settings(settings: &ViewportSettings) -> Result<Self, ViewError> {
        let mut vp = Self::new(settings.mode, settings.region)?;
        vp.set_limits(settings.limits)?;
        Ok(vp)
    }

    /// Returns the fitting mode.
    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Sets the fitting mode.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Returns the current world-space region.
    #[must_use]
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Replaces the region, then clamps it to the limits.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidRegion`] if `region` is not positive and finite in
    /// both axes. The current region is kept in that case.
    pub fn set_region(&mut self, region: Rect) -> Result<(), ViewError> {
        self.region = validate_rect(region)?;
        self.clamp_to_limits();
        Ok(())
    }

    /// Returns the limits rectangle, if any.
    #[must_use]
    pub fn limits(&self) -> Option<Rect> {
        self.limits
    }

    /// Sets or removes the limits, then clamps the region.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidRegion`] if `limits` is not positive and finite in
    /// both axes.
    pub fn set_limits(&mut self, limits: Option<Rect>) -> Result<(), ViewError> {
        self.limits = limits.map(validate_rect).transpose()?;
        self.clamp_to_limits();
        Ok(())
    }

    /// The camera look-at point.
    #[must_use]
    pub fn center(&self) -> Point {
        self.region.center()
    }

    /// Centers the region on `world`.
    pub fn move_to(&mut self, world: Point) {
        tracing::trace!(x = world.x, y = world.y, "viewport move_to");
        self.region = Rect::from_center_size(world, self.region.size());
        self.clamp_to_limits();
    }

    /// Moves the region center a fraction `t` of the way towards `world`.
    ///
    /// `t` is clamped into `[0, 1]`: `0` leaves the region untouched and `1`
    /// is equivalent to [`Viewport::move_to`]. A NaN `t` is ignored.
    pub fn lerp_to(&mut self, world: Point, t: f64) {
        if t.is_nan() || t <= 0.0 {
            return;
        }
        if t >= 1.0 {
            self.move_to(world);
            return;
        }
        let center = self.center().lerp(world, t);
        tracing::trace!(x = center.x, y = center.y, t, "viewport lerp_to");
        self.region = Rect::from_center_size(center, self.region.size());
        self.clamp_to_limits();
    }

    /// Scales the region about its center by `factor`.
    ///
    /// Factors above `1.0` show more of the world (zoom out), factors below
    /// show less (zoom in).
    ///
    /// # Errors
    ///
    /// - [`ViewError::InvalidScale`] if `factor` is not positive and finite.
    /// - [`ViewError::InvalidRegion`] if the scaled region overflows.
    pub fn scale_region(&mut self, factor: f64) -> Result<(), ViewError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(ViewError::InvalidScale(factor));
        }
        let scaled = Rect::from_center_size(self.region.center(), self.region.size() * factor);
        self.region = validate_rect(scaled)?;
        tracing::trace!(
            factor,
            width = self.region.width(),
            height = self.region.height(),
            "viewport scale_region"
        );
        self.clamp_to_limits();
        Ok(())
    }

    /// Returns the world rectangle that must be rendered to cover `screen`.
    ///
    /// - [`ViewMode::Letterbox`]: the region itself.
    /// - [`ViewMode::Expand`]: the region grown along one axis to match the
    ///   screen aspect ratio. The new length is rounded up to a whole world
    ///   unit and the growth is split around the region, the lower side
    ///   getting the floor of half.
    ///
    /// # Errors
    ///
    /// See [`ScreenExtent::validated_size`].
    pub fn get_bounding_box(&self, screen: impl Into<ScreenExtent>) -> Result<Rect, ViewError> {
        let screen = screen.into().validated_size()?;
        let region = self.region;
        let bbox = match self.mode {
            ViewMode::Letterbox => region,
            ViewMode::Expand => {
                let screen_ratio = screen.aspect();
                if self.screen_is_wider(screen) {
                    let new_width = (region.height() * screen_ratio).ceil();
                    let extra = new_width - region.width();
                    let x0 = region.x0 - (extra / 2.0).floor();
                    Rect::new(x0, region.y0, x0 + new_width, region.y1)
                } else {
                    let new_height = (region.width() / screen_ratio).ceil();
                    let extra = new_height - region.height();
                    let y0 = region.y0 - (extra / 2.0).floor();
                    Rect::new(region.x0, y0, region.x1, y0 + new_height)
                }
            }
        };
        tracing::trace!(
            x = bbox.x0,
            y = bbox.y0,
            width = bbox.width(),
            height = bbox.height(),
            "viewport bounding box"
        );
        Ok(bbox)
    }

    /// Screen pixels per world unit along the constrained axis.
    ///
    /// The same factor applies to both axes.
    ///
    /// # Errors
    ///
    /// See [`ScreenExtent::validated_size`].
    pub fn scaling_factor(&self, screen: impl Into<ScreenExtent>) -> Result<f64, ViewError> {
        Ok(self.fit(screen)?.factor)
    }

    /// Returns where the region lands on screen, centered within it.
    ///
    /// This is also the rectangle [`Viewport::render`] clips to, in both
    /// modes. In letterbox mode everything outside it is padding.
    ///
    /// # Errors
    ///
    /// See [`ScreenExtent::validated_size`].
    pub fn region_screen_rect(
        &self,
        screen: impl Into<ScreenExtent>,
    ) -> Result<ScreenRect, ViewError> {
        Ok(self.fit(screen)?.region_rect())
    }

    /// Maps a screen pixel to world coordinates.
    ///
    /// Returns `Ok(None)` in letterbox mode when the pixel lies in the
    /// padding around the region. Expand mode always yields a point.
    ///
    /// # Errors
    ///
    /// See [`ScreenExtent::validated_size`].
    pub fn screen_to_world(
        &self,
        screen: impl Into<ScreenExtent>,
        pos: ScreenPoint,
    ) -> Result<Option<Point>, ViewError> {
        let fit = self.fit(screen)?;
        let world = Point::new(
            (f64::from(pos.x) - fit.left) / fit.factor + self.region.x0,
            (f64::from(pos.y) - fit.top) / fit.factor + self.region.y0,
        );
        if self.mode == ViewMode::Letterbox && !self.region.contains(world) {
            return Ok(None);
        }
        Ok(Some(world))
    }

    /// Maps a world point to the screen pixel containing it.
    ///
    /// Always defined; the result may lie outside the screen.
    ///
    /// # Errors
    ///
    /// See [`ScreenExtent::validated_size`].
    pub fn world_to_screen(
        &self,
        screen: impl Into<ScreenExtent>,
        world: Point,
    ) -> Result<ScreenPoint, ViewError> {
        let fit = self.fit(screen)?;
        Ok(self.project(&fit, world))
    }

    /// Draws `(world position, drawable)` pairs into `target`.
    ///
    /// Each drawable is scaled by the current scaling factor (skipped when the
    /// factor is `1.0`), placed at its projected top-left corner and
    /// composited clipped to [`Viewport::region_screen_rect`]. Pixels outside
    /// that rectangle are never touched, in either mode.
    ///
    /// # Errors
    ///
    /// [`ViewError::EmptyScreen`] if `target` has a zero-sized side.
    pub fn render<D, S, I, B>(
        &self,
        target: &mut S,
        items: I,
        options: RenderOptions,
    ) -> Result<RenderStats, ViewError>
    where
        D: Drawable,
        S: Surface<D> + ?Sized,
        I: IntoIterator<Item = (Point, B)>,
        B: Borrow<D>,
    {
        let fit = self.fit(target.size())?;
        let area = fit.region_rect();
        let rescale = (fit.factor - 1.0).abs() > UNIT_SCALE_EPSILON;

        let mut stats = RenderStats::default();
        for (world, drawable) in items {
            stats.visited += 1;
            let at = self.project(&fit, world);
            let src = drawable.borrow();
            let visible = if rescale {
                let scaled = src.scaled_by(fit.factor);
                let visible = covers_pixels(at, scaled.size(), area);
                target.blit(&scaled, at, area);
                visible
            } else {
                let visible = covers_pixels(at, src.size(), area);
                target.blit(src, at, area);
                visible
            };
            if visible {
                stats.drawn += 1;
            }
        }

        if options.debug {
            tracing::debug!(
                x = area.x,
                y = area.y,
                width = area.width,
                height = area.height,
                factor = fit.factor,
                visited = stats.visited,
                drawn = stats.drawn,
                "viewport debug render"
            );
            target.debug_outline(area);
        }
        Ok(stats)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            mode: self.mode,
            region: self.region,
            limits: self.limits,
            center: self.center(),
        }
    }

    fn screen_is_wider(&self, screen: ScreenSize) -> bool {
        screen.aspect() > self.region.width() / self.region.height()
    }

    fn fit(&self, screen: impl Into<ScreenExtent>) -> Result<Fit, ViewError> {
        let screen = screen.into().validated_size()?;
        let (sw, sh) = (f64::from(screen.width), f64::from(screen.height));
        let (rw, rh) = (self.region.width(), self.region.height());

        // The constrained axis maps exactly onto the screen; only the other
        // axis goes through the factor.
        let (factor, scaled_width, scaled_height) = if self.screen_is_wider(screen) {
            let factor = sh / rh;
            (factor, rw * factor, sh)
        } else {
            let factor = sw / rw;
            (factor, sw, rh * factor)
        };

        Ok(Fit {
            screen,
            factor,
            left: ((sw - scaled_width) / 2.0).max(0.0).floor(),
            top: ((sh - scaled_height) / 2.0).max(0.0).floor(),
            scaled_width,
            scaled_height,
        })
    }

    fn project(&self, fit: &Fit, world: Point) -> ScreenPoint {
        ScreenPoint::new(
            to_pixel((world.x - self.region.x0) * fit.factor + fit.left),
            to_pixel((world.y - self.region.y0) * fit.factor + fit.top),
        )
    }

    fn clamp_to_limits(&mut self) {
        let Some(limits) = self.limits else {
            return;
        };
        let region = self.region;
        let x0 = clamp_axis(region.x0, region.width(), limits.x0, limits.x1);
        let y0 = clamp_axis(region.y0, region.height(), limits.y0, limits.y1);
        if x0 != region.x0 || y0 != region.y0 {
            tracing::trace!(x = x0, y = y0, "viewport clamped to limits");
            self.region = region.with_origin((x0, y0));
        }
    }
}

impl Fit {
    fn region_rect(&self) -> ScreenRect {
        let rect = ScreenRect::new(
            to_pixel(self.left),
            to_pixel(self.top),
            to_extent(self.scaled_width.round()),
            to_extent(self.scaled_height.round()),
        );
        // Rounding must not push the rect past the screen edge.
        rect.intersect(ScreenRect::from_size(self.screen))
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Fitting mode.
    pub mode: ViewMode,
    /// Current world-space region.
    pub region: Rect,
    /// Limits rectangle, if any.
    pub limits: Option<Rect>,
    /// Camera look-at point.
    pub center: Point,
}

fn validate_rect(rect: Rect) -> Result<Rect, ViewError> {
    let (width, height) = (rect.width(), rect.height());
    let finite = rect.x0.is_finite()
        && rect.y0.is_finite()
        && rect.x1.is_finite()
        && rect.y1.is_finite();
    if finite && width > 0.0 && height > 0.0 {
        Ok(rect)
    } else {
        Err(ViewError::InvalidRegion { width, height })
    }
}

/// Returns the new start of a `len`-long span so it stays within `[min, max]`.
///
/// Spans longer than the limits are centered on them instead. A span as long
/// as the limits starts at `min`, even when `max - len` rounds below it.
fn clamp_axis(start: f64, len: f64, min: f64, max: f64) -> f64 {
    let room = max - min;
    if len > room {
        min + (room - len) / 2.0
    } else {
        start.min(max - len).max(min)
    }
}

fn covers_pixels(at: ScreenPoint, size: ScreenSize, clip: ScreenRect) -> bool {
    let footprint = ScreenRect::new(at.x, at.y, size.width, size.height);
    !footprint.intersect(clip).is_empty()
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Pixel coordinates saturate; the value is floored first"
)]
fn to_pixel(v: f64) -> i32 {
    v.floor() as i32
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Pixel extents saturate; callers pass non-negative rounded values"
)]
fn to_extent(v: f64) -> u32 {
    v.max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{Viewport, ViewportSettings};
    use crate::{ScreenPoint, ScreenRect, ScreenSize, ViewError, ViewMode};

    const FULL_HD: ScreenSize = ScreenSize::new(1920, 1080);

    fn letterbox_400x300() -> Viewport {
        Viewport::new(ViewMode::Letterbox, Rect::new(0.0, 0.0, 400.0, 300.0)).unwrap()
    }

    #[test]
    fn letterbox_scenario_on_full_hd() {
        let vp = letterbox_400x300();
        assert_eq!(
            vp.get_bounding_box(FULL_HD).unwrap(),
            Rect::new(0.0, 0.0, 400.0, 300.0)
        );
        assert!((vp.scaling_factor(FULL_HD).unwrap() - 3.6).abs() < 1e-12);
        assert_eq!(
            vp.region_screen_rect(FULL_HD).unwrap(),
            ScreenRect::new(240, 0, 1440, 1080)
        );
    }

    #[test]
    fn world_to_screen_scenario() {
        let vp = letterbox_400x300();
        assert_eq!(
            vp.world_to_screen(FULL_HD, Point::new(40.0, 30.0)).unwrap(),
            ScreenPoint::new(384, 108)
        );
    }

    #[test]
    fn screen_to_world_scenario_and_padding() {
        let vp = letterbox_400x300();
        let world = vp
            .screen_to_world(FULL_HD, ScreenPoint::new(384, 108))
            .unwrap()
            .expect("pixel inside the region");
        assert!((world.x - 40.0).abs() < 1e-9);
        assert!((world.y - 30.0).abs() < 1e-9);

        // Left padding band.
        assert_eq!(
            vp.screen_to_world(FULL_HD, ScreenPoint::new(0, 0)).unwrap(),
            None
        );
    }

    #[test]
    fn expand_grows_width_on_wide_screen() {
        let vp = Viewport::new(ViewMode::Expand, Rect::new(0.0, 0.0, 400.0, 300.0)).unwrap();
        let bbox = vp.get_bounding_box(FULL_HD).unwrap();
        // 300 * 16/9 = 533.33.. -> 534; extra 134 split as 67 on each side.
        assert_eq!(bbox, Rect::new(-67.0, 0.0, 467.0, 300.0));
        assert_eq!(
            vp.region_screen_rect(FULL_HD).unwrap(),
            ScreenRect::new(240, 0, 1440, 1080)
        );
    }

    #[test]
    fn expand_grows_height_on_tall_screen() {
        let vp = Viewport::new(ViewMode::Expand, Rect::new(0.0, 0.0, 400.0, 300.0)).unwrap();
        let tall = ScreenSize::new(600, 800);
        let bbox = vp.get_bounding_box(tall).unwrap();
        // 400 / 0.75 = 533.33.. -> 534; extra 234 split as 117 on each side.
        assert_eq!(bbox, Rect::new(0.0, -117.0, 400.0, 417.0));
        assert!((vp.scaling_factor(tall).unwrap() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn expand_screen_to_world_never_hits_padding() {
        let vp = Viewport::new(ViewMode::Expand, Rect::new(0.0, 0.0, 400.0, 300.0)).unwrap();
        let world = vp
            .screen_to_world(FULL_HD, ScreenPoint::new(0, 0))
            .unwrap()
            .expect("expand mode always maps");
        assert!(world.x < 0.0);
    }

    #[test]
    fn non_origin_screen_rect_is_a_contract_violation() {
        let vp = letterbox_400x300();
        let err = vp
            .get_bounding_box(ScreenRect::new(5, 5, 800, 600))
            .unwrap_err();
        assert_eq!(err, ViewError::NonOriginScreen { x: 5, y: 5 });
        assert!(vp.scaling_factor(ScreenRect::new(0, 0, 800, 600)).is_ok());
    }

    #[test]
    fn invalid_regions_are_rejected() {
        assert!(matches!(
            Viewport::new(ViewMode::Letterbox, Rect::new(0.0, 0.0, 0.0, 10.0)),
            Err(ViewError::InvalidRegion { .. })
        ));
        assert!(matches!(
            Viewport::new(ViewMode::Letterbox, Rect::new(10.0, 0.0, 0.0, 10.0)),
            Err(ViewError::InvalidRegion { .. })
        ));
        assert!(matches!(
            Viewport::new(ViewMode::Letterbox, Rect::new(0.0, 0.0, f64::INFINITY, 10.0)),
            Err(ViewError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn move_and_lerp_follow_target() {
        let mut vp = letterbox_400x300();
        vp.move_to(Point::new(1000.0, 500.0));
        assert_eq!(vp.center(), Point::new(1000.0, 500.0));
        assert_eq!(vp.region().size(), Size::new(400.0, 300.0));

        let before = vp.region();
        vp.lerp_to(Point::new(0.0, 0.0), 0.0);
        assert_eq!(vp.region(), before);

        vp.lerp_to(Point::new(0.0, 0.0), 0.5);
        assert_eq!(vp.center(), Point::new(500.0, 250.0));

        vp.lerp_to(Point::new(-20.0, 10.0), 1.0);
        assert_eq!(vp.center(), Point::new(-20.0, 10.0));

        vp.lerp_to(Point::new(0.0, 0.0), f64::NAN);
        assert_eq!(vp.center(), Point::new(-20.0, 10.0));
    }

    #[test]
    fn limits_keep_region_inside() {
        let limits = Rect::new(-800.0, -800.0, 800.0, 800.0);
        let mut vp =
            Viewport::with_limits(ViewMode::Letterbox, Rect::new(0.0, 0.0, 400.0, 300.0), limits)
                .unwrap();
        vp.move_to(Point::new(790.0, -790.0));
        assert_eq!(vp.region(), Rect::new(400.0, -800.0, 800.0, -500.0));

        vp.lerp_to(Point::new(-10_000.0, 0.0), 0.5);
        assert_eq!(vp.region().x0, -800.0);
    }

    #[test]
    fn region_larger_than_limits_is_centered_on_them() {
        let limits = Rect::new(0.0, 0.0, 300.0, 1000.0);
        let mut vp =
            Viewport::with_limits(ViewMode::Letterbox, Rect::new(0.0, 0.0, 400.0, 300.0), limits)
                .unwrap();
        vp.move_to(Point::new(5000.0, 5000.0));
        // Too wide: centered horizontally. Fits vertically: pushed inside.
        assert_eq!(vp.region(), Rect::new(-50.0, 700.0, 350.0, 1000.0));
    }

    #[test]
    fn limits_as_long_as_the_region_do_not_panic() {
        let near = |a: f64, b: f64| (a - b).abs() < 1e-12;

        // 1.0 - 0.9 rounds to just under 0.1, below the lower limit.
        let limits = Rect::new(0.1, 0.0, 1.0, 2.0);
        let mut vp =
            Viewport::with_limits(ViewMode::Letterbox, Rect::new(0.0, 0.0, 0.9, 1.0), limits)
                .unwrap();
        assert_eq!(vp.region().x0, 0.1);

        vp.move_to(Point::new(0.5, 0.5));
        assert!(near(vp.region().x0, 0.1), "{:?}", vp.region());
        vp.lerp_to(Point::new(-3.0, 0.5), 0.5);
        assert!(near(vp.region().x0, 0.1), "{:?}", vp.region());
        vp.set_region(Rect::new(0.3, 0.0, 1.2, 1.0)).unwrap();
        assert!(near(vp.region().x0, 0.1), "{:?}", vp.region());

        // Zooming out to exactly the limits on both axes.
        let mut vp = Viewport::with_limits(
            ViewMode::Expand,
            Rect::new(0.0, 0.0, 0.45, 0.3),
            Rect::new(0.1, 0.7, 1.0, 1.3),
        )
        .unwrap();
        vp.scale_region(2.0).unwrap();
        assert!(near(vp.region().x0, 0.1), "{:?}", vp.region());
        assert!(near(vp.region().y0, 0.7), "{:?}", vp.region());
    }

    #[test]
    fn scale_region_zooms_about_center() {
        let mut vp = letterbox_400x300();
        vp.scale_region(2.0).unwrap();
        assert_eq!(vp.region(), Rect::new(-200.0, -150.0, 600.0, 450.0));
        vp.scale_region(0.5).unwrap();
        assert_eq!(vp.region(), Rect::new(0.0, 0.0, 400.0, 300.0));

        assert_eq!(vp.scale_region(0.0), Err(ViewError::InvalidScale(0.0)));
        assert!(vp.scale_region(f64::NAN).is_err());
        assert_eq!(vp.region(), Rect::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn settings_build_a_clamped_viewport() {
        let settings = ViewportSettings {
            mode: ViewMode::Expand,
            region: Rect::new(-1000.0, 0.0, -600.0, 300.0),
            limits: Some(Rect::new(-500.0, -500.0, 500.0, 500.0)),
        };
        let vp = Viewport::from_settings(&settings).unwrap();
        assert_eq!(vp.mode(), ViewMode::Expand);
        assert_eq!(vp.region(), Rect::new(-500.0, 0.0, -100.0, 300.0));

        let info = vp.debug_info();
        assert_eq!(info.limits, settings.limits);
        assert_eq!(info.center, vp.center());
    }
}
