//! Viewport state and the per-frame controller logic.
//!
//! [`Viewport`] tracks zoom, scroll offset, the active map and minimap
//! visibility. All geometry the renderer needs is derived from it:
//!
//! - [`Viewport::source_rect`] – the window of the active map shown full-screen
//! - [`Viewport::minimap_geometry`] – minimap placement and viewport indicator
//!
//! Offsets are in active-map pixels. The visible window is the screen size
//! divided by the zoom, so zoom 2 shows a quarter of the pixels zoom 1 shows.
//!
//! # Invariant
//!
//! After every [`Viewport::update`] the offset satisfies
//! `0 <= offset <= max(0, map_size - screen_size / zoom)` on both axes.

use bevy_ecs::prelude::Resource;
use log::{debug, info};
use raylib::prelude::*;

use crate::resources::input::{InputState, ViewerKey};
use crate::resources::mapstore::{MapSize, MapSlot, MapStore};
use crate::resources::minimap::{MinimapGeometry, MinimapLayout};
use crate::resources::screensize::ScreenSize;

pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 4.0;
/// Factor applied per zoom key press.
pub const ZOOM_STEP: f32 = 2.0;
/// Scroll distance per frame at zoom 1, in map pixels.
pub const DEFAULT_SCROLL_SPEED: f32 = 10.0;

/// What the host should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Zoom/scroll state of the map view.
#[derive(Resource, Debug, Clone)]
pub struct Viewport {
    /// Screen pixels per map pixel, in `[MIN_ZOOM, MAX_ZOOM]`.
    pub zoom: f32,
    /// Top-left corner of the visible window in active-map pixels.
    pub offset: Vector2,
    /// Map shown full-screen and on the minimap.
    pub active: MapSlot,
    pub minimap_visible: bool,
    /// Map pixels scrolled per frame at zoom 1.
    pub scroll_speed: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(true, DEFAULT_SCROLL_SPEED)
    }
}

impl Viewport {
    pub fn new(minimap_visible: bool, scroll_speed: f32) -> Self {
        Self {
            zoom: 1.0,
            offset: Vector2 { x: 0.0, y: 0.0 },
            active: MapSlot::Generated,
            minimap_visible,
            scroll_speed,
        }
    }

    /// Advance the view by one frame of input.
    ///
    /// Zoom is applied before scrolling, and the offset is clamped after
    /// scrolling and again after a map switch since the new map may be
    /// smaller. A held quit key short-circuits everything else.
    pub fn update(&mut self, input: &InputState, screen: ScreenSize, maps: &MapStore) -> FrameOutcome {
        if input.is_down(ViewerKey::Quit) {
            return FrameOutcome::Quit;
        }

        let pressed = input.pressed();

        let old_zoom = self.zoom;
        if pressed.is_down(ViewerKey::ZoomOut) {
            self.zoom /= ZOOM_STEP;
        }
        if pressed.is_down(ViewerKey::ZoomIn) {
            self.zoom *= ZOOM_STEP;
        }
        self.zoom = self.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        if self.zoom != old_zoom {
            debug!("Zoom {} -> {}", old_zoom, self.zoom);
        }

        let speed = self.scroll_speed / self.zoom;
        if input.is_down(ViewerKey::ScrollRight) {
            self.offset.x += speed;
        }
        if input.is_down(ViewerKey::ScrollLeft) {
            self.offset.x -= speed;
        }
        if input.is_down(ViewerKey::ScrollDown) {
            self.offset.y += speed;
        }
        if input.is_down(ViewerKey::ScrollUp) {
            self.offset.y -= speed;
        }
        self.clamp_offset(screen, maps.size(self.active));

        if pressed.is_down(ViewerKey::ToggleMinimap) {
            self.minimap_visible = !self.minimap_visible;
            info!(
                "Minimap {}",
                if self.minimap_visible { "shown" } else { "hidden" }
            );
        }

        if pressed.is_down(ViewerKey::SwitchMap) {
            self.active = self.active.toggled();
            let size = maps.size(self.active);
            info!("Switched to {} map ({}x{})", self.active.label(), size.w, size.h);
            self.clamp_offset(screen, size);
        }

        FrameOutcome::Continue
    }

    /// Size of the visible window in map pixels.
    pub fn visible_size(&self, screen: ScreenSize) -> Vector2 {
        Vector2 {
            x: screen.w as f32 / self.zoom,
            y: screen.h as f32 / self.zoom,
        }
    }

    /// Largest valid offset for `map` on this screen; zero when the map is
    /// smaller than the visible window.
    pub fn max_offset(&self, screen: ScreenSize, map: MapSize) -> Vector2 {
        let visible = self.visible_size(screen);
        Vector2 {
            x: (map.w as f32 - visible.x).max(0.0),
            y: (map.h as f32 - visible.y).max(0.0),
        }
    }

    /// Pull the offset back inside the map.
    pub fn clamp_offset(&mut self, screen: ScreenSize, map: MapSize) {
        let max = self.max_offset(screen, map);
        self.offset.x = self.offset.x.clamp(0.0, max.x);
        self.offset.y = self.offset.y.clamp(0.0, max.y);
    }

    /// Region of the active map to draw over the whole screen.
    pub fn source_rect(&self, screen: ScreenSize) -> Rectangle {
        let visible = self.visible_size(screen);
        Rectangle {
            x: self.offset.x,
            y: self.offset.y,
            width: visible.x,
            height: visible.y,
        }
    }

    /// Minimap placement and viewport indicator, or `None` while hidden.
    pub fn minimap_geometry(
        &self,
        screen: ScreenSize,
        map: MapSize,
        layout: MinimapLayout,
    ) -> Option<MinimapGeometry> {
        if !self.minimap_visible {
            return None;
        }

        let map_w = map.w as f32;
        let map_h = map.h as f32;
        let mini_w = layout.width;
        let mini_h = mini_w * map.aspect();

        let placement = Rectangle {
            x: screen.w as f32 - mini_w - layout.margin,
            y: screen.h as f32 - mini_h - layout.margin,
            width: mini_w,
            height: mini_h,
        };

        // [0, map width] -> [0, minimap width]
        let offset_scale = mini_w / map_w;
        let visible = self.visible_size(screen);
        let indicator = Rectangle {
            x: placement.x + self.offset.x * offset_scale,
            y: placement.y + self.offset.y * offset_scale,
            width: mini_w * visible.x / map_w,
            height: mini_h * visible.y / map_h,
        };

        Some(MinimapGeometry {
            placement,
            indicator,
        })
    }
}
