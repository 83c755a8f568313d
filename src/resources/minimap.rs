//! Minimap layout resource and geometry.
//!
//! The minimap is a fixed-width overlay anchored to the bottom-right corner of
//! the screen. Its height follows the aspect ratio of the active map.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

pub const DEFAULT_MINIMAP_WIDTH: f32 = 120.0;
pub const DEFAULT_MINIMAP_MARGIN: f32 = 20.0;
/// Thickness of the black frame drawn around the minimap.
pub const MINIMAP_BORDER: f32 = 2.0;

/// Size and placement parameters for the minimap overlay.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MinimapLayout {
    /// Width of the minimap in screen pixels.
    pub width: f32,
    /// Gap between the minimap and the right/bottom screen edges.
    pub margin: f32,
}

impl Default for MinimapLayout {
    fn default() -> Self {
        Self {
            width: DEFAULT_MINIMAP_WIDTH,
            margin: DEFAULT_MINIMAP_MARGIN,
        }
    }
}

/// Screen-space rectangles for one frame of the minimap.
#[derive(Debug, Clone, Copy)]
pub struct MinimapGeometry {
    /// Where the whole active map is drawn.
    pub placement: Rectangle,
    /// The part of the map currently on screen, in minimap space.
    pub indicator: Rectangle,
}

impl MinimapGeometry {
    /// Placement grown by [`MINIMAP_BORDER`] on every side.
    pub fn border(&self) -> Rectangle {
        inflate(self.placement, MINIMAP_BORDER)
    }

    /// One-pixel outline of the indicator: top, right, bottom, left.
    ///
    /// Returns `None` when the indicator is thinner than a pixel in either
    /// direction, since no outline could be drawn for it.
    pub fn indicator_edges(&self) -> Option<[Rectangle; 4]> {
        let r = self.indicator;
        if r.width < 1.0 || r.height < 1.0 {
            return None;
        }
        Some([
            Rectangle::new(r.x, r.y, r.width, 1.0),
            Rectangle::new(r.x + r.width - 1.0, r.y, 1.0, r.height),
            Rectangle::new(r.x, r.y + r.height - 1.0, r.width, 1.0),
            Rectangle::new(r.x, r.y, 1.0, r.height),
        ])
    }
}

fn inflate(r: Rectangle, by: f32) -> Rectangle {
    Rectangle::new(r.x - by, r.y - by, r.width + by * 2.0, r.height + by * 2.0)
}
