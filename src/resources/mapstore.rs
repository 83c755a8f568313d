//! Map image resources.
//!
//! The viewer owns exactly two map images: the procedurally generated tile map
//! and an image loaded from disk. [`MapStore`] keeps their pixel dimensions so
//! geometry code can run without a GPU, while [`MapTextures`] holds the actual
//! textures for the render system.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Which of the two map images is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapSlot {
    /// The tile map synthesised at startup.
    #[default]
    Generated,
    /// The image read from the asset directory.
    Loaded,
}

impl MapSlot {
    /// The other slot.
    pub fn toggled(self) -> Self {
        match self {
            MapSlot::Generated => MapSlot::Loaded,
            MapSlot::Loaded => MapSlot::Generated,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MapSlot::Generated => "generated",
            MapSlot::Loaded => "loaded",
        }
    }
}

/// Size of a map image in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSize {
    pub w: u32,
    pub h: u32,
}

impl MapSize {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// Height over width; used to keep the minimap proportional.
    pub fn aspect(&self) -> f32 {
        self.h as f32 / self.w as f32
    }
}

/// Dimensions of both map images.
#[derive(Resource, Debug, Clone, Copy)]
pub struct MapStore {
    generated: MapSize,
    loaded: MapSize,
}

impl MapStore {
    pub fn new(generated: MapSize, loaded: MapSize) -> Self {
        Self { generated, loaded }
    }

    pub fn size(&self, slot: MapSlot) -> MapSize {
        match slot {
            MapSlot::Generated => self.generated,
            MapSlot::Loaded => self.loaded,
        }
    }
}

/// GPU textures for both map images.
///
/// # Note
/// This is a NonSend resource because `Texture2D` wraps GPU handles that must
/// stay on the main thread.
pub struct MapTextures {
    generated: Texture2D,
    loaded: Texture2D,
}

impl MapTextures {
    pub fn new(generated: Texture2D, loaded: Texture2D) -> Self {
        Self { generated, loaded }
    }

    pub fn get(&self, slot: MapSlot) -> &Texture2D {
        match slot {
            MapSlot::Generated => &self.generated,
            MapSlot::Loaded => &self.loaded,
        }
    }

    /// Dimensions as reported by the textures themselves.
    pub fn store(&self) -> MapStore {
        let size_of = |tex: &Texture2D| MapSize::new(tex.width() as u32, tex.height() as u32);
        MapStore::new(size_of(&self.generated), size_of(&self.loaded))
    }
}
