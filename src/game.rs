//! Startup setup: build the two map textures and the ECS resources that
//! describe them.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::mapgen::{self, DEFAULT_MAP_SEED, DEFAULT_MAP_SIZE, DEFAULT_TILE_SIZE, TileGrid};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::mapstore::MapTextures;
use crate::resources::screensize::ScreenSize;
use crate::resources::viewport::Viewport;

/// Generate the tile map image, falling back to the default parameters when
/// the configured ones are unusable.
fn generated_image(config: &GameConfig) -> Image {
    let grid = TileGrid::generate(config.map_seed, config.map_size, config.tile_size)
        .or_else(|e| {
            warn!("Invalid map settings ({}), using defaults", e);
            TileGrid::generate(DEFAULT_MAP_SEED, DEFAULT_MAP_SIZE, DEFAULT_TILE_SIZE)
        });
    match grid {
        Ok(grid) => {
            let (w, h) = grid.pixel_size();
            info!(
                "Generated {}x{} map with {}x{} tiles (seed {})",
                w, h, grid.tiles_x, grid.tiles_y, config.map_seed
            );
            grid.to_image()
        }
        Err(e) => {
            warn!("Map generation failed ({}), using fallback image", e);
            mapgen::fallback_image()
        }
    }
}

/// Read the alternate map from disk, or a checkerboard if that fails.
fn loaded_image(config: &GameConfig) -> Image {
    let path = config.map_image.to_string_lossy();
    match Image::load_image(&path) {
        Ok(image) => {
            info!("Loaded map image {} ({}x{})", path, image.width, image.height);
            image
        }
        Err(e) => {
            warn!("Could not load map image {}: {}; using checkerboard", path, e);
            mapgen::fallback_image()
        }
    }
}

/// Create both map textures on the GPU.
pub fn load_map_textures(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    config: &GameConfig,
) -> Result<MapTextures, String> {
    let generated = rl
        .load_texture_from_image(th, &generated_image(config))
        .map_err(|e| format!("Failed to upload generated map: {}", e))?;
    let loaded = rl
        .load_texture_from_image(th, &loaded_image(config))
        .map_err(|e| format!("Failed to upload loaded map: {}", e))?;
    Ok(MapTextures::new(generated, loaded))
}

/// Insert the window-independent viewer resources.
///
/// `MapStore` and the GPU textures are added by the caller, since they need a
/// live raylib context.
pub fn insert_viewer_resources(world: &mut World, config: GameConfig, screen: ScreenSize) {
    world.insert_resource(Viewport::new(config.minimap_visible, config.scroll_speed));
    world.insert_resource(config.minimap_layout());
    world.insert_resource(InputState::default());
    world.insert_resource(screen);
    world.insert_resource(config);
}
