//! Procedural tile map generation.
//!
//! The generated map is a square grid of flat-colored tiles. Colors come from
//! a seeded [`fastrand::Rng`], so the same seed always yields the same map.
//! Tiles are visited column by column (x outer, y inner) when drawing colors.

use raylib::prelude::*;

pub const DEFAULT_MAP_SEED: u64 = 420;
pub const DEFAULT_MAP_SIZE: u32 = 4096;
pub const DEFAULT_TILE_SIZE: u32 = 32;
/// Largest generated map edge; also the common GPU texture size limit.
pub const MAX_MAP_SIZE: u32 = 16384;

/// Size of the stand-in image used when the alternate map cannot be loaded.
pub const FALLBACK_MAP_WIDTH: i32 = 2048;
pub const FALLBACK_MAP_HEIGHT: i32 = 1024;

/// Colors of every tile in a generated map.
#[derive(Debug, Clone)]
pub struct TileGrid {
    /// Tiles per row.
    pub tiles_x: u32,
    /// Tiles per column.
    pub tiles_y: u32,
    /// Tile edge length in pixels.
    pub tile_size: u32,
    colors: Vec<Color>,
}

impl TileGrid {
    /// Roll tile colors for a `size`x`size` map cut into `tile_size` tiles.
    ///
    /// Pixels past the last whole tile are left out of the grid.
    pub fn generate(seed: u64, size: u32, tile_size: u32) -> Result<Self, String> {
        if tile_size == 0 {
            return Err("tile size must be greater than zero".to_string());
        }
        if size > MAX_MAP_SIZE {
            return Err(format!(
                "map size {} exceeds the {}px limit",
                size, MAX_MAP_SIZE
            ));
        }
        if tile_size > size {
            return Err(format!(
                "tile size {} does not fit in a {}px map",
                tile_size, size
            ));
        }

        let tiles_x = size / tile_size;
        let tiles_y = size / tile_size;
        let mut colors = vec![Color::BLACK; tiles_x as usize * tiles_y as usize];

        let mut rng = fastrand::Rng::with_seed(seed);
        for x in 0..tiles_x as usize {
            for y in 0..tiles_y as usize {
                colors[y * tiles_x as usize + x] = Color::new(rng.u8(..), rng.u8(..), rng.u8(..), 255);
            }
        }

        Ok(Self {
            tiles_x,
            tiles_y,
            tile_size,
            colors,
        })
    }

    /// Color of the tile at column `x`, row `y`.
    pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.tiles_x || y >= self.tiles_y {
            return None;
        }
        self.colors.get(self.index(x, y)).copied()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.tiles_x as usize + x as usize
    }

    /// Pixel dimensions covered by the grid.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.tiles_x * self.tile_size, self.tiles_y * self.tile_size)
    }

    /// Paint the grid into a CPU-side image.
    pub fn to_image(&self) -> Image {
        let (w, h) = self.pixel_size();
        let mut image = Image::gen_image_color(w as i32, h as i32, Color::BLACK);
        let tile = self.tile_size as i32;
        for y in 0..self.tiles_y {
            for x in 0..self.tiles_x {
                let color = self.colors[self.index(x, y)];
                image.draw_rectangle(x as i32 * tile, y as i32 * tile, tile, tile, color);
            }
        }
        image
    }
}

/// Checkerboard shown in place of a missing alternate map.
pub fn fallback_image() -> Image {
    Image::gen_image_checked(
        FALLBACK_MAP_WIDTH,
        FALLBACK_MAP_HEIGHT,
        64,
        64,
        Color::DARKGRAY,
        Color::LIGHTGRAY,
    )
}
