//! Generated map tests.

use mapexplorer::mapgen::{DEFAULT_MAP_SEED, DEFAULT_MAP_SIZE, DEFAULT_TILE_SIZE, TileGrid};

fn colors(grid: &TileGrid) -> Vec<(u8, u8, u8)> {
    let mut out = Vec::new();
    for y in 0..grid.tiles_y {
        for x in 0..grid.tiles_x {
            let c = grid.color_at(x, y).unwrap();
            out.push((c.r, c.g, c.b));
        }
    }
    out
}

#[test]
fn same_seed_same_map() {
    let a = TileGrid::generate(DEFAULT_MAP_SEED, DEFAULT_MAP_SIZE, DEFAULT_TILE_SIZE).unwrap();
    let b = TileGrid::generate(DEFAULT_MAP_SEED, DEFAULT_MAP_SIZE, DEFAULT_TILE_SIZE).unwrap();
    assert_eq!(colors(&a), colors(&b));
}

#[test]
fn different_seed_different_map() {
    let a = TileGrid::generate(1, 512, 32).unwrap();
    let b = TileGrid::generate(2, 512, 32).unwrap();
    assert_ne!(colors(&a), colors(&b));
}

#[test]
fn tiles_are_not_all_the_same() {
    let grid = TileGrid::generate(DEFAULT_MAP_SEED, 512, 32).unwrap();
    let all = colors(&grid);
    assert!(all.iter().any(|c| *c != all[0]));
}

#[test]
fn image_matches_grid() {
    let grid = TileGrid::generate(5, 64, 16).unwrap();
    let image = grid.to_image();
    assert_eq!(image.width, 64);
    assert_eq!(image.height, 64);
}
