//! Rendering.
//!
//! Each frame is first described as a short list of [`DrawCommand`]s built
//! from the viewport geometry, then replayed against raylib. Keeping the two
//! apart lets the frame layout be checked without a window.
use bevy_ecs::prelude::*;
use raylib::prelude::*;
use smallvec::SmallVec;

use crate::resources::debugmode::DebugMode;
use crate::resources::mapstore::{MapSlot, MapStore, MapTextures};
use crate::resources::minimap::MinimapLayout;
use crate::resources::screensize::ScreenSize;
use crate::resources::viewport::Viewport;

/// Cornflower blue.
pub const BACKGROUND: Color = Color::new(100, 149, 237, 255);
pub const MINIMAP_FRAME: Color = Color::BLACK;
pub const INDICATOR: Color = Color::BLACK;

/// One drawing operation for the renderer.
#[derive(Debug, Clone, Copy)]
pub enum DrawCommand {
    /// Fill the whole screen.
    Clear(Color),
    /// Draw `source` of a map texture stretched into `dest`.
    Map {
        slot: MapSlot,
        source: Rectangle,
        dest: Rectangle,
    },
    /// Solid rectangle.
    Fill { rect: Rectangle, color: Color },
}

/// A frame never needs more than clear, map, border, minimap and four edges.
pub type FrameCommands = SmallVec<[DrawCommand; 8]>;

/// Describe the frame for the current view.
pub fn frame_commands(
    viewport: &Viewport,
    maps: &MapStore,
    screen: ScreenSize,
    layout: MinimapLayout,
) -> FrameCommands {
    let mut cmds = FrameCommands::new();
    cmds.push(DrawCommand::Clear(BACKGROUND));

    let map = maps.size(viewport.active);
    cmds.push(DrawCommand::Map {
        slot: viewport.active,
        source: viewport.source_rect(screen),
        dest: Rectangle::new(0.0, 0.0, screen.w as f32, screen.h as f32),
    });

    if let Some(geo) = viewport.minimap_geometry(screen, map, layout) {
        cmds.push(DrawCommand::Fill {
            rect: geo.border(),
            color: MINIMAP_FRAME,
        });
        cmds.push(DrawCommand::Map {
            slot: viewport.active,
            source: Rectangle::new(0.0, 0.0, map.w as f32, map.h as f32),
            dest: geo.placement,
        });
        if let Some(edges) = geo.indicator_edges() {
            for rect in edges {
                cmds.push(DrawCommand::Fill {
                    rect,
                    color: INDICATOR,
                });
            }
        }
    }

    cmds
}

/// Draw the current frame.
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    textures: NonSend<MapTextures>,
    viewport: Res<Viewport>,
    maps: Res<MapStore>,
    screen: Res<ScreenSize>,
    layout: Res<MinimapLayout>,
    debug: Option<Res<DebugMode>>,
) {
    let cmds = frame_commands(&viewport, &maps, *screen, *layout);

    let mut d = rl.begin_drawing(&th);
    for cmd in cmds.iter() {
        match *cmd {
            DrawCommand::Clear(color) => d.clear_background(color),
            DrawCommand::Map { slot, source, dest } => {
                d.draw_texture_pro(
                    textures.get(slot),
                    source,
                    dest,
                    Vector2 { x: 0.0, y: 0.0 },
                    0.0,
                    Color::WHITE,
                );
            }
            DrawCommand::Fill { rect, color } => d.draw_rectangle_rec(rect, color),
        }
    }

    if debug.is_some() {
        render_debug_ui(&mut d, &viewport, &maps);
    }
}

fn render_debug_ui(d: &mut RaylibDrawHandle, viewport: &Viewport, maps: &MapStore) {
    let map = maps.size(viewport.active);

    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {}", d.get_fps());
    d.draw_text(&text, 10, 10, 10, Color::BLACK);

    let text = format!(
        "Zoom: {:.2} Offset: ({:.1}, {:.1})",
        viewport.zoom, viewport.offset.x, viewport.offset.y
    );
    d.draw_text(&text, 10, 30, 10, Color::BLACK);

    let text = format!("Map: {} {}x{}", viewport.active.label(), map.w, map.h);
    d.draw_text(&text, 10, 50, 10, Color::BLACK);
}
