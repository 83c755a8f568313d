//! Configuration change detection systems.
//!
//! Monitor [`GameConfig`] for changes and apply settings to the window and to
//! the view resources. Both run every frame but only act on the frame the
//! config is inserted or modified (startup and F5 reloads).

use crate::resources::gameconfig::GameConfig;
use crate::resources::minimap::MinimapLayout;
use crate::resources::viewport::Viewport;
use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi;

/// System that applies window-related configuration.
///
/// # Resource Dependencies
/// - `GameConfig` (optional) - the configuration to monitor
/// - `RaylibHandle` (non-send, mutable) - for FPS and vsync changes
pub fn apply_window_settings(
    maybe_config: Option<Res<GameConfig>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if config.is_changed() || config.is_added() {
        unsafe {
            if config.vsync {
                ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            } else {
                ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            }
        }
        rl.set_target_fps(config.target_fps);
        info!(
            "Window settings applied: fps={}, vsync={}",
            config.target_fps, config.vsync
        );
    }
}

/// System that pushes minimap and scrolling settings into the view resources.
///
/// Minimap visibility is only a startup default, so it is not re-applied here
/// and a reload does not undo the user's toggle.
pub fn sync_viewer_settings(
    maybe_config: Option<Res<GameConfig>>,
    mut layout: ResMut<MinimapLayout>,
    mut viewport: ResMut<Viewport>,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if config.is_changed() || config.is_added() {
        let new_layout = config.minimap_layout();
        if *layout != new_layout {
            *layout = new_layout;
        }
        if viewport.scroll_speed != config.scroll_speed {
            viewport.scroll_speed = config.scroll_speed;
        }
    }
}
