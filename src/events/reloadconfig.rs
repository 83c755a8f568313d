//! Configuration reload event and observer.
//!
//! Pressing **F5** triggers [`ReloadConfigEvent`]. The observer re-reads the
//! INI file into [`GameConfig`]; change detection then lets
//! [`crate::systems::gameconfig`] re-apply the new values.

use crate::resources::gameconfig::GameConfig;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

/// Event triggered to reload the configuration file.
#[derive(Event, Debug, Clone, Copy)]
pub struct ReloadConfigEvent {}

/// Observer that reloads [`GameConfig`] from its file.
///
/// On failure the current configuration is left untouched.
pub fn reload_config_observer(_trigger: On<ReloadConfigEvent>, mut config: ResMut<GameConfig>) {
    info!("Reloading config from {:?}", config.config_path);
    let mut reloaded = config.clone();
    match reloaded.load_from_file() {
        Ok(()) => {
            if reloaded.map_seed != config.map_seed
                || reloaded.map_size != config.map_size
                || reloaded.tile_size != config.tile_size
                || reloaded.map_image != config.map_image
            {
                info!("Map settings changed; they take effect on next start");
            }
            *config = reloaded;
        }
        Err(e) => warn!("Config reload failed, keeping current settings: {}", e),
    }
}
