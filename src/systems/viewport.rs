//! Viewport controller system.
//!
//! Runs [`Viewport::update`] once per frame with the latest input snapshot,
//! the live screen size and the map dimensions. A quit request is turned into
//! the [`ExitRequested`] marker resource the host loop watches.
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::exitrequest::ExitRequested;
use crate::resources::input::InputState;
use crate::resources::mapstore::MapStore;
use crate::resources::screensize::ScreenSize;
use crate::resources::viewport::{FrameOutcome, Viewport};

pub fn viewport_controller(
    mut viewport: ResMut<Viewport>,
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    maps: Res<MapStore>,
    mut commands: Commands,
) {
    if viewport.update(&input, *screen, &maps) == FrameOutcome::Quit {
        info!("Quit requested");
        commands.insert_resource(ExitRequested {});
    }
}
