//! Input system.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! pushes a new [`KeySnapshot`] into [`InputState`]. Presses of the debug and
//! reload keys are forwarded as events so observers can handle them.
use bevy_ecs::prelude::*;

use crate::events::reloadconfig::ReloadConfigEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{InputState, KeySnapshot, ViewerKey};

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let polled = poll_keys(|key| rl.is_key_down(key.default_binding()));
    input.advance(polled);
    emit_input_events(&input, &mut commands);
}

/// Build a snapshot by asking `is_down` about every viewer key once.
pub fn poll_keys(mut is_down: impl FnMut(ViewerKey) -> bool) -> KeySnapshot {
    let mut snapshot = KeySnapshot::empty();
    for key in ViewerKey::ALL {
        snapshot.set(key, is_down(key));
    }
    snapshot
}

/// Trigger events for the keys handled by observers rather than by the
/// viewport controller.
pub fn emit_input_events(input: &InputState, commands: &mut Commands) {
    if input.just_pressed(ViewerKey::ToggleDebug) {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.just_pressed(ViewerKey::ReloadConfig) {
        commands.trigger(ReloadConfigEvent {});
    }
}
