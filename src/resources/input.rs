//! Per-frame keyboard input resource.
//!
//! Captures the fixed set of keys the viewer reacts to as [`KeySnapshot`]s and
//! keeps the previous frame's snapshot around so systems can tell a fresh
//! press apart from a held key. Default bindings follow the classic layout:
//! arrows to scroll, Z/X to zoom, H for the minimap and S to switch maps.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Logical keys recognised by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerKey {
    /// Leave the viewer (default: Escape).
    Quit,
    /// Double the zoom (default: Z).
    ZoomIn,
    /// Halve the zoom (default: X).
    ZoomOut,
    /// Scroll towards the top of the map (default: Up arrow).
    ScrollUp,
    /// Scroll towards the bottom of the map (default: Down arrow).
    ScrollDown,
    /// Scroll towards the left edge of the map (default: Left arrow).
    ScrollLeft,
    /// Scroll towards the right edge of the map (default: Right arrow).
    ScrollRight,
    /// Show or hide the minimap (default: H).
    ToggleMinimap,
    /// Swap between the generated and the loaded map (default: S).
    SwitchMap,
    /// Show or hide the debug overlay (default: F11).
    ToggleDebug,
    /// Re-read the configuration file (default: F5).
    ReloadConfig,
}

impl ViewerKey {
    /// Every logical key, in polling order.
    pub const ALL: [ViewerKey; 11] = [
        ViewerKey::Quit,
        ViewerKey::ZoomIn,
        ViewerKey::ZoomOut,
        ViewerKey::ScrollUp,
        ViewerKey::ScrollDown,
        ViewerKey::ScrollLeft,
        ViewerKey::ScrollRight,
        ViewerKey::ToggleMinimap,
        ViewerKey::SwitchMap,
        ViewerKey::ToggleDebug,
        ViewerKey::ReloadConfig,
    ];

    /// Physical key bound to this action.
    pub fn default_binding(self) -> KeyboardKey {
        match self {
            ViewerKey::Quit => KeyboardKey::KEY_ESCAPE,
            ViewerKey::ZoomIn => KeyboardKey::KEY_Z,
            ViewerKey::ZoomOut => KeyboardKey::KEY_X,
            ViewerKey::ScrollUp => KeyboardKey::KEY_UP,
            ViewerKey::ScrollDown => KeyboardKey::KEY_DOWN,
            ViewerKey::ScrollLeft => KeyboardKey::KEY_LEFT,
            ViewerKey::ScrollRight => KeyboardKey::KEY_RIGHT,
            ViewerKey::ToggleMinimap => KeyboardKey::KEY_H,
            ViewerKey::SwitchMap => KeyboardKey::KEY_S,
            ViewerKey::ToggleDebug => KeyboardKey::KEY_F11,
            ViewerKey::ReloadConfig => KeyboardKey::KEY_F5,
        }
    }

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// Immutable set of keys that were down at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySnapshot(u16);

impl KeySnapshot {
    /// Snapshot with no key down.
    pub fn empty() -> Self {
        Self(0)
    }

    /// Build a snapshot from the keys that are down.
    pub fn from_keys(keys: &[ViewerKey]) -> Self {
        keys.iter().fold(Self::empty(), |snap, key| snap.with(*key))
    }

    /// Copy of this snapshot with `key` marked as down.
    pub fn with(mut self, key: ViewerKey) -> Self {
        self.set(key, true);
        self
    }

    pub fn set(&mut self, key: ViewerKey, down: bool) {
        if down {
            self.0 |= key.bit();
        } else {
            self.0 &= !key.bit();
        }
    }

    pub fn is_down(&self, key: ViewerKey) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Keys down now that were up in `previous`.
    pub fn pressed_since(&self, previous: &KeySnapshot) -> KeySnapshot {
        KeySnapshot(self.0 & !previous.0)
    }
}

/// Resource holding the current and previous keyboard snapshots.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    previous: KeySnapshot,
    current: KeySnapshot,
}

impl InputState {
    /// Push a freshly polled snapshot; the old current one becomes previous.
    pub fn advance(&mut self, polled: KeySnapshot) {
        self.previous = self.current;
        self.current = polled;
    }

    /// Whether `key` is held this frame.
    pub fn is_down(&self, key: ViewerKey) -> bool {
        self.current.is_down(key)
    }

    /// Whether `key` went down this frame.
    pub fn just_pressed(&self, key: ViewerKey) -> bool {
        self.pressed().is_down(key)
    }

    /// Edge-triggered keys for this frame.
    pub fn pressed(&self) -> KeySnapshot {
        self.current.pressed_since(&self.previous)
    }
}
