//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. The window is
//! resizable, so the main loop refreshes this every frame before the
//! viewport logic and the renderer read it.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
