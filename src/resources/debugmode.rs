//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that the debug overlay should
//! be drawn. Remove it to hide the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws the debug overlay.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
