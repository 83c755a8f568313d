//! Exit request resource.
//!
//! Inserted when the user asks to leave the viewer. The main loop stops at
//! the end of the frame in which it appears.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the host loop terminates.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ExitRequested {}
