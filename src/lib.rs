//! Map Explorer library.
//!
//! Exposes the viewer's resources, systems, and events for use in integration
//! tests and by the `mapexplorer` binary.

pub mod events;
pub mod game;
pub mod mapgen;
pub mod resources;
pub mod systems;
