//! Viewer systems.
//!
//! Submodules overview
//! - [`gameconfig`] – apply configuration changes to the window and view
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`render`] – build and draw the frame using Raylib
//! - [`viewport`] – run the zoom/scroll/minimap controller for the frame

pub mod gameconfig;
pub mod input;
pub mod render;
pub mod viewport;
