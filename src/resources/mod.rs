//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `exitrequest` – presence ends the main loop
//! - `gameconfig` – settings loaded from the INI file
//! - `input` – per-frame keyboard snapshots of the viewer's keys
//! - `mapstore` – the two map images and their dimensions
//! - `minimap` – minimap layout and per-frame geometry
//! - `screensize` – current framebuffer dimensions in pixels
//! - `viewport` – zoom, scroll offset and active map
pub mod debugmode;
pub mod exitrequest;
pub mod gameconfig;
pub mod input;
pub mod mapstore;
pub mod minimap;
pub mod screensize;
pub mod viewport;
