//! Event types and their observers.
//!
//! - [`reloadconfig`] – re-read the configuration file on demand
//! - [`switchdebug`] – toggle the debug overlay
pub mod reloadconfig;
pub mod switchdebug;
