//! Platform abstraction layer
//!
//! Browser wiring for the frame driver:
//! - Canvas and 2D context acquisition
//! - Spawn/reset buttons and canvas clicks
//! - `requestAnimationFrame` loop

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Canvas element id
pub const CANVAS_ID: &str = "gameCanvas";
/// Spawn button id
pub const SPAWN_BUTTON_ID: &str = "pumpBtn";
/// Reset button id
pub const RESET_BUTTON_ID: &str = "resetBtn";
