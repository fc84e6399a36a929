//! Balloon and particle simulation
//!
//! Pure state updates with no rendering or platform dependencies:
//! - Fixed per-frame step only
//! - Seeded RNG only
//! - Stable iteration order (insertion order)

pub mod burst;
pub mod state;
pub mod tick;

pub use burst::{burst_at, emit_ring};
pub use state::{ALPHABET_LEN, Balloon, LetterCycle, Particle, Rgb, SimConfig, SimState};
pub use tick::{step_balloon, step_particles, tick};
