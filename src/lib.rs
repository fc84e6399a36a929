//! Balloon Pop - lettered balloons that drift, bounce and burst on click
//!
//! Core modules:
//! - `sim`: Simulation state, per-frame step and burst trigger
//! - `renderer`: 2D surface abstraction and scene drawing
//! - `driver`: Frame driver that owns the state and interleaves render/step
//! - `platform`: Browser wiring (canvas, buttons, animation frames)
//! - `settings`: Persisted tunables

pub mod driver;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::FrameDriver;
pub use settings::Settings;

/// Animation constants
pub mod consts {
    /// Default balloon radius in pixels
    pub const BALLOON_RADIUS: f32 = 30.0;
    /// Balloons kept alive at once before the oldest is evicted
    pub const MAX_BALLOONS: usize = 5;
    /// Upper bound accepted from settings for the balloon cap
    pub const MAX_BALLOONS_LIMIT: usize = 64;
    /// Launch point distance above the bottom edge
    pub const LAUNCH_OFFSET: f32 = 100.0;

    /// Particles emitted by one burst, evenly spaced on a ring
    pub const BURST_PARTICLES: usize = 30;
    /// Upper bound accepted from settings for particles per burst
    pub const BURST_PARTICLES_LIMIT: usize = 360;
    /// Particle speed range (pixels per frame)
    pub const PARTICLE_SPEED_MIN: f32 = 3.0;
    pub const PARTICLE_SPEED_MAX: f32 = 6.0;
    /// Particle dot radius range
    pub const PARTICLE_SIZE_MIN: f32 = 2.0;
    pub const PARTICLE_SIZE_MAX: f32 = 5.0;
    /// Starting life range
    pub const PARTICLE_LIFE_MIN: f32 = 0.5;
    pub const PARTICLE_LIFE_MAX: f32 = 1.0;
    /// Life lost per frame
    pub const PARTICLE_DECAY_MIN: f32 = 0.02;
    pub const PARTICLE_DECAY_MAX: f32 = 0.04;

    /// Label font size as a fraction of the balloon radius
    pub const LABEL_FONT_SCALE: f32 = 0.8;
    pub const LABEL_FONT_FAMILY: &str = "Impact";
    pub const LABEL_OUTLINE_WIDTH: f32 = 4.0;
    pub const LABEL_OUTLINE_COLOR: &str = "#000";
    pub const LABEL_GRADIENT_START: &str = "#ffffff";
    pub const LABEL_GRADIENT_END: &str = "#e0e0e0";
    pub const LABEL_SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.5)";
    pub const LABEL_SHADOW_BLUR: f32 = 8.0;
    pub const LABEL_SHADOW_OFFSET: f32 = 3.0;

    /// Seed used by the native demo when none is configured
    pub const DEMO_SEED: u64 = 0xBA11_0017;
}
