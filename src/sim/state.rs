//! Simulation state and entity types
//!
//! Everything the frame driver advances lives in [`SimState`]; there is no
//! other mutable animation state.

use std::fmt;

use glam::Vec2;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::settings::Settings;

/// Number of letters in a label cycle
pub const ALPHABET_LEN: usize = 26;

/// 24-bit RGB color, displayed as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Uniformly random color below pure white (duplicates are fine)
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(0..0x00FF_FFFF))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00FF_FFFF)
    }
}

/// A lettered balloon
#[derive(Debug, Clone, PartialEq)]
pub struct Balloon {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub letter: char,
    /// Set on creation and never cleared
    pub is_flying: bool,
    /// Popped balloons stay in the collection, frozen and invisible
    pub burst: bool,
}

impl Balloon {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Rgb, letter: char) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            letter,
            is_flying: true,
            burst: false,
        }
    }

    /// Whether a click could still pop this balloon
    #[inline]
    pub fn is_poppable(&self) -> bool {
        self.is_flying && !self.burst
    }

    /// Point lies inside or on the balloon's circle
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) <= self.radius
    }
}

/// A burst fragment
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Rgb,
    pub size: f32,
    /// Starts in [0.5, 1.0), drives fade, spin and shrink
    pub life: f32,
    /// Life lost per step
    pub decay: f32,
}

impl Particle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// Shuffled alphabet handed out in order, wrapping back to the start of the
/// same permutation after 26 letters.
#[derive(Debug, Clone)]
pub struct LetterCycle {
    order: [char; ALPHABET_LEN],
    next: usize,
}

impl LetterCycle {
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut order: [char; ALPHABET_LEN] = std::array::from_fn(|i| (b'A' + i as u8) as char);
        order.shuffle(rng);
        Self { order, next: 0 }
    }

    /// The permutation in hand-out order
    pub fn order(&self) -> &[char; ALPHABET_LEN] {
        &self.order
    }

    pub fn next_letter(&mut self) -> char {
        let letter = self.order[self.next];
        self.next = (self.next + 1) % ALPHABET_LEN;
        letter
    }
}

/// Tunables the simulation reads at runtime
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub balloon_radius: f32,
    pub max_balloons: usize,
    pub launch_offset: f32,
    pub burst_particles: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            balloon_radius: BALLOON_RADIUS,
            max_balloons: MAX_BALLOONS,
            launch_offset: LAUNCH_OFFSET,
            burst_particles: BURST_PARTICLES,
        }
    }
}

impl From<&Settings> for SimConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            balloon_radius: settings.balloon_radius,
            max_balloons: settings.max_balloons.clamp(1, MAX_BALLOONS_LIMIT),
            launch_offset: settings.launch_offset,
            burst_particles: settings.burst_particles.min(BURST_PARTICLES_LIMIT),
        }
    }
}

/// Complete animation state
#[derive(Debug, Clone)]
pub struct SimState {
    /// Seed the RNG and letter shuffle were drawn from
    pub seed: u64,
    /// Surface size in pixels
    pub width: f32,
    pub height: f32,
    /// Oldest first
    pub balloons: Vec<Balloon>,
    pub particles: Vec<Particle>,
    pub letters: LetterCycle,
    /// Simulation steps taken
    pub frame: u64,
    pub(crate) config: SimConfig,
    pub(crate) rng: Pcg32,
}

impl SimState {
    pub fn new(width: f32, height: f32, config: SimConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let letters = LetterCycle::shuffled(&mut rng);
        Self {
            seed,
            width,
            height,
            balloons: Vec::with_capacity(config.max_balloons),
            particles: Vec::new(),
            letters,
            frame: 0,
            config,
            rng,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Where new balloons appear: horizontal centre, above the bottom edge
    pub fn launch_point(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - self.config.launch_offset)
    }

    /// Create a balloon at the launch point, evicting the oldest one first
    /// when the collection is full. Returns the evicted balloon, if any.
    pub fn spawn_balloon(&mut self) -> Option<Balloon> {
        let evicted = if self.balloons.len() >= self.config.max_balloons {
            Some(self.balloons.remove(0))
        } else {
            None
        };

        let color = Rgb::random(&mut self.rng);
        let letter = self.letters.next_letter();
        let vel = Vec2::new(
            self.rng.random_range(-1.0..1.0),
            self.rng.random_range(-1.0..1.0),
        );
        let balloon = Balloon::new(self.launch_point(), vel, self.config.balloon_radius, color, letter);
        log::debug!(
            "Spawned balloon '{}' {} (evicted: {})",
            balloon.letter,
            balloon.color,
            evicted.is_some()
        );
        self.balloons.push(balloon);

        evicted
    }

    /// Drop every balloon; particles keep animating
    pub fn clear_balloons(&mut self) {
        self.balloons.clear();
    }

    /// Balloons that are still drawn and moved
    pub fn live_balloons(&self) -> impl Iterator<Item = &Balloon> {
        self.balloons.iter().filter(|b| !b.burst)
    }
}
