//! Frame driver
//!
//! Owns the single mutable [`SimState`] and the render surface. Host input is
//! delivered as [`InputEvent`] messages between frames; each frame draws the
//! current state and then steps it, so particles are drawn with the previous
//! step's life.

use glam::Vec2;

use crate::renderer::{Surface, draw_scene};
use crate::settings::Settings;
use crate::sim::{SimConfig, SimState, burst_at, tick};

/// Driver lifecycle. `Running` is entered once and never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverPhase {
    Idle,
    Running,
}

/// Input delivered by the host between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Spawn control pressed
    Spawn,
    /// Reset control pressed
    Reset,
    /// Click in viewport coordinates, with the canvas's on-screen top-left
    Click { client: Vec2, canvas_origin: Vec2 },
}

/// Convert a viewport coordinate to canvas-local pixels
#[inline]
pub fn canvas_local(client: Vec2, canvas_origin: Vec2) -> Vec2 {
    client - canvas_origin
}

pub struct FrameDriver<S: Surface> {
    state: SimState,
    surface: S,
    font_family: String,
    phase: DriverPhase,
}

impl<S: Surface> FrameDriver<S> {
    /// Build a driver sized to the surface
    pub fn new(surface: S, settings: &Settings, seed: u64) -> Self {
        let (width, height) = surface.size();
        Self {
            state: SimState::new(width, height, SimConfig::from(settings), seed),
            surface,
            font_family: settings.font_family.clone(),
            phase: DriverPhase::Idle,
        }
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    /// Enter `Running`. Returns false if already running, so the host
    /// schedules only one frame loop.
    pub fn start(&mut self) -> bool {
        if self.phase == DriverPhase::Running {
            return false;
        }
        self.phase = DriverPhase::Running;
        log::info!(
            "Frame loop started ({}x{}, seed {})",
            self.state.width,
            self.state.height,
            self.state.seed
        );
        true
    }

    /// Run one frame: draw, then step. Returns whether the host should
    /// schedule another frame.
    pub fn frame(&mut self) -> bool {
        if self.phase != DriverPhase::Running {
            return false;
        }
        self.redraw();
        tick(&mut self.state);
        true
    }

    /// Draw the current state without stepping it
    pub fn redraw(&mut self) {
        if let Err(e) = draw_scene(&mut self.surface, &self.state, &self.font_family) {
            log::warn!("Render error: {:?}", e);
        }
    }

    /// Apply one host input
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Spawn => {
                self.state.spawn_balloon();
            }
            InputEvent::Reset => {
                self.state.clear_balloons();
                self.redraw();
                log::info!("Balloons reset ({} particles still live)", self.state.particles.len());
            }
            InputEvent::Click {
                client,
                canvas_origin,
            } => {
                burst_at(&mut self.state, canvas_local(client, canvas_origin));
            }
        }
    }
}
