//! Pointer hit-testing and burst particle rings

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Balloon, Particle, SimState};
use crate::consts::*;

/// Pop every poppable balloon under `point` (canvas-local pixels).
///
/// All balloons are tested in insertion order with no early exit, so
/// overlapping balloons burst together. Returns how many burst.
pub fn burst_at(state: &mut SimState, point: Vec2) -> usize {
    let SimState {
        balloons,
        particles,
        rng,
        config,
        ..
    } = state;

    let mut popped = 0;
    for balloon in balloons.iter_mut() {
        if balloon.is_poppable() && balloon.contains(point) {
            balloon.burst = true;
            emit_ring(particles, balloon, config.burst_particles, rng);
            popped += 1;
            log::debug!(
                "Burst balloon '{}' at ({:.1}, {:.1}), {} particles live",
                balloon.letter,
                balloon.pos.x,
                balloon.pos.y,
                particles.len()
            );
        }
    }
    popped
}

/// Append `count` particles on an evenly spaced ring around the balloon
pub fn emit_ring<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    balloon: &Balloon,
    count: usize,
    rng: &mut R,
) {
    particles.reserve(count);
    for i in 0..count {
        let angle = TAU * (i as f32 / count as f32);
        let speed = rng.random_range(PARTICLE_SPEED_MIN..PARTICLE_SPEED_MAX);
        particles.push(Particle {
            pos: balloon.pos,
            vel: Vec2::from_angle(angle) * speed,
            color: balloon.color,
            size: rng.random_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
            life: rng.random_range(PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX),
            decay: rng.random_range(PARTICLE_DECAY_MIN..PARTICLE_DECAY_MAX),
        });
    }
}
