//! Fixed per-frame simulation step
//!
//! One call advances everything by exactly one frame; there is no delta-time
//! scaling.

use super::state::{Balloon, Particle, SimState};

/// Advance the animation by one frame
pub fn tick(state: &mut SimState) {
    step_particles(&mut state.particles);

    let (width, height) = (state.width, state.height);
    for balloon in state.balloons.iter_mut().filter(|b| !b.burst) {
        step_balloon(balloon, width, height);
    }

    state.frame += 1;
}

/// Prune dead particles, then move and age the survivors
pub fn step_particles(particles: &mut Vec<Particle>) {
    particles.retain(Particle::is_alive);
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life -= particle.decay;
    }
}

/// Move a balloon and bounce it off the surface edges.
///
/// Edges are tested after the move, so the balloon may overlap an edge for a
/// frame before the flipped velocity carries it back.
pub fn step_balloon(balloon: &mut Balloon, width: f32, height: f32) {
    balloon.pos += balloon.vel;
    balloon.vel.x = bounce(balloon.pos.x, balloon.radius, balloon.vel.x, width);
    balloon.vel.y = bounce(balloon.pos.y, balloon.radius, balloon.vel.y, height);
}

/// Velocity along one axis after edge reflection. Only flips when heading
/// further out, so a balloon still overlapping the edge is not flipped back.
#[inline]
fn bounce(pos: f32, radius: f32, vel: f32, extent: f32) -> f32 {
    let past_min = pos - radius < 0.0 && vel < 0.0;
    let past_max = pos + radius > extent && vel > 0.0;
    if past_min || past_max { -vel } else { vel }
}
