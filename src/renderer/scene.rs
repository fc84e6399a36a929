//! Scene drawing: balloons with lettered labels, then burst particles.
//!
//! Reads simulation state only; never mutates it.

use std::f32::consts::TAU;

use glam::Vec2;

use super::{Fill, LinearGradient, Shadow, Surface};
use crate::consts::*;
use crate::sim::{Balloon, Particle, SimState};

/// Draw one frame: clear, live balloons, then particles.
///
/// # Errors
///
/// Returns the first failing surface call.
pub fn draw_scene<S: Surface>(surface: &mut S, state: &SimState, font_family: &str) -> Result<(), S::Error> {
    surface.clear();

    for balloon in state.live_balloons() {
        draw_balloon(surface, balloon, font_family)?;
    }

    draw_particles(surface, &state.particles)
}

fn draw_balloon<S: Surface>(surface: &mut S, balloon: &Balloon, font_family: &str) -> Result<(), S::Error> {
    let color = balloon.color.to_string();
    surface.fill_circle(balloon.pos, balloon.radius, Fill::Color(&color))?;

    surface.set_font(&label_font(balloon.radius, font_family));
    surface.set_shadow(Some(Shadow {
        color: LABEL_SHADOW_COLOR,
        blur: LABEL_SHADOW_BLUR,
        offset: Vec2::splat(LABEL_SHADOW_OFFSET),
    }));

    let mut buf = [0u8; 4];
    let letter = balloon.letter.encode_utf8(&mut buf);
    let gradient = label_gradient(balloon);

    // Outline first so the gradient fill sits on top
    let drawn = surface
        .stroke_text(letter, balloon.pos, LABEL_OUTLINE_COLOR, LABEL_OUTLINE_WIDTH)
        .and_then(|()| surface.fill_text(letter, balloon.pos, Fill::Gradient(&gradient)));

    surface.set_shadow(None);
    drawn
}

/// `bold {0.8 r}px {family}`
pub fn label_font(radius: f32, font_family: &str) -> String {
    format!("bold {}px {}", radius * LABEL_FONT_SCALE, font_family)
}

/// White to light gray across the middle half of the balloon
pub fn label_gradient(balloon: &Balloon) -> LinearGradient {
    let half = balloon.radius / 2.0;
    LinearGradient {
        start: balloon.pos - Vec2::new(half, 0.0),
        end: balloon.pos + Vec2::new(half, 0.0),
        stops: vec![
            (0.0, LABEL_GRADIENT_START.to_string()),
            (1.0, LABEL_GRADIENT_END.to_string()),
        ],
    }
}

/// Each particle spins by `life * 2π`, shrinks by `life` and fades to
/// `life` opacity. Opacity is restored only once every particle is drawn,
/// or as soon as one fails.
fn draw_particles<S: Surface>(surface: &mut S, particles: &[Particle]) -> Result<(), S::Error> {
    for particle in particles {
        surface.save();
        let drawn = draw_particle(surface, particle);
        surface.restore();
        if drawn.is_err() {
            surface.set_global_alpha(1.0);
            return drawn;
        }
    }
    surface.set_global_alpha(1.0);
    Ok(())
}

/// Transform and fill one particle; the caller owns save/restore
fn draw_particle<S: Surface>(surface: &mut S, particle: &Particle) -> Result<(), S::Error> {
    let color = particle.color.to_string();
    surface.translate(particle.pos)?;
    surface.rotate(particle.life * TAU)?;
    surface.scale(Vec2::splat(particle.life))?;
    surface.set_global_alpha(particle.life);
    surface.fill_circle(Vec2::ZERO, particle.size, Fill::Color(&color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::renderer::recording::RecordedFill;
    use crate::sim::{SimConfig, burst_at};

    fn state() -> SimState {
        SimState::new(800.0, 600.0, SimConfig::default(), 2024)
    }

    #[test]
    fn test_empty_scene_only_clears() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        draw_scene(&mut surface, &state(), "Impact").unwrap();
        assert_eq!(surface.commands, vec![DrawCommand::Clear, DrawCommand::GlobalAlpha(1.0)]);
    }

    #[test]
    fn test_balloon_label_order() {
        let mut state = state();
        state.spawn_balloon();
        let balloon = state.balloons[0].clone();

        let mut surface = RecordingSurface::new(800.0, 600.0);
        draw_scene(&mut surface, &state, "Impact").unwrap();
        let cmds = &surface.commands;

        assert_eq!(cmds[0], DrawCommand::Clear);
        assert_eq!(
            cmds[1],
            DrawCommand::FillCircle {
                center: balloon.pos,
                radius: 30.0,
                fill: RecordedFill::Color(balloon.color.to_string()),
                alpha: 1.0,
            }
        );
        assert_eq!(cmds[2], DrawCommand::Font("bold 24px Impact".to_string()));
        assert!(matches!(cmds[3], DrawCommand::Shadow(Some(_))));

        let stroke = cmds.iter().position(|c| matches!(c, DrawCommand::StrokeText { .. })).unwrap();
        let fill = cmds.iter().position(|c| matches!(c, DrawCommand::FillText { .. })).unwrap();
        assert!(stroke < fill, "outline drawn before fill");
        assert_eq!(cmds[fill + 1], DrawCommand::Shadow(None));

        match &cmds[fill] {
            DrawCommand::FillText { text, fill: RecordedFill::Gradient(g), .. } => {
                assert_eq!(text, &balloon.letter.to_string());
                assert_eq!(g.start, balloon.pos - Vec2::new(15.0, 0.0));
                assert_eq!(g.end, balloon.pos + Vec2::new(15.0, 0.0));
                assert_eq!(g.stops[0].1, "#ffffff");
                assert_eq!(g.stops[1].1, "#e0e0e0");
            }
            other => panic!("expected gradient text, got {other:?}"),
        }
    }

    #[test]
    fn test_burst_balloon_not_drawn() {
        let mut state = state();
        state.spawn_balloon();
        let centre = state.launch_point();
        burst_at(&mut state, centre);

        let mut surface = RecordingSurface::new(800.0, 600.0);
        draw_scene(&mut surface, &state, "Impact").unwrap();

        assert!(!surface.commands.iter().any(|c| matches!(c, DrawCommand::StrokeText { .. })));
        let circles = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count();
        assert_eq!(circles, BURST_PARTICLES);
    }

    #[test]
    fn test_particle_transform_and_fade() {
        let mut state = state();
        state.particles.push(Particle {
            pos: Vec2::new(100.0, 200.0),
            vel: Vec2::ZERO,
            color: crate::sim::Rgb(0x00ff00),
            size: 4.0,
            life: 0.5,
            decay: 0.03,
        });

        let mut surface = RecordingSurface::new(800.0, 600.0);
        draw_scene(&mut surface, &state, "Impact").unwrap();

        assert_eq!(
            surface.commands,
            vec![
                DrawCommand::Clear,
                DrawCommand::Save,
                DrawCommand::Translate(Vec2::new(100.0, 200.0)),
                DrawCommand::Rotate(0.5 * TAU),
                DrawCommand::Scale(Vec2::splat(0.5)),
                DrawCommand::GlobalAlpha(0.5),
                DrawCommand::FillCircle {
                    center: Vec2::ZERO,
                    radius: 4.0,
                    fill: RecordedFill::Color("#00ff00".to_string()),
                    alpha: 0.5,
                },
                DrawCommand::Restore,
                DrawCommand::GlobalAlpha(1.0),
            ]
        );
        assert_eq!(surface.alpha(), 1.0);
    }

    /// Recording surface whose `rotate` always fails
    struct RotateFails(RecordingSurface);

    impl Surface for RotateFails {
        type Error = &'static str;

        fn size(&self) -> (f32, f32) {
            self.0.size()
        }
        fn clear(&mut self) {
            self.0.clear();
        }
        fn save(&mut self) {
            self.0.save();
        }
        fn restore(&mut self) {
            self.0.restore();
        }
        fn translate(&mut self, offset: Vec2) -> Result<(), Self::Error> {
            let _ = self.0.translate(offset);
            Ok(())
        }
        fn rotate(&mut self, _radians: f32) -> Result<(), Self::Error> {
            Err("rotate failed")
        }
        fn scale(&mut self, factor: Vec2) -> Result<(), Self::Error> {
            let _ = self.0.scale(factor);
            Ok(())
        }
        fn set_global_alpha(&mut self, alpha: f32) {
            self.0.set_global_alpha(alpha);
        }
        fn set_shadow(&mut self, shadow: Option<Shadow<'_>>) {
            self.0.set_shadow(shadow);
        }
        fn set_font(&mut self, font: &str) {
            self.0.set_font(font);
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill<'_>) -> Result<(), Self::Error> {
            let _ = self.0.fill_circle(center, radius, fill);
            Ok(())
        }
        fn stroke_text(&mut self, text: &str, at: Vec2, color: &str, line_width: f32) -> Result<(), Self::Error> {
            let _ = self.0.stroke_text(text, at, color, line_width);
            Ok(())
        }
        fn fill_text(&mut self, text: &str, at: Vec2, fill: Fill<'_>) -> Result<(), Self::Error> {
            let _ = self.0.fill_text(text, at, fill);
            Ok(())
        }
    }

    #[test]
    fn test_failed_particle_draw_restores_state() {
        let mut state = state();
        state.spawn_balloon();
        let centre = state.launch_point();
        burst_at(&mut state, centre);

        let mut surface = RotateFails(RecordingSurface::new(800.0, 600.0));
        assert_eq!(draw_scene(&mut surface, &state, "Impact"), Err("rotate failed"));

        assert_eq!(
            surface.0.commands,
            vec![
                DrawCommand::Clear,
                DrawCommand::Save,
                DrawCommand::Translate(centre),
                DrawCommand::Restore,
                DrawCommand::GlobalAlpha(1.0),
            ]
        );
        assert_eq!(surface.0.alpha(), 1.0);
    }

    #[test]
    fn test_label_font_scales_with_radius() {
        assert_eq!(label_font(50.0, "Impact"), "bold 40px Impact");
        assert_eq!(label_font(30.0, "Arial Black"), "bold 24px Arial Black");
    }
}
