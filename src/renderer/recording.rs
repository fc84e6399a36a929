//! Headless surface that records draw calls

use std::convert::Infallible;

use glam::Vec2;

use super::{Fill, LinearGradient, Shadow, Surface};

/// Owned copy of a [`Fill`]
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedFill {
    Color(String),
    Gradient(LinearGradient),
}

impl From<Fill<'_>> for RecordedFill {
    fn from(fill: Fill<'_>) -> Self {
        match fill {
            Fill::Color(c) => RecordedFill::Color(c.to_string()),
            Fill::Gradient(g) => RecordedFill::Gradient(g.clone()),
        }
    }
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    Scale(Vec2),
    GlobalAlpha(f32),
    Shadow(Option<(String, f32, Vec2)>),
    Font(String),
    FillCircle {
        center: Vec2,
        radius: f32,
        fill: RecordedFill,
        alpha: f32,
    },
    StrokeText {
        text: String,
        at: Vec2,
        color: String,
        line_width: f32,
    },
    FillText {
        text: String,
        at: Vec2,
        fill: RecordedFill,
    },
}

/// In-memory surface; never fails. Tracks global alpha across save/restore
/// the way a canvas context does.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    alpha: f32,
    saved: Vec<f32>,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            alpha: 1.0,
            saved: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Current global alpha
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Commands recorded since the last clear
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Starts a new frame; earlier commands are dropped
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn save(&mut self) {
        self.saved.push(self.alpha);
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        if let Some(alpha) = self.saved.pop() {
            self.alpha = alpha;
        }
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, offset: Vec2) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Translate(offset));
        Ok(())
    }

    fn rotate(&mut self, radians: f32) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Rotate(radians));
        Ok(())
    }

    fn scale(&mut self, factor: Vec2) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Scale(factor));
        Ok(())
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
        self.commands.push(DrawCommand::GlobalAlpha(alpha));
    }

    fn set_shadow(&mut self, shadow: Option<Shadow<'_>>) {
        self.commands.push(DrawCommand::Shadow(
            shadow.map(|s| (s.color.to_string(), s.blur, s.offset)),
        ));
    }

    fn set_font(&mut self, font: &str) {
        self.commands.push(DrawCommand::Font(font.to_string()));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill<'_>) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            fill: fill.into(),
            alpha: self.alpha,
        });
        Ok(())
    }

    fn stroke_text(
        &mut self,
        text: &str,
        at: Vec2,
        color: &str,
        line_width: f32,
    ) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::StrokeText {
            text: text.to_string(),
            at,
            color: color.to_string(),
            line_width,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Vec2, fill: Fill<'_>) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::FillText {
            text: text.to_string(),
            at,
            fill: fill.into(),
        });
        Ok(())
    }
}
