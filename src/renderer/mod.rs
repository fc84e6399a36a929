//! 2D rendering module
//!
//! The scene is drawn through the [`Surface`] trait: the browser canvas
//! context on wasm32, or an in-memory [`RecordingSurface`] for headless runs
//! and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod scene;

use glam::Vec2;

pub use recording::{DrawCommand, RecordingSurface};
pub use scene::draw_scene;

/// Two-stop horizontal or diagonal gradient in surface coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    /// (offset in 0..=1, CSS color)
    pub stops: Vec<(f32, String)>,
}

/// Paint used for filled shapes and text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill<'a> {
    Color(&'a str),
    Gradient(&'a LinearGradient),
}

/// Drop shadow applied to subsequent draws
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow<'a> {
    pub color: &'a str,
    pub blur: f32,
    pub offset: Vec2,
}

/// Primitive 2D drawing operations with a fixed pixel size.
///
/// Text is drawn centred on its anchor both horizontally and vertically.
pub trait Surface {
    /// Error raised by fallible host calls
    type Error: std::fmt::Debug;

    /// Pixel width and height
    fn size(&self) -> (f32, f32);

    /// Clear the whole surface
    fn clear(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2) -> Result<(), Self::Error>;
    fn rotate(&mut self, radians: f32) -> Result<(), Self::Error>;
    fn scale(&mut self, factor: Vec2) -> Result<(), Self::Error>;

    /// Opacity for subsequent draws (0..=1)
    fn set_global_alpha(&mut self, alpha: f32);
    /// `None` disables the shadow
    fn set_shadow(&mut self, shadow: Option<Shadow<'_>>);
    /// CSS font shorthand, e.g. `bold 24px Impact`
    fn set_font(&mut self, font: &str);

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill<'_>) -> Result<(), Self::Error>;
    fn stroke_text(
        &mut self,
        text: &str,
        at: Vec2,
        color: &str,
        line_width: f32,
    ) -> Result<(), Self::Error>;
    fn fill_text(&mut self, text: &str, at: Vec2, fill: Fill<'_>) -> Result<(), Self::Error>;
}
