//! Renderer trait abstraction.

use playpause_core::{ConfigError, LayerPaint};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Trait for rendering backends.
///
/// A backend receives the display list of one frame, in paint order, and
/// records or draws it. Paths are in layer coordinates; each paint carries
/// the transform to apply.
pub trait ButtonRenderer {
    fn render(&mut self, paints: &[LayerPaint]) -> RenderResult<()>;
}
