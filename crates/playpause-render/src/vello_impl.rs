//! Vello-based renderer implementation.

use crate::renderer::{ButtonRenderer, RenderResult};
use kurbo::Affine;
use peniko::Fill;
use playpause_core::LayerPaint;
use vello::Scene;

/// Records button frames into a Vello scene for GPU rendering.
pub struct VelloRenderer {
    scene: Scene,
    /// Applied on top of every layer transform (e.g. HiDPI scaling).
    transform: Affine,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            transform: Affine::IDENTITY,
        }
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take the recorded scene, leaving an empty one behind.
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    fn render_paint(&mut self, paint: &LayerPaint) {
        let transform = self.transform * paint.transform;
        if let Some(fill_color) = paint.fill_color {
            self.scene
                .fill(Fill::NonZero, transform, fill_color, None, &paint.path);
        }
        self.scene
            .stroke(&paint.stroke, transform, paint.stroke_color, None, &paint.path);
    }
}

impl ButtonRenderer for VelloRenderer {
    fn render(&mut self, paints: &[LayerPaint]) -> RenderResult<()> {
        self.scene.reset();
        for paint in paints {
            self.render_paint(paint);
        }
        Ok(())
    }
}
