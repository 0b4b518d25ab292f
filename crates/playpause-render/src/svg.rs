//! SVG renderer, used for snapshots and tests.

use crate::renderer::{ButtonRenderer, RenderResult, RendererError};
use kurbo::{Cap, Join, Rect};
use peniko::Color;
use playpause_core::LayerPaint;
use std::fmt::Write;

/// Renders a frame into a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    view_box: Rect,
    background: Option<Color>,
    document: String,
}

impl SvgRenderer {
    pub fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            background: None,
            document: String::new(),
        }
    }

    /// Set the background color (transparent by default).
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Document produced by the last [`render`](ButtonRenderer::render).
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn into_document(self) -> String {
        self.document
    }

    fn write_document(&self, paints: &[LayerPaint]) -> Result<String, std::fmt::Error> {
        let vb = self.view_box;
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            vb.width(),
            vb.height(),
            vb.x0,
            vb.y0,
            vb.width(),
            vb.height()
        )?;
        if let Some(background) = self.background {
            writeln!(
                out,
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" fill-opacity="{}"/>"#,
                vb.x0,
                vb.y0,
                vb.width(),
                vb.height(),
                rgb(background),
                opacity(background)
            )?;
        }
        for paint in paints {
            let mut path = paint.path.clone();
            path.apply_affine(paint.transform);
            if path.elements().is_empty() {
                continue;
            }
            let fill = match paint.fill_color {
                Some(color) => format!(
                    r#"fill="{}" fill-opacity="{}""#,
                    rgb(color),
                    opacity(color)
                ),
                None => r#"fill="none""#.to_string(),
            };
            // Transforms are rotation and uniform scale only.
            let [a, b, ..] = paint.transform.as_coeffs();
            let width = paint.stroke.width * a.hypot(b);
            writeln!(
                out,
                r#"  <path data-layer="{}" d="{}" {} stroke="{}" stroke-opacity="{}" stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}"/>"#,
                paint.kind.name(),
                path.to_svg(),
                fill,
                rgb(paint.stroke_color),
                opacity(paint.stroke_color),
                width,
                linecap(paint.stroke.start_cap),
                linejoin(paint.stroke.join)
            )?;
        }
        out.push_str("</svg>\n");
        Ok(out)
    }
}

impl ButtonRenderer for SvgRenderer {
    fn render(&mut self, paints: &[LayerPaint]) -> RenderResult<()> {
        self.document = self
            .write_document(paints)
            .map_err(|e| RendererError::RenderFailed(e.to_string()))?;
        log::trace!("SVG frame: {} layers, {} bytes", paints.len(), self.document.len());
        Ok(())
    }
}

fn rgb(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn opacity(color: Color) -> f32 {
    color.components[3].clamp(0.0, 1.0)
}

fn linecap(cap: Cap) -> &'static str {
    match cap {
        Cap::Butt => "butt",
        Cap::Square => "square",
        Cap::Round => "round",
    }
}

fn linejoin(join: Join) -> &'static str {
    match join {
        Join::Bevel => "bevel",
        Join::Miter => "miter",
        Join::Round => "round",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use playpause_core::{ButtonState, ManualClock, PlayButtonView};

    fn render(state: ButtonState) -> String {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut view = PlayButtonView::with_clock(bounds, ManualClock::new());
        view.enter_state(state, false);
        let mut renderer = SvgRenderer::new(bounds);
        renderer.render(&view.display_list()).unwrap();
        renderer.into_document()
    }

    #[test]
    fn test_play_frame() {
        let svg = render(ButtonState::Play);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"data-layer="play""#));
        assert!(svg.contains(r#"data-layer="boundary""#));
        assert!(!svg.contains(r#"data-layer="pause""#));
        assert!(!svg.contains(r#"data-layer="loading""#));
    }

    #[test]
    fn test_load_pause_frame() {
        let svg = render(ButtonState::LoadPause);
        assert!(svg.contains(r#"data-layer="pause""#));
        assert!(svg.contains(r#"data-layer="loading""#));
        assert!(svg.contains(r#"stroke-linecap="round""#));
        assert!(!svg.contains(r#"data-layer="boundary""#));
    }

    #[test]
    fn test_only_play_is_filled() {
        let svg = render(ButtonState::Play);
        let play = svg.lines().find(|l| l.contains(r#"data-layer="play""#)).unwrap();
        assert!(play.contains(r##"fill="#000000""##));
        let boundary = svg.lines().find(|l| l.contains(r#"data-layer="boundary""#)).unwrap();
        assert!(boundary.contains(r#"fill="none""#));
    }

    #[test]
    fn test_background() {
        let mut renderer =
            SvgRenderer::new(Rect::new(0.0, 0.0, 10.0, 10.0)).with_background(Color::WHITE);
        renderer.render(&[]).unwrap();
        assert!(renderer.document().contains(r##"<rect x="0" y="0" width="10" height="10" fill="#ffffff""##));
    }

    #[test]
    fn test_color_helpers() {
        assert_eq!(rgb(Color::from_rgba8(255, 16, 0, 128)), "#ff1000");
        assert!((opacity(Color::from_rgba8(0, 0, 0, 255)) - 1.0).abs() < 1e-6);
        assert_eq!(linecap(Cap::Round), "round");
        assert_eq!(linejoin(Join::Miter), "miter");
    }
}
