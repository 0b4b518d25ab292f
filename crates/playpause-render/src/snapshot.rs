//! Static SVG frames of every state, for documentation and visual checks.

use crate::renderer::{ButtonRenderer, RenderResult};
use crate::svg::SvgRenderer;
use kurbo::{Point, Rect};
use playpause_core::{ButtonConfig, ButtonState, ManualClock, PlayButtonView};
use std::fs;
use std::path::{Path, PathBuf};

/// One settled frame: a state, optionally with a press held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotFrame {
    pub state: ButtonState,
    pub highlighted: bool,
}

impl SnapshotFrame {
    /// Every state, at rest and pressed.
    pub fn all() -> impl Iterator<Item = SnapshotFrame> {
        ButtonState::ALL.into_iter().flat_map(|state| {
            [false, true].map(|highlighted| SnapshotFrame { state, highlighted })
        })
    }

    pub fn file_name(&self) -> String {
        if self.highlighted {
            format!("{}-highlighted.svg", self.state.name())
        } else {
            format!("{}.svg", self.state.name())
        }
    }

    /// Drive a fresh view into this frame and render it once all
    /// animations have settled.
    pub fn render(&self, config: &ButtonConfig, bounds: Rect) -> RenderResult<String> {
        let clock = ManualClock::new();
        let mut view = PlayButtonView::with_config(bounds, config.clone(), clock.clone());
        view.on_bounds_changed(bounds);
        view.enter_state(self.state, false);
        if self.highlighted {
            view.notify_press_began(bounds.center());
            clock.advance(config.state_switch());
        }
        view.tick();

        // Pressed scale grows past the bounds; leave room for it.
        let margin = bounds.width().max(bounds.height()) * (config.max_boundary_scale - 1.0) / 2.0;
        let mut renderer = SvgRenderer::new(bounds.inflate(margin, margin));
        renderer.render(&view.display_list())?;
        Ok(renderer.into_document())
    }
}

/// Write every [`SnapshotFrame`] of a `size`-sized button into `out_dir`,
/// creating it if needed. Returns the written paths.
pub fn write_snapshots(config: &ButtonConfig, size: f64, out_dir: &Path) -> RenderResult<Vec<PathBuf>> {
    config.validate()?;
    fs::create_dir_all(out_dir)?;
    let bounds = Rect::from_origin_size(Point::ORIGIN, (size, size));

    let mut written = Vec::new();
    for frame in SnapshotFrame::all() {
        let path = out_dir.join(frame.file_name());
        fs::write(&path, frame.render(config, bounds)?)?;
        log::info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RendererError;

    #[test]
    fn test_writes_every_frame() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("frames");
        let written = write_snapshots(&ButtonConfig::default(), 64.0, &out).unwrap();
        assert_eq!(written.len(), 8);
        for path in &written {
            let svg = fs::read_to_string(path).unwrap();
            assert!(svg.starts_with("<svg"));
        }
        assert!(out.join("load-pause-highlighted.svg").exists());
        assert!(out.join("play.svg").exists());
    }

    #[test]
    fn test_frames_show_their_state() {
        let bounds = Rect::new(0.0, 0.0, 64.0, 64.0);
        let config = ButtonConfig::default();
        let frame = SnapshotFrame {
            state: ButtonState::LoadPlay,
            highlighted: false,
        };
        let svg = frame.render(&config, bounds).unwrap();
        assert!(svg.contains(r#"data-layer="play""#));
        assert!(svg.contains(r#"data-layer="loading""#));
        assert!(!svg.contains(r#"data-layer="pause""#));
    }

    #[test]
    fn test_highlight_changes_the_frame() {
        let bounds = Rect::new(0.0, 0.0, 64.0, 64.0);
        let config = ButtonConfig::default();
        let rest = SnapshotFrame {
            state: ButtonState::Play,
            highlighted: false,
        };
        let pressed = SnapshotFrame {
            highlighted: true,
            ..rest
        };
        assert_ne!(
            rest.render(&config, bounds).unwrap(),
            pressed.render(&config, bounds).unwrap()
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = ButtonConfig {
            max_boundary_scale: 0.2,
            ..ButtonConfig::default()
        };
        let err = write_snapshots(&config, 64.0, dir.path()).unwrap_err();
        assert!(matches!(err, RendererError::Config(_)));
    }
}
