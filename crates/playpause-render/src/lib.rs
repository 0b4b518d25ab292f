//! PlayPause Render Library
//!
//! Renderer abstraction and implementations for the PlayPause control.
//! The default implementation writes SVG; a Vello backend is available
//! behind the `vello-renderer` feature.

mod renderer;
mod snapshot;
mod svg;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{ButtonRenderer, RenderResult, RendererError};
pub use snapshot::{SnapshotFrame, write_snapshots};
pub use svg::SvgRenderer;

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloRenderer;
