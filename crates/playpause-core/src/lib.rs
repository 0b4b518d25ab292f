//! PlayPause Core Library
//!
//! Platform-agnostic state machine, animation and geometry for an animated
//! play/pause/loading control. Rendering and input capture are left to the
//! host; this crate produces a display list and consumes press events.

pub mod animation;
pub mod config;
pub mod control;
pub mod geometry;
pub mod layer;
pub mod shapes;
pub mod state;
pub mod view;

pub use animation::{Animated, Clock, Curve, Lerp, ManualClock, Rotation, SystemClock};
pub use config::{ButtonConfig, ConfigError, ConfigResult, Palette, SerializableColor};
pub use control::PlayButton;
pub use geometry::{TriangleVertices, to_cartesian};
pub use layer::{Layer, LayerKind, LayerPaint, LayerSnapshot};
pub use shapes::Symbol;
pub use state::{ButtonState, ColorRole, LayerConfiguration, SymbolTarget};
pub use view::PlayButtonView;
