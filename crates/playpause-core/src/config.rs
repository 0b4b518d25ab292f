//! Control configuration: timings, highlight scale and palette.
//!
//! Configuration is plain data. Changing it never starts an animation by
//! itself; the next state entry or press reads the new values.

use crate::animation::duration_from_secs;
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid duration for {field}: {value}")]
    InvalidDuration { field: &'static str, value: f64 },
    #[error("Invalid boundary scale: {0} (must be finite and >= 1)")]
    InvalidScale(f64),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl Default for SerializableColor {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Semantic colors of the control. All default to black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Play symbol with no loading and no interaction.
    pub play_rest: SerializableColor,
    /// Play symbol while pressed.
    pub play_tap: SerializableColor,
    /// Play symbol while loading.
    pub play_load: SerializableColor,
    /// Pause symbol with no loading and no interaction.
    pub pause_rest: SerializableColor,
    /// Pause symbol while pressed.
    pub pause_tap: SerializableColor,
    /// Pause symbol while loading.
    pub pause_load: SerializableColor,
    /// Boundary circle.
    pub boundary_rest: SerializableColor,
    /// Loading arc.
    pub load_rest: SerializableColor,
}

/// Timings and appearance of a play button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Seconds to switch from one state to another. Also the duration of
    /// the highlight spring; the highlight color flip takes half of it.
    pub state_switch_duration: f64,
    /// Seconds for the highlight. Kept for hosts that read it; the highlight
    /// timings follow `state_switch_duration`.
    pub highlight_duration: f64,
    /// Scale of the boundary circle and loading arc while pressed.
    pub max_boundary_scale: f64,
    /// Seconds per revolution of the loading arc.
    pub rotation_period: f64,
    pub palette: Palette,
}

impl ButtonConfig {
    /// State switch duration of the bare view.
    pub const VIEW_STATE_SWITCH_DURATION: f64 = 0.7;
    /// State switch duration of the outer control.
    pub const CONTROL_STATE_SWITCH_DURATION: f64 = 0.3;
    pub const DEFAULT_HIGHLIGHT_DURATION: f64 = 0.5;
    pub const DEFAULT_MAX_BOUNDARY_SCALE: f64 = 1.4;
    pub const DEFAULT_ROTATION_PERIOD: f64 = 1.0;

    /// Defaults of the outer [`PlayButton`](crate::PlayButton) control.
    pub fn for_control() -> Self {
        Self {
            state_switch_duration: Self::CONTROL_STATE_SWITCH_DURATION,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON configuration and validate it.
    /// Missing fields take the view defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that durations are non-negative and finite and that the
    /// boundary scale is at least 1.
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("state_switch_duration", self.state_switch_duration),
            ("highlight_duration", self.highlight_duration),
            ("rotation_period", self.rotation_period),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDuration { field, value });
            }
        }
        if !self.max_boundary_scale.is_finite() || self.max_boundary_scale < 1.0 {
            return Err(ConfigError::InvalidScale(self.max_boundary_scale));
        }
        Ok(())
    }

    pub fn state_switch(&self) -> Duration {
        duration_from_secs(self.state_switch_duration)
    }

    /// Duration of the highlight color cross-fade.
    pub fn color_flip(&self) -> Duration {
        duration_from_secs(self.state_switch_duration * 0.5)
    }

    pub fn highlight(&self) -> Duration {
        duration_from_secs(self.highlight_duration)
    }

    pub fn rotation(&self) -> Duration {
        duration_from_secs(self.rotation_period)
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            state_switch_duration: Self::VIEW_STATE_SWITCH_DURATION,
            highlight_duration: Self::DEFAULT_HIGHLIGHT_DURATION,
            max_boundary_scale: Self::DEFAULT_MAX_BOUNDARY_SCALE,
            rotation_period: Self::DEFAULT_ROTATION_PERIOD,
            palette: Palette::default(),
        }
    }
}
