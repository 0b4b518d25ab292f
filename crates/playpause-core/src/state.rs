//! Control states and the layer configuration each one maps to.

use crate::config::Palette;
use crate::layer::LayerKind;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// All possible states of the control. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ButtonState {
    /// Displays a play symbol.
    #[default]
    Play,
    /// Displays a pause symbol.
    Pause,
    /// Displays a play symbol with a loading indication.
    LoadPlay,
    /// Displays a pause symbol with a loading indication.
    LoadPause,
}

impl ButtonState {
    pub const ALL: [ButtonState; 4] = [
        ButtonState::Play,
        ButtonState::Pause,
        ButtonState::LoadPlay,
        ButtonState::LoadPause,
    ];

    /// Whether the play symbol (rather than pause) is shown.
    pub fn shows_play(self) -> bool {
        matches!(self, ButtonState::Play | ButtonState::LoadPlay)
    }

    /// Whether the loading arc replaces the boundary circle.
    pub fn is_loading(self) -> bool {
        matches!(self, ButtonState::LoadPlay | ButtonState::LoadPause)
    }

    /// Target layer configuration for this state.
    pub fn configuration(self) -> LayerConfiguration {
        CONFIGURATIONS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            ButtonState::Play => "play",
            ButtonState::Pause => "pause",
            ButtonState::LoadPlay => "load-play",
            ButtonState::LoadPause => "load-pause",
        }
    }
}

/// Which palette entry a symbol takes its color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Rest,
    Load,
}

/// Target alpha and color role of the play or pause symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolTarget {
    pub alpha: f64,
    pub color: ColorRole,
}

/// Visibility and coloring of every layer for one state.
///
/// The loading arc and boundary circle always use their single rest colors,
/// so only their alpha varies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerConfiguration {
    pub play: SymbolTarget,
    pub pause: SymbolTarget,
    pub loading_alpha: f64,
    pub boundary_alpha: f64,
}

impl LayerConfiguration {
    const fn new(shows_play: bool, loading: bool) -> Self {
        let color = if loading { ColorRole::Load } else { ColorRole::Rest };
        let (play_alpha, pause_alpha) = if shows_play { (1.0, 0.0) } else { (0.0, 1.0) };
        let (loading_alpha, boundary_alpha) = if loading { (1.0, 0.0) } else { (0.0, 1.0) };
        Self {
            play: SymbolTarget {
                alpha: play_alpha,
                color,
            },
            pause: SymbolTarget {
                alpha: pause_alpha,
                color,
            },
            loading_alpha,
            boundary_alpha,
        }
    }

    /// Concrete `(alpha, color)` targets per layer, colors taken from `palette`.
    pub fn resolve(&self, palette: &Palette) -> [(LayerKind, f64, Color); 4] {
        let play = match self.play.color {
            ColorRole::Rest => palette.play_rest,
            ColorRole::Load => palette.play_load,
        };
        let pause = match self.pause.color {
            ColorRole::Rest => palette.pause_rest,
            ColorRole::Load => palette.pause_load,
        };
        [
            (LayerKind::PlaySymbol, self.play.alpha, play.into()),
            (LayerKind::PauseSymbol, self.pause.alpha, pause.into()),
            (
                LayerKind::LoadingArc,
                self.loading_alpha,
                palette.load_rest.into(),
            ),
            (
                LayerKind::BoundaryCircle,
                self.boundary_alpha,
                palette.boundary_rest.into(),
            ),
        ]
    }
}

/// Indexed by `ButtonState as usize`.
const CONFIGURATIONS: [LayerConfiguration; 4] = [
    LayerConfiguration::new(true, false),
    LayerConfiguration::new(false, false),
    LayerConfiguration::new(true, true),
    LayerConfiguration::new(false, true),
];
