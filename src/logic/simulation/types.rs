//! Simulation Types
//!
//! Playback state + desktop surface seam.
//! KHÔNG chứa logic playback - chỉ data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// DESKTOP VISUALS
// ============================================================================

pub const NEUTRAL_BACKGROUND: &str = "#0f172a";
pub const COMPROMISED_BACKGROUND: &str = "#7f1d1d";
pub const FULL_OPACITY: f32 = 1.0;
pub const DIMMED_OPACITY: f32 = 0.8;

/// Elapsed label before the first step
pub const ELAPSED_ZERO: &str = "0s";

/// Simulated desktop, implemented by the presentation adapter.
///
/// Calls arrive from the playback task while the engine holds its state lock;
/// implementations must not call back into the engine.
pub trait DesktopSurface: Send + Sync {
    fn set_icons_encrypted(&self, encrypted: bool);
    fn set_ransom_popup_visible(&self, visible: bool);
    fn set_desktop_background(&self, color: &str);
    fn set_desktop_opacity(&self, opacity: f32);
    fn set_step_description(&self, text: &str);
    fn set_elapsed_label(&self, label: &str);
}

// ============================================================================
// PLAYBACK STATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackPhase {
    #[default]
    Idle,
    Playing,
    /// Terminal until the next `play` or `reset`
    Completed,
}

impl PlaybackPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackPhase::Idle => "idle",
            PlaybackPhase::Playing => "playing",
            PlaybackPhase::Completed => "completed",
        }
    }
}

impl std::fmt::Display for PlaybackPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EffectFlags {
    pub encrypted: bool,
    pub ransom_visible: bool,
    pub wallpaper_compromised: bool,
}

impl EffectFlags {
    pub fn any(&self) -> bool {
        self.encrypted || self.ransom_visible || self.wallpaper_compromised
    }
}

/// Point-in-time copy of the engine's playback state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub phase: PlaybackPhase,
    pub step_index: usize,
    pub step_text: String,
    pub elapsed_label: String,
    pub effects: EffectFlags,
    /// Ownership token; bumped by every reset
    pub generation: u64,
}

impl Default for PlaybackSnapshot {
    fn default() -> Self {
        Self {
            phase: PlaybackPhase::Idle,
            step_index: 0,
            step_text: String::new(),
            elapsed_label: ELAPSED_ZERO.to_string(),
            effects: EffectFlags::default(),
            generation: 0,
        }
    }
}
