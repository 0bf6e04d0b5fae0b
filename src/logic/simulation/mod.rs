//! Simulation Module
//!
//! Phát lại hành vi malware trên desktop giả lập, mỗi tick một step.
//!
//! ## Structure
//! - `types`: PlaybackPhase, EffectFlags, PlaybackSnapshot, DesktopSurface
//! - `effects`: Keyword table -> Effect
//! - `engine`: SimulationEngine (play / reset)
//!
//! ## Usage
//! ```ignore
//! use crate::logic::simulation::{SimulationEngine, PlaybackTiming};
//!
//! let mut engine = SimulationEngine::new(surface, PlaybackTiming::default());
//! engine.play(&result.simulation_steps)?;
//! // ... one step per second ...
//! engine.reset();
//! ```

pub mod types;
pub mod effects;
pub mod engine;


pub use types::{
    DesktopSurface,
    EffectFlags,
    PlaybackPhase,
    PlaybackSnapshot,
    COMPROMISED_BACKGROUND,
    DIMMED_OPACITY,
    ELAPSED_ZERO,
    FULL_OPACITY,
    NEUTRAL_BACKGROUND,
};

pub use effects::{effects_for, Effect, EFFECT_KEYWORDS};
pub use engine::{PlaybackTiming, SimulationEngine};
