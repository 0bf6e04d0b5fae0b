//! Simulation Engine
//!
//! Timer-driven player over an ordered list of behavior steps.
//!
//! ## Lifecycle
//! ```text
//!   Idle ──play(steps)──▶ Playing ──last step applied──▶ Completed
//!    ▲                      │                               │
//!    └──────── reset() ─────┴───────────── reset() ─────────┘
//! ```
//!
//! Exactly one tick task can be live. `reset()` and `play()` abort it and bump
//! the generation under the state lock before anything else happens, and every
//! deferred callback (tick or flash) re-checks the generation it was spawned
//! with, so a stale timer can never touch a newer playback.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};

use super::effects::{effects_for, Effect};
use super::types::{
    DesktopSurface, PlaybackPhase, PlaybackSnapshot, COMPROMISED_BACKGROUND, DIMMED_OPACITY,
    ELAPSED_ZERO, FULL_OPACITY, NEUTRAL_BACKGROUND,
};
use crate::constants::{FLASH_DELAY, SIMULATION_TICK};
use crate::error::{ViewError, ViewResult};
use crate::logic::config::ViewConfig;
use crate::logic::scan::SimulationStep;

/// Tick cadence and flash delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTiming {
    pub tick: Duration,
    pub flash_delay: Duration,
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self {
            tick: SIMULATION_TICK,
            flash_delay: FLASH_DELAY,
        }
    }
}

impl From<&ViewConfig> for PlaybackTiming {
    fn from(config: &ViewConfig) -> Self {
        Self {
            tick: config.tick_interval,
            flash_delay: config.flash_delay,
        }
    }
}

pub struct SimulationEngine {
    state: Arc<Mutex<PlaybackSnapshot>>,
    surface: Arc<dyn DesktopSurface>,
    timing: PlaybackTiming,
    ticker: Option<JoinHandle<()>>,
    loaded: Vec<SimulationStep>,
}

impl SimulationEngine {
    pub fn new(surface: Arc<dyn DesktopSurface>, timing: PlaybackTiming) -> Self {
        Self {
            state: Arc::new(Mutex::new(PlaybackSnapshot::default())),
            surface,
            timing,
            ticker: None,
            loaded: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.state.lock().clone()
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.state.lock().phase
    }

    /// True while a tick task is scheduled
    pub fn timer_armed(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn timing(&self) -> PlaybackTiming {
        self.timing
    }

    /// Remember the steps of the latest malicious result for `play_loaded`
    pub fn load(&mut self, steps: Vec<SimulationStep>) {
        self.loaded = steps;
    }

    pub fn loaded_steps(&self) -> &[SimulationStep] {
        &self.loaded
    }

    pub fn play_loaded(&mut self) -> ViewResult<()> {
        let steps = self.loaded.clone();
        self.play(&steps)
    }

    /// Start a fresh playback of `steps`, one step per tick.
    ///
    /// An empty list never arms a timer: it is a no-op, except that a running
    /// playback is reset.
    pub fn play(&mut self, steps: &[SimulationStep]) -> ViewResult<()> {
        if steps.is_empty() {
            if self.phase() == PlaybackPhase::Playing {
                self.reset();
            }
            return Ok(());
        }

        let runtime = Handle::try_current().map_err(|_| ViewError::RuntimeUnavailable)?;

        self.reset();

        let generation = {
            let mut state = self.state.lock();
            state.phase = PlaybackPhase::Playing;
            state.step_index = 0;
            state.generation
        };

        let playback = Playback {
            state: Arc::clone(&self.state),
            surface: Arc::clone(&self.surface),
            steps: steps.into(),
            generation,
            timing: self.timing,
        };

        log::info!("Simulation started: {} steps (generation {})", steps.len(), generation);
        self.ticker = Some(runtime.spawn(playback.run()));
        Ok(())
    }

    /// Cancel any playback and return every visual to its initial state.
    /// Safe to call from any phase.
    pub fn reset(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }

        let mut state = self.state.lock();
        let generation = state.generation.wrapping_add(1);
        *state = PlaybackSnapshot {
            generation,
            ..PlaybackSnapshot::default()
        };

        self.surface.set_icons_encrypted(false);
        self.surface.set_ransom_popup_visible(false);
        self.surface.set_desktop_background(NEUTRAL_BACKGROUND);
        self.surface.set_desktop_opacity(FULL_OPACITY);
        self.surface.set_elapsed_label(ELAPSED_ZERO);
        self.surface.set_step_description("");

        log::debug!("Simulation reset (generation {})", generation);
    }
}

impl Drop for SimulationEngine {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

// ============================================================================
// PLAYBACK TASK
// ============================================================================

struct Playback {
    state: Arc<Mutex<PlaybackSnapshot>>,
    surface: Arc<dyn DesktopSurface>,
    steps: Arc<[SimulationStep]>,
    generation: u64,
    timing: PlaybackTiming,
}

impl Playback {
    async fn run(self) {
        let mut ticker = interval_at(Instant::now() + self.timing.tick, self.timing.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if !self.tick() {
                break;
            }
        }
    }

    /// Apply the next step. Returns false once this playback is over.
    fn tick(&self) -> bool {
        let mut state = self.state.lock();

        if state.generation != self.generation || state.phase != PlaybackPhase::Playing {
            return false;
        }

        let Some(step) = self.steps.get(state.step_index) else {
            state.phase = PlaybackPhase::Completed;
            return false;
        };

        state.step_text = step.desc.clone();
        state.elapsed_label = step.elapsed_label();
        self.surface.set_step_description(&state.step_text);
        self.surface.set_elapsed_label(&state.elapsed_label);

        for effect in effects_for(&step.desc) {
            self.apply(&mut state, effect);
        }

        state.step_index += 1;
        log::debug!("Simulation step {}/{}: {}", state.step_index, self.steps.len(), step.desc);

        if state.step_index >= self.steps.len() {
            state.phase = PlaybackPhase::Completed;
            log::info!("Simulation completed (generation {})", self.generation);
            return false;
        }
        true
    }

    fn apply(&self, state: &mut PlaybackSnapshot, effect: Effect) {
        log::debug!("Effect fired: {}", effect.as_str());
        match effect {
            Effect::EncryptFiles => {
                if !state.effects.encrypted {
                    state.effects.encrypted = true;
                    self.surface.set_icons_encrypted(true);
                }
            }
            Effect::ShowRansomNote => {
                if !state.effects.ransom_visible {
                    state.effects.ransom_visible = true;
                    self.surface.set_ransom_popup_visible(true);
                }
            }
            Effect::CompromiseWallpaper => {
                state.effects.wallpaper_compromised = true;
                self.surface.set_desktop_background(COMPROMISED_BACKGROUND);
            }
            Effect::FlashDesktop => {
                self.surface.set_desktop_opacity(DIMMED_OPACITY);
                tokio::spawn(restore_opacity(
                    Arc::clone(&self.state),
                    Arc::clone(&self.surface),
                    self.generation,
                    self.timing.flash_delay,
                ));
            }
        }
    }
}

/// Second half of the payload flash. Not tied to the tick task's handle.
async fn restore_opacity(
    state: Arc<Mutex<PlaybackSnapshot>>,
    surface: Arc<dyn DesktopSurface>,
    generation: u64,
    delay: Duration,
) {
    sleep(delay).await;

    let state = state.lock();
    if state.generation == generation {
        surface.set_desktop_opacity(FULL_OPACITY);
    } else {
        log::debug!("Stale flash dropped (generation {} != {})", generation, state.generation);
    }
}
