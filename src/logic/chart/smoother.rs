//! Chart Smoother
//!
//! Owns the single feature-importance chart. Updates mutate the live
//! instance's data and animate it; the chart is only ever recreated by an
//! explicit `initialize`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{
    ChartHandle, ChartSpec, ImportanceVector, Transition, BASELINE, FEATURE_COUNT, JITTER_BOUNDS,
};

/// Charting library seam. Implemented by the presentation adapter.
pub trait ChartBackend: Send {
    /// Create a chart and return its handle
    fn create(&mut self, spec: &ChartSpec) -> ChartHandle;

    /// Tear down a chart created by `create`
    fn destroy(&mut self, handle: ChartHandle);

    /// Replace the data of a live chart and animate towards it
    fn apply(&mut self, handle: ChartHandle, data: &ImportanceVector, transition: &Transition);
}

struct ChartInstance {
    handle: ChartHandle,
    vector: ImportanceVector,
}

pub struct ChartSmoother {
    backend: Box<dyn ChartBackend>,
    instance: Option<ChartInstance>,
    transition: Transition,
    rng: StdRng,
}

impl ChartSmoother {
    pub fn new(backend: Box<dyn ChartBackend>, transition: Transition) -> Self {
        Self::with_rng(backend, transition, StdRng::from_entropy())
    }

    /// Deterministic jitter (tests, replays)
    pub fn with_seed(backend: Box<dyn ChartBackend>, transition: Transition, seed: u64) -> Self {
        Self::with_rng(backend, transition, StdRng::seed_from_u64(seed))
    }

    fn with_rng(backend: Box<dyn ChartBackend>, transition: Transition, rng: StdRng) -> Self {
        Self {
            backend,
            instance: None,
            transition,
            rng,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.instance.is_some()
    }

    /// Data currently on the live chart
    pub fn vector(&self) -> Option<&ImportanceVector> {
        self.instance.as_ref().map(|i| &i.vector)
    }

    /// (Re)create the chart at the baseline. Any existing instance is
    /// destroyed first, so at most one is ever live.
    pub fn initialize(&mut self) {
        self.teardown();

        let spec = ChartSpec::feature_importance(self.transition);
        let handle = self.backend.create(&spec);
        log::debug!("Feature chart created ({:?})", handle);

        self.instance = Some(ChartInstance {
            handle,
            vector: spec.data,
        });
    }

    /// Jitter around the baseline and animate the live chart to it.
    /// Bootstraps the chart instead when none exists yet.
    pub fn update(&mut self) {
        let Some(instance) = self.instance.as_mut() else {
            self.initialize();
            return;
        };

        let vector = jittered(&mut self.rng);
        self.backend.apply(instance.handle, &vector, &self.transition);
        instance.vector = vector;
    }

    /// Destroy the live chart, if any
    pub fn teardown(&mut self) {
        if let Some(old) = self.instance.take() {
            self.backend.destroy(old.handle);
            log::debug!("Feature chart destroyed ({:?})", old.handle);
        }
    }
}

impl Drop for ChartSmoother {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Baseline + uniform noise in `[-bound, bound)`, renormalized
fn jittered<R: Rng>(rng: &mut R) -> ImportanceVector {
    let mut values = [0.0; FEATURE_COUNT];
    for (i, v) in values.iter_mut().enumerate() {
        let bound = JITTER_BOUNDS[i];
        *v = BASELINE[i] + rng.gen_range(-bound..bound);
    }
    ImportanceVector::normalized(values)
}

// ============================================================================
// TESTS
// ============================================================================
