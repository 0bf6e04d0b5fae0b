//! Chart Types
//!
//! Feature-importance chart layout, data vector and transition curve.
//!
//! The values are an illustrative animation around a fixed baseline. They are
//! NOT computed from the scanned file and must not be read as real model
//! feature importance.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::CHART_TRANSITION;

// ============================================================================
// LAYOUT (Authoritative source)
// ============================================================================

pub const FEATURE_COUNT: usize = 6;

/// Bar labels, in vector order
pub const FEATURE_LABELS: [&str; FEATURE_COUNT] = [
    "Entropy",
    "Imports",
    "Size",
    "Sections",
    "Debug",
    "Resources",
];

/// Values shown on first render. Sums to 1.0.
pub const BASELINE: [f64; FEATURE_COUNT] = [0.35, 0.25, 0.15, 0.12, 0.08, 0.05];

/// Max absolute perturbation per feature on update
pub const JITTER_BOUNDS: [f64; FEATURE_COUNT] = [0.025, 0.025, 0.015, 0.015, 0.01, 0.01];

pub const DATASET_LABEL: &str = "Feature Importance";

// ============================================================================
// IMPORTANCE VECTOR
// ============================================================================

/// Six-component chart data, renormalized to sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImportanceVector {
    pub values: [f64; FEATURE_COUNT],
}

impl ImportanceVector {
    pub fn baseline() -> Self {
        Self { values: BASELINE }
    }

    /// Scale so the components sum to 1.0
    pub fn normalized(values: [f64; FEATURE_COUNT]) -> Self {
        let sum: f64 = values.iter().sum();
        let mut out = values;
        if sum > 0.0 {
            for v in out.iter_mut() {
                *v /= sum;
            }
        }
        Self { values: out }
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// (label, value) pairs in display order
    pub fn labeled(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_LABELS.iter().copied().zip(self.values.iter().copied())
    }
}

impl Default for ImportanceVector {
    fn default() -> Self {
        Self::baseline()
    }
}

// ============================================================================
// TRANSITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseInOutQuart,
}

impl Easing {
    /// Progress `t` (0.0 - 1.0) -> eased progress
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
        }
    }
}

/// Bounded, eased data change applied to a live chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration: Duration,
    pub easing: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: CHART_TRANSITION,
            easing: Easing::EaseInOutQuart,
        }
    }
}

impl Transition {
    /// Interpolated frame `elapsed` into the transition
    pub fn frame_at(
        &self,
        from: &ImportanceVector,
        to: &ImportanceVector,
        elapsed: Duration,
    ) -> ImportanceVector {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        let k = self.easing.apply(progress);

        let mut values = [0.0; FEATURE_COUNT];
        for (i, v) in values.iter_mut().enumerate() {
            *v = from.values[i] + (to.values[i] - from.values[i]) * k;
        }
        ImportanceVector { values }
    }
}

// ============================================================================
// CHART SPEC
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarStyle {
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub border_radius: u32,
    pub max_bar_thickness: u32,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            background_color: "#64ffda".to_string(),
            border_color: "#4cc9f0".to_string(),
            border_width: 1,
            border_radius: 4,
            max_bar_thickness: 30,
        }
    }
}

/// Everything a backend needs to create the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub dataset_label: String,
    pub data: ImportanceVector,
    pub style: BarStyle,
    pub y_max: f64,
    pub show_legend: bool,
    pub transition: Transition,
}

impl ChartSpec {
    pub fn feature_importance(transition: Transition) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: FEATURE_LABELS.iter().map(|s| s.to_string()).collect(),
            dataset_label: DATASET_LABEL.to_string(),
            data: ImportanceVector::baseline(),
            style: BarStyle::default(),
            y_max: 0.4,
            show_legend: false,
            transition,
        }
    }

    /// Y axis tick, `0.35` -> `"35%"`
    pub fn format_tick(value: f64) -> String {
        format!("{:.0}%", value * 100.0)
    }

    /// Hover text, `0.35` -> `"Importance: 35.0%"`
    pub fn format_tooltip(value: f64) -> String {
        format!("Importance: {:.1}%", value * 100.0)
    }
}

/// Opaque id of a live chart inside a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartHandle(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_sums_to_one() {
        assert!((ImportanceVector::baseline().sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalized() {
        let v = ImportanceVector::normalized([2.0, 2.0, 1.0, 1.0, 1.0, 1.0]);
        assert!((v.sum() - 1.0).abs() < 1e-12);
        assert_eq!(v.values[0], 0.25);
    }

    #[test]
    fn test_ease_in_out_quart_curve() {
        let easing = Easing::EaseInOutQuart;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
        assert!(easing.apply(0.25) < 0.25);
        assert!(easing.apply(0.75) > 0.75);
        assert_eq!(easing.apply(2.0), 1.0);
    }

    #[test]
    fn test_frame_at_endpoints() {
        let from = ImportanceVector::baseline();
        let to = ImportanceVector::normalized([1.0; FEATURE_COUNT]);
        let transition = Transition::default();

        assert_eq!(transition.frame_at(&from, &to, Duration::ZERO), from);
        let end = transition.frame_at(&from, &to, Duration::from_millis(500));
        for (a, b) in end.values.iter().zip(to.values.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_spec_labels_and_formatting() {
        let spec = ChartSpec::feature_importance(Transition::default());
        assert_eq!(spec.labels, FEATURE_LABELS.to_vec());
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(ChartSpec::format_tick(0.35), "35%");
        assert_eq!(ChartSpec::format_tooltip(0.125), "Importance: 12.5%");
    }

    #[test]
    fn test_labeled_pairs() {
        let pairs: Vec<_> = ImportanceVector::baseline().labeled().collect();
        assert_eq!(pairs[0], ("Entropy", 0.35));
        assert_eq!(pairs[5], ("Resources", 0.05));
    }
}
