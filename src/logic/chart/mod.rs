//! Chart Module
//!
//! Feature-importance bar chart: một instance duy nhất, update bằng cách
//! thay data tại chỗ + animation, không tạo lại chart.
//!
//! ## Structure
//! - `types`: Layout constants, ImportanceVector, Transition, ChartSpec
//! - `smoother`: ChartBackend trait + ChartSmoother lifecycle

pub mod types;
pub mod smoother;

pub use types::{
    ChartHandle,
    ChartKind,
    ChartSpec,
    Easing,
    ImportanceVector,
    Transition,
    BASELINE,
    FEATURE_LABELS,
    JITTER_BOUNDS,
};

pub use smoother::{ChartBackend, ChartSmoother};
