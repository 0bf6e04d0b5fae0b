//! Render Module
//!
//! Biến ScanResult thành verdict card, indicator list và impact list.
//!
//! ## Structure
//! - `types`: View models (ResultCard, IndicatorCard, PanelChange, RenderPlan)
//! - `renderer`: ScanResult -> RenderPlan
//! - `markup`: RenderPlan -> HTML fragments
//!
//! ## Usage
//! ```ignore
//! use crate::logic::render::{ResultRenderer, PanelChange};
//!
//! let plan = ResultRenderer::default().render(&result);
//! if let PanelChange::Shown(cards) = &plan.indicators {
//!     assert!(cards.len() <= 3);
//! }
//! ```

pub mod types;
pub mod renderer;
pub mod markup;

pub use types::{
    CardTone,
    VerdictCard,
    LoadingCard,
    ResultCard,
    IndicatorCard,
    PanelChange,
    RenderPlan,
};

pub use renderer::{format_confidence, ResultRenderer};
pub use markup::{render_fragments, HtmlFragments};
