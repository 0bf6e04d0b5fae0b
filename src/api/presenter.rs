//! Presenter - seam tới lớp hiển thị
//!
//! The thin adapter (DOM, TUI, webview bridge) implements this; the Dashboard
//! only ever talks to the screen through it.

use crate::logic::render::{IndicatorCard, LoadingCard, ResultCard};

pub trait Presenter: Send + Sync {
    /// Replace the result card
    fn show_card(&self, card: &ResultCard);

    fn show_loading(&self, card: &LoadingCard);

    /// Replace the indicator panel with `cards` (already truncated)
    fn show_indicators(&self, cards: &[IndicatorCard]);

    fn clear_indicators(&self);

    /// Show the impact panel as an ordered list
    fn show_impact(&self, items: &[String]);

    fn hide_impact(&self);

    fn set_simulation_visible(&self, visible: bool);

    /// Blocking notification (alert box)
    fn notify_error(&self, message: &str);
}
