//! Render Types
//!
//! View models handed to the presentation layer. Serializable so an adapter
//! can forward them to a web frontend unchanged.

use serde::{Deserialize, Serialize};

use crate::logic::scan::SimulationStep;

// ============================================================================
// RESULT CARD
// ============================================================================

/// Card styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTone {
    Malware,
    Safe,
    Error,
}

impl CardTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            // Errors share the alarming style
            CardTone::Malware | CardTone::Error => "result-malware",
            CardTone::Safe => "result-safe",
        }
    }
}

/// Verdict card for a successful scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictCard {
    pub tone: CardTone,
    pub icon: String,
    pub title: String,
    pub family: String,
    pub description: String,
    pub threat_level: String,
    /// e.g. `"87.3%"`
    pub confidence_text: String,
    /// Bar fill width in percent (0 - 100)
    pub confidence_fill: f64,
}

/// Placeholder card shown while a request is in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingCard {
    pub icon: String,
    pub title: String,
    pub caption: String,
    pub fill: f64,
}

impl Default for LoadingCard {
    fn default() -> Self {
        Self {
            icon: "🔍".to_string(),
            title: "Scanning...".to_string(),
            caption: "Analyzing file statistics...".to_string(),
            fill: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultCard {
    Verdict(VerdictCard),
    Error { message: String },
}

impl ResultCard {
    pub fn tone(&self) -> CardTone {
        match self {
            ResultCard::Verdict(card) => card.tone,
            ResultCard::Error { .. } => CardTone::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultCard::Error { .. })
    }
}

// ============================================================================
// INDICATORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorCard {
    pub name: String,
    pub value: String,
    pub detail: String,
    /// Styling tag from the scanner
    pub verdict: String,
}

// ============================================================================
// PANEL CHANGES
// ============================================================================

/// What a render does to one panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "items", rename_all = "snake_case")]
pub enum PanelChange<T> {
    /// Leave the panel exactly as it was
    Untouched,
    /// Clear / hide the panel
    Hidden,
    Shown(T),
}

impl<T> PanelChange<T> {
    pub fn is_untouched(&self) -> bool {
        matches!(self, PanelChange::Untouched)
    }

    pub fn shown(&self) -> Option<&T> {
        match self {
            PanelChange::Shown(items) => Some(items),
            _ => None,
        }
    }
}

/// Everything one ScanResult does to the screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub card: ResultCard,
    pub indicators: PanelChange<Vec<IndicatorCard>>,
    pub impact: PanelChange<Vec<String>>,
    pub simulation: PanelChange<Vec<SimulationStep>>,
    /// Chart gets a fresh jitter pass
    pub refresh_chart: bool,
}

impl RenderPlan {
    /// Error card only, every other panel untouched
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            card: ResultCard::Error {
                message: message.into(),
            },
            indicators: PanelChange::Untouched,
            impact: PanelChange::Untouched,
            simulation: PanelChange::Untouched,
            refresh_chart: false,
        }
    }
}
