//! Scan Types
//!
//! Contract types cho kết quả từ remote scanner.
//! KHÔNG chứa logic render - chỉ data structures.

use serde::{Deserialize, Deserializer, Serialize};

/// Family shown when the scanner did not name one
pub const DEFAULT_FAMILY: &str = "unknown";

/// Description shown when the scanner did not provide one
pub const DEFAULT_DESCRIPTION: &str = "No malware detected";

// ============================================================================
// SCAN RESULT
// ============================================================================

/// Classification payload returned by the scanner for one artifact
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Server-reported failure; everything else is meaningless when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default)]
    pub is_malware: bool,

    /// Model confidence (0.0 - 1.0)
    #[serde(default)]
    pub confidence: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_description: Option<String>,

    /// HIGH / MEDIUM / LOW
    #[serde(default)]
    pub threat_level: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub indicators: Vec<Indicator>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub impact: Vec<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub simulation_steps: Vec<SimulationStep>,
}

impl ScanResult {
    /// Server-side error result
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Family name, `"unknown"` when absent or empty
    pub fn family_or_default(&self) -> &str {
        non_empty(self.family.as_deref()).unwrap_or(DEFAULT_FAMILY)
    }

    /// Family description, placeholder when absent or empty
    pub fn description_or_default(&self) -> &str {
        non_empty(self.family_description.as_deref()).unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Playback is only offered for malware with a scripted narrative
    pub fn has_simulation(&self) -> bool {
        self.is_malware && !self.simulation_steps.is_empty()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Absent and `null` lists both mean "empty"
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// INDICATOR
// ============================================================================

/// Named signal contributing to the verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub name: String,
    pub value: IndicatorValue,
    /// Styling tag (suspicious, normal, ...)
    pub verdict: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Indicator {
    /// Description, falling back to the verdict tag
    pub fn detail(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(&self.verdict)
    }
}

/// Indicator value: numbers get fixed precision, anything else is shown as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndicatorValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl IndicatorValue {
    pub fn display(&self) -> String {
        match self {
            IndicatorValue::Number(n) => format!("{:.2}", n),
            IndicatorValue::Text(s) => s.clone(),
            IndicatorValue::Other(v) => v.to_string(),
        }
    }
}

impl std::fmt::Display for IndicatorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

// ============================================================================
// SIMULATION STEP
// ============================================================================

/// One scripted behavior step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStep {
    /// Display label in seconds. Not used for scheduling.
    pub time: f64,
    pub desc: String,
}

impl SimulationStep {
    pub fn new(time: f64, desc: impl Into<String>) -> Self {
        Self {
            time,
            desc: desc.into(),
        }
    }

    /// Elapsed label, e.g. `"3s"`
    pub fn elapsed_label(&self) -> String {
        format!("{}s", self.time)
    }
}

// ============================================================================
// TESTS
// ============================================================================
