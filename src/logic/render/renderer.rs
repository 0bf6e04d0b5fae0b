//! Result Renderer
//!
//! CHỈ chứa logic map ScanResult -> RenderPlan. Không đụng tới UI.
//! Input: ScanResult
//! Output: RenderPlan

use super::types::{
    CardTone, IndicatorCard, PanelChange, RenderPlan, ResultCard, VerdictCard,
};
use crate::constants::MAX_INDICATORS;
use crate::logic::scan::{Indicator, ScanResult};

const MALWARE_ICON: &str = "⚠️";
const SAFE_ICON: &str = "✅";
const MALWARE_TITLE: &str = "MALWARE DETECTED!";
const SAFE_TITLE: &str = "File is Safe";

#[derive(Debug, Clone)]
pub struct ResultRenderer {
    max_indicators: usize,
}

impl Default for ResultRenderer {
    fn default() -> Self {
        Self::new(MAX_INDICATORS)
    }
}

impl ResultRenderer {
    pub fn new(max_indicators: usize) -> Self {
        Self { max_indicators }
    }

    pub fn max_indicators(&self) -> usize {
        self.max_indicators
    }

    /// Map one scan result to its panel changes
    pub fn render(&self, result: &ScanResult) -> RenderPlan {
        if let Some(message) = &result.error {
            return RenderPlan::error(message.clone());
        }

        let card = ResultCard::Verdict(verdict_card(result));

        let indicators = if result.indicators.is_empty() {
            PanelChange::Hidden
        } else {
            PanelChange::Shown(
                result
                    .indicators
                    .iter()
                    .take(self.max_indicators)
                    .map(indicator_card)
                    .collect(),
            )
        };

        let impact = if result.is_malware && !result.impact.is_empty() {
            PanelChange::Shown(result.impact.clone())
        } else {
            PanelChange::Hidden
        };

        let simulation = if result.has_simulation() {
            PanelChange::Shown(result.simulation_steps.clone())
        } else {
            PanelChange::Hidden
        };

        RenderPlan {
            card,
            indicators,
            impact,
            simulation,
            refresh_chart: true,
        }
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn verdict_card(result: &ScanResult) -> VerdictCard {
    let percent = result.confidence * 100.0;
    let (tone, icon, title) = if result.is_malware {
        (CardTone::Malware, MALWARE_ICON, MALWARE_TITLE)
    } else {
        (CardTone::Safe, SAFE_ICON, SAFE_TITLE)
    };

    VerdictCard {
        tone,
        icon: icon.to_string(),
        title: title.to_string(),
        family: result.family_or_default().to_string(),
        description: result.description_or_default().to_string(),
        threat_level: result.threat_level.clone(),
        confidence_text: format_confidence(result.confidence),
        confidence_fill: percent.clamp(0.0, 100.0),
    }
}

fn indicator_card(indicator: &Indicator) -> IndicatorCard {
    IndicatorCard {
        name: indicator.name.clone(),
        value: indicator.value.display(),
        detail: indicator.detail().to_string(),
        verdict: indicator.verdict.clone(),
    }
}

/// `0.8734` -> `"87.3%"`. Ties round up (`0.0025` -> `"0.3%"`).
pub fn format_confidence(confidence: f64) -> String {
    let tenths = (confidence * 1000.0).round() / 10.0;
    format!("{:.1}%", tenths)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::scan::{IndicatorValue, SimulationStep};

    fn indicator(name: &str, value: IndicatorValue) -> Indicator {
        Indicator {
            name: name.to_string(),
            value,
            verdict: "suspicious".to_string(),
            description: Some(format!("{} description", name)),
        }
    }

    fn ransomware() -> ScanResult {
        ScanResult {
            is_malware: true,
            confidence: 0.9134,
            family: Some("ransomware".to_string()),
            family_description: Some("Encrypts files and demands ransom payment.".to_string()),
            threat_level: "HIGH".to_string(),
            indicators: vec![
                indicator("High Entropy", IndicatorValue::Number(7.4567)),
                indicator("Many Imports", IndicatorValue::Number(150.0)),
                indicator("No Debug Info", IndicatorValue::Text("missing".into())),
                indicator("Many Sections", IndicatorValue::Number(9.0)),
            ],
            impact: vec!["Deletes shadow copies to prevent recovery".to_string()],
            simulation_steps: vec![SimulationStep::new(0.0, "Dropping ransomware payload...")],
            ..Default::default()
        }
    }

    #[test]
    fn test_malware_verdict_card() {
        let plan = ResultRenderer::default().render(&ransomware());

        let ResultCard::Verdict(card) = &plan.card else {
            panic!("expected verdict card");
        };
        assert_eq!(card.tone, CardTone::Malware);
        assert_eq!(card.icon, "⚠️");
        assert_eq!(card.title, "MALWARE DETECTED!");
        assert_eq!(card.family, "ransomware");
        assert_eq!(card.threat_level, "HIGH");
        assert_eq!(card.confidence_text, "91.3%");
        assert!((card.confidence_fill - 91.34).abs() < 1e-9);
        assert!(plan.refresh_chart);
    }

    #[test]
    fn test_safe_result_defaults() {
        let result = ScanResult {
            is_malware: false,
            confidence: 0.75,
            threat_level: "MEDIUM".to_string(),
            ..Default::default()
        };
        let plan = ResultRenderer::default().render(&result);

        let ResultCard::Verdict(card) = &plan.card else {
            panic!("expected verdict card");
        };
        assert_eq!(card.tone, CardTone::Safe);
        assert_eq!(card.title, "File is Safe");
        assert_eq!(card.family, "unknown");
        assert_eq!(card.description, "No malware detected");
        assert_eq!(plan.indicators, PanelChange::Hidden);
        assert_eq!(plan.impact, PanelChange::Hidden);
        assert_eq!(plan.simulation, PanelChange::Hidden);
    }

    #[test]
    fn test_confidence_text_one_decimal() {
        for (confidence, expected) in [
            (0.0, "0.0%"),
            (1.0, "100.0%"),
            (0.5, "50.0%"),
            (0.873, "87.3%"),
            (0.70001, "70.0%"),
            (0.98, "98.0%"),
        ] {
            assert_eq!(format_confidence(confidence), expected);
        }
    }

    #[test]
    fn test_confidence_ties_round_up() {
        for (confidence, expected) in [
            (0.0025, "0.3%"),
            (0.0125, "1.3%"),
            (0.0225, "2.3%"),
            (0.0325, "3.3%"),
        ] {
            assert_eq!(format_confidence(confidence), expected);
        }
    }

    #[test]
    fn test_confidence_text_matches_rounded_percentage() {
        for i in 0..=1000 {
            let c = i as f64 / 1000.0;
            let rendered: f64 = format_confidence(c).trim_end_matches('%').parse().unwrap();
            assert!((rendered - c * 100.0).abs() <= 0.05 + 1e-9, "c = {}", c);
        }
    }

    #[test]
    fn test_indicators_truncated_to_three_in_order() {
        let plan = ResultRenderer::default().render(&ransomware());
        let cards = plan.indicators.shown().unwrap();

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].name, "High Entropy");
        assert_eq!(cards[0].value, "7.46");
        assert_eq!(cards[1].value, "150.00");
        assert_eq!(cards[2].value, "missing");
        assert_eq!(cards[2].detail, "No Debug Info description");
    }

    #[test]
    fn test_indicator_count_is_min_of_three() {
        let renderer = ResultRenderer::default();
        for n in 0..6 {
            let result = ScanResult {
                indicators: (0..n)
                    .map(|i| indicator(&format!("ind-{}", i), IndicatorValue::Number(i as f64)))
                    .collect(),
                ..Default::default()
            };
            let plan = renderer.render(&result);
            let shown = plan.indicators.shown().map(|c| c.len()).unwrap_or(0);
            assert_eq!(shown, n.min(3));
            if let Some(cards) = plan.indicators.shown() {
                for (i, card) in cards.iter().enumerate() {
                    assert_eq!(card.name, format!("ind-{}", i));
                }
            }
        }
    }

    #[test]
    fn test_impact_only_for_malware() {
        let mut result = ransomware();
        result.is_malware = false;
        let plan = ResultRenderer::default().render(&result);
        assert_eq!(plan.impact, PanelChange::Hidden);
        assert_eq!(plan.simulation, PanelChange::Hidden);

        let plan = ResultRenderer::default().render(&ransomware());
        assert_eq!(plan.impact.shown().map(Vec::len), Some(1));
        assert_eq!(plan.simulation.shown().map(Vec::len), Some(1));
    }

    #[test]
    fn test_malware_without_steps_hides_simulation() {
        let mut result = ransomware();
        result.simulation_steps.clear();
        let plan = ResultRenderer::default().render(&result);
        assert_eq!(plan.simulation, PanelChange::Hidden);
    }

    #[test]
    fn test_error_leaves_panels_untouched() {
        let plan = ResultRenderer::default().render(&ScanResult::from_error("bad file"));

        assert_eq!(
            plan.card,
            ResultCard::Error {
                message: "bad file".to_string()
            }
        );
        assert!(plan.indicators.is_untouched());
        assert!(plan.impact.is_untouched());
        assert!(plan.simulation.is_untouched());
        assert!(!plan.refresh_chart);
    }

    #[test]
    fn test_confidence_fill_clamped() {
        let result = ScanResult {
            confidence: 1.2,
            ..Default::default()
        };
        let plan = ResultRenderer::default().render(&result);
        let ResultCard::Verdict(card) = plan.card else {
            panic!("expected verdict card");
        };
        assert_eq!(card.confidence_fill, 100.0);
    }
}
