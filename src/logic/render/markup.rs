//! HTML fragments for web presenters
//!
//! Class names follow the dashboard stylesheet (`result-card`,
//! `confidence-fill`, `indicator <verdict>`). Every interpolated value is
//! escaped.

use std::fmt::Write;

use super::types::{IndicatorCard, LoadingCard, PanelChange, RenderPlan, ResultCard};

/// Markup for every panel a plan touches. `Untouched` leaves the panel
/// alone, `Hidden` hides or clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlFragments {
    pub result_card: String,
    pub indicators: PanelChange<String>,
    pub impact_list: PanelChange<String>,
    /// Visibility of the simulation section
    pub simulation: PanelChange<()>,
}

pub fn render_fragments(plan: &RenderPlan) -> HtmlFragments {
    HtmlFragments {
        result_card: result_card(&plan.card),
        indicators: map_panel(&plan.indicators, |cards| indicator_list(cards)),
        impact_list: map_panel(&plan.impact, |items| impact_list(items)),
        simulation: map_panel(&plan.simulation, |_| ()),
    }
}

fn map_panel<T, U>(change: &PanelChange<T>, f: impl FnOnce(&T) -> U) -> PanelChange<U> {
    match change {
        PanelChange::Untouched => PanelChange::Untouched,
        PanelChange::Hidden => PanelChange::Hidden,
        PanelChange::Shown(items) => PanelChange::Shown(f(items)),
    }
}

pub fn result_card(card: &ResultCard) -> String {
    match card {
        ResultCard::Error { message } => format!(
            r#"<div class="result-card result-malware">Error: {}</div>"#,
            html_escape(message)
        ),
        ResultCard::Verdict(v) => {
            let mut out = String::new();
            let _ = write!(
                out,
                r#"<div class="result-card {}"><div class="result-header"><span class="result-icon">{}</span><span class="result-title">{}</span></div>"#,
                v.tone.css_class(),
                html_escape(&v.icon),
                html_escape(&v.title),
            );
            for (label, value) in [
                ("Family", &v.family),
                ("Description", &v.description),
                ("Threat Level", &v.threat_level),
                ("Confidence", &v.confidence_text),
            ] {
                let _ = write!(
                    out,
                    r#"<div class="result-detail"><strong>{}:</strong> {}</div>"#,
                    label,
                    html_escape(value)
                );
            }
            let _ = write!(out, "{}</div>", confidence_bar(v.confidence_fill));
            out
        }
    }
}

pub fn loading_card(card: &LoadingCard) -> String {
    format!(
        r#"<div class="result-card"><div class="result-header"><span class="result-icon">{}</span><span class="result-title">{}</span></div>{}<p class="result-caption">{}</p></div>"#,
        html_escape(&card.icon),
        html_escape(&card.title),
        confidence_bar(card.fill),
        html_escape(&card.caption),
    )
}

pub fn indicator_list(cards: &[IndicatorCard]) -> String {
    let mut out = String::from("<h3>🔍 Key Indicators</h3>");
    for card in cards {
        let _ = write!(
            out,
            r#"<div class="indicator {}"><strong>{}:</strong> {}<br><small>{}</small></div>"#,
            css_token(&card.verdict),
            html_escape(&card.name),
            html_escape(&card.value),
            html_escape(&card.detail),
        );
    }
    out
}

pub fn impact_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", html_escape(item)))
        .collect()
}

fn confidence_bar(fill: f64) -> String {
    format!(
        r#"<div class="confidence-bar"><div class="confidence-fill" style="width: {}%;"></div></div>"#,
        fill
    )
}

fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Verdict tags become class names; keep them to a safe charset
fn css_token(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect()
}
