//! Dashboard - entry point cho adapter
//!
//! Owns one renderer, one chart smoother and one simulation engine, and wires
//! scan completion -> verdict -> chart -> simulation panel.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::presenter::Presenter;
use crate::error::{ViewError, ViewResult};
use crate::logic::chart::{ChartBackend, ChartSmoother, Easing, Transition};
use crate::logic::config::ViewConfig;
use crate::logic::render::{LoadingCard, PanelChange, RenderPlan, ResultRenderer};
use crate::logic::scan::{FileUpload, ScanResult, ScanTransport};
use crate::logic::simulation::{DesktopSurface, PlaybackSnapshot, PlaybackTiming, SimulationEngine};

// ============================================================================
// SCAN RECEIPT
// ============================================================================

/// Where a scanned artifact came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanOrigin {
    File { name: String },
    Url { url: String },
    /// Result handed in directly by the adapter
    Direct,
}

/// Record of the latest completed scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReceipt {
    pub id: Uuid,
    pub origin: ScanOrigin,
    pub received_at: DateTime<Utc>,
    pub is_malware: bool,
    pub server_error: Option<String>,
}

impl ScanReceipt {
    fn new(origin: ScanOrigin, result: &ScanResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            received_at: Utc::now(),
            is_malware: result.is_malware,
            server_error: result.error.clone(),
        }
    }
}

// ============================================================================
// DASHBOARD
// ============================================================================

pub struct Dashboard {
    presenter: Arc<dyn Presenter>,
    renderer: ResultRenderer,
    chart: ChartSmoother,
    simulation: SimulationEngine,
    last_scan: Option<ScanReceipt>,
}

impl Dashboard {
    pub fn new(
        presenter: Arc<dyn Presenter>,
        chart_backend: Box<dyn ChartBackend>,
        desktop: Arc<dyn DesktopSurface>,
        config: &ViewConfig,
    ) -> Self {
        let transition = Transition {
            duration: config.chart_transition,
            easing: Easing::EaseInOutQuart,
        };

        Self::with_chart(
            presenter,
            ChartSmoother::new(chart_backend, transition),
            desktop,
            config,
        )
    }

    /// Same as `new` with a caller-built smoother (e.g. seeded)
    pub fn with_chart(
        presenter: Arc<dyn Presenter>,
        chart: ChartSmoother,
        desktop: Arc<dyn DesktopSurface>,
        config: &ViewConfig,
    ) -> Self {
        Self {
            presenter,
            renderer: ResultRenderer::new(config.max_indicators),
            chart,
            simulation: SimulationEngine::new(desktop, PlaybackTiming::from(config)),
            last_scan: None,
        }
    }

    /// Create the feature chart at its baseline
    pub fn initialize(&mut self) {
        self.chart.initialize();
        log::info!("Dashboard initialized");
    }

    pub fn chart(&self) -> &ChartSmoother {
        &self.chart
    }

    pub fn simulation(&self) -> &SimulationEngine {
        &self.simulation
    }

    pub fn playback(&self) -> PlaybackSnapshot {
        self.simulation.snapshot()
    }

    pub fn last_scan(&self) -> Option<&ScanReceipt> {
        self.last_scan.as_ref()
    }

    /// Placeholder card while a request is in flight; hides the simulation panel
    pub fn show_loading(&self) {
        self.presenter.show_loading(&LoadingCard::default());
        self.presenter.set_simulation_visible(false);
    }

    /// Render one result and apply it to the screen
    pub fn display(&mut self, result: &ScanResult, origin: ScanOrigin) -> RenderPlan {
        let plan = self.renderer.render(result);
        self.apply(&plan);

        let receipt = ScanReceipt::new(origin, result);
        match &receipt.server_error {
            Some(message) => log::warn!("Scan {} failed on server: {}", receipt.id, message),
            None => log::info!(
                "Scan {} received: malware={} family={}",
                receipt.id,
                receipt.is_malware,
                result.family_or_default()
            ),
        }
        self.last_scan = Some(receipt);

        plan
    }

    /// A hidden simulation panel does not stop a playback that is already
    /// running; only a new malicious result or the reset button does.
    fn apply(&mut self, plan: &RenderPlan) {
        self.presenter.show_card(&plan.card);

        match &plan.indicators {
            PanelChange::Untouched => {}
            PanelChange::Hidden => self.presenter.clear_indicators(),
            PanelChange::Shown(cards) => self.presenter.show_indicators(cards),
        }

        match &plan.impact {
            PanelChange::Untouched => {}
            PanelChange::Hidden => self.presenter.hide_impact(),
            PanelChange::Shown(items) => self.presenter.show_impact(items),
        }

        if plan.refresh_chart {
            self.chart.update();
        }

        match &plan.simulation {
            PanelChange::Untouched => {}
            PanelChange::Hidden => self.presenter.set_simulation_visible(false),
            PanelChange::Shown(steps) => {
                self.presenter.set_simulation_visible(true);
                self.simulation.load(steps.clone());
                self.simulation.reset();
            }
        }
    }

    // ========================================================================
    // SCAN FLOWS
    // ========================================================================

    /// Upload a file and display the verdict.
    ///
    /// A transport failure raises a blocking `"Error: ..."` notification and
    /// leaves every panel as it was.
    pub async fn scan_file<T: ScanTransport>(
        &mut self,
        transport: &T,
        upload: FileUpload,
    ) -> ViewResult<RenderPlan> {
        let origin = ScanOrigin::File {
            name: upload.file_name.clone(),
        };

        match transport.scan_file(upload).await {
            Ok(result) => Ok(self.display(&result, origin)),
            Err(e) => Err(self.transport_failed(e.into())),
        }
    }

    /// Scan a URL. Surrounding whitespace is trimmed; an empty URL is
    /// ignored and returns `Ok(None)`.
    pub async fn scan_url<T: ScanTransport>(
        &mut self,
        transport: &T,
        url: &str,
    ) -> ViewResult<Option<RenderPlan>> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(None);
        }

        let origin = ScanOrigin::Url {
            url: url.to_string(),
        };

        match transport.scan_url(url).await {
            Ok(result) => Ok(Some(self.display(&result, origin))),
            Err(e) => Err(self.transport_failed(e.into())),
        }
    }

    fn transport_failed(&self, err: ViewError) -> ViewError {
        log::error!("Scan request failed: {}", err);
        self.presenter.notify_error(&format!("Error: {}", err));
        err
    }

    // ========================================================================
    // SIMULATION CONTROLS
    // ========================================================================

    /// "Play" button: replay the steps of the latest malicious result
    pub fn play_simulation(&mut self) -> ViewResult<()> {
        self.simulation.play_loaded()
    }

    /// "Reset" button
    pub fn reset_simulation(&mut self) {
        self.simulation.reset();
    }
}
