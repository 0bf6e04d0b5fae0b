//! Recording doubles for the adapter seams (test builds only)

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::api::presenter::Presenter;
use crate::error::TransportError;
use crate::logic::chart::{ChartBackend, ChartHandle, ChartSpec, ImportanceVector, Transition};
use crate::logic::render::{IndicatorCard, LoadingCard, ResultCard};
use crate::logic::scan::{FileUpload, ScanResult, ScanTransport};
use crate::logic::simulation::{DesktopSurface, FULL_OPACITY, NEUTRAL_BACKGROUND};

// ============================================================================
// DESKTOP
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopView {
    pub icons_encrypted: bool,
    pub popup_visible: bool,
    pub background: String,
    pub opacity: f32,
    pub description: String,
    pub elapsed: String,
    pub opacity_writes: Vec<f32>,
}

impl Default for DesktopView {
    fn default() -> Self {
        Self {
            icons_encrypted: false,
            popup_visible: false,
            background: NEUTRAL_BACKGROUND.to_string(),
            opacity: FULL_OPACITY,
            description: String::new(),
            elapsed: "0s".to_string(),
            opacity_writes: Vec::new(),
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingSurface {
    view: Arc<Mutex<DesktopView>>,
}

impl RecordingSurface {
    pub fn view(&self) -> DesktopView {
        self.view.lock().clone()
    }

    pub fn clear_opacity_writes(&self) {
        self.view.lock().opacity_writes.clear();
    }
}

impl DesktopSurface for RecordingSurface {
    fn set_icons_encrypted(&self, encrypted: bool) {
        self.view.lock().icons_encrypted = encrypted;
    }

    fn set_ransom_popup_visible(&self, visible: bool) {
        self.view.lock().popup_visible = visible;
    }

    fn set_desktop_background(&self, color: &str) {
        self.view.lock().background = color.to_string();
    }

    fn set_desktop_opacity(&self, opacity: f32) {
        let mut view = self.view.lock();
        view.opacity = opacity;
        view.opacity_writes.push(opacity);
    }

    fn set_step_description(&self, text: &str) {
        self.view.lock().description = text.to_string();
    }

    fn set_elapsed_label(&self, label: &str) {
        self.view.lock().elapsed = label.to_string();
    }
}

// ============================================================================
// CHART
// ============================================================================

#[derive(Debug, Default)]
struct ChartLog {
    next_id: u64,
    live: Vec<ChartHandle>,
    created: usize,
    destroyed: usize,
    applied: usize,
    last_data: Option<ImportanceVector>,
    last_transition: Option<Transition>,
}

#[derive(Clone, Default)]
pub struct RecordingChart {
    log: Arc<Mutex<ChartLog>>,
}

impl RecordingChart {
    pub fn created(&self) -> usize {
        self.log.lock().created
    }

    pub fn destroyed(&self) -> usize {
        self.log.lock().destroyed
    }

    pub fn applied(&self) -> usize {
        self.log.lock().applied
    }

    pub fn live(&self) -> usize {
        self.log.lock().live.len()
    }

    pub fn last_data(&self) -> Option<ImportanceVector> {
        self.log.lock().last_data
    }

    pub fn last_transition(&self) -> Option<Transition> {
        self.log.lock().last_transition
    }
}

impl ChartBackend for RecordingChart {
    fn create(&mut self, spec: &ChartSpec) -> ChartHandle {
        let mut log = self.log.lock();
        log.next_id += 1;
        let handle = ChartHandle(log.next_id);
        log.live.push(handle);
        log.created += 1;
        log.last_data = Some(spec.data);
        handle
    }

    fn destroy(&mut self, handle: ChartHandle) {
        let mut log = self.log.lock();
        log.live.retain(|h| *h != handle);
        log.destroyed += 1;
    }

    fn apply(&mut self, handle: ChartHandle, data: &ImportanceVector, transition: &Transition) {
        let mut log = self.log.lock();
        assert!(log.live.contains(&handle), "apply on dead chart {:?}", handle);
        log.applied += 1;
        log.last_data = Some(*data);
        log.last_transition = Some(*transition);
    }
}

// ============================================================================
// PRESENTER
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub cards: Vec<ResultCard>,
    pub loading_shown: usize,
    pub indicators: Option<Vec<IndicatorCard>>,
    pub impact: Option<Vec<String>>,
    pub simulation_visible: bool,
    pub alerts: Vec<String>,
}

#[derive(Clone, Default)]
pub struct RecordingPresenter {
    screen: Arc<Mutex<Screen>>,
}

impl RecordingPresenter {
    pub fn screen(&self) -> Screen {
        self.screen.lock().clone()
    }

    /// Put panels into a known state before a test
    pub fn preset(&self, f: impl FnOnce(&mut Screen)) {
        f(&mut self.screen.lock());
    }
}

impl Presenter for RecordingPresenter {
    fn show_card(&self, card: &ResultCard) {
        self.screen.lock().cards.push(card.clone());
    }

    fn show_loading(&self, _card: &LoadingCard) {
        self.screen.lock().loading_shown += 1;
    }

    fn show_indicators(&self, cards: &[IndicatorCard]) {
        self.screen.lock().indicators = Some(cards.to_vec());
    }

    fn clear_indicators(&self) {
        self.screen.lock().indicators = None;
    }

    fn show_impact(&self, items: &[String]) {
        self.screen.lock().impact = Some(items.to_vec());
    }

    fn hide_impact(&self) {
        self.screen.lock().impact = None;
    }

    fn set_simulation_visible(&self, visible: bool) {
        self.screen.lock().simulation_visible = visible;
    }

    fn notify_error(&self, message: &str) {
        self.screen.lock().alerts.push(message.to_string());
    }
}

// ============================================================================
// TRANSPORT
// ============================================================================

/// Answers requests from a queue of canned replies
#[derive(Clone, Default)]
pub struct StubTransport {
    replies: Arc<Mutex<VecDeque<Result<ScanResult, TransportError>>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubTransport {
    pub fn reply(&self, reply: Result<ScanResult, TransportError>) -> &Self {
        self.replies.lock().push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    fn next(&self, request: String) -> Result<ScanResult, TransportError> {
        self.requests.lock().push(request);
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no reply queued".into())))
    }
}

impl ScanTransport for StubTransport {
    async fn scan_file(&self, upload: FileUpload) -> Result<ScanResult, TransportError> {
        self.next(format!("file:{}", upload.file_name))
    }

    async fn scan_url(&self, url: &str) -> Result<ScanResult, TransportError> {
        self.next(format!("url:{}", url))
    }
}
