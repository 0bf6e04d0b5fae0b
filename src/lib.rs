//! CortexShield View Core
//!
//! Render malware-scan verdicts and replay the detected family's behavior on a
//! simulated desktop.
//!
//! ```text
//!  ScanTransport ──▶ Dashboard ──▶ ResultRenderer ──▶ Presenter
//!                        │
//!                        ├──▶ ChartSmoother ──▶ ChartBackend
//!                        └──▶ SimulationEngine ──▶ DesktopSurface
//! ```
//!
//! The three `*Backend`/`Presenter`/`Surface` traits are implemented by the
//! thin presentation adapter; everything else lives here.

pub mod api;
pub mod constants;
pub mod error;
pub mod logic;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{Dashboard, Presenter, ScanOrigin, ScanReceipt};
pub use error::{TransportError, ViewError, ViewResult};
pub use logic::chart::{ChartBackend, ChartSmoother};
pub use logic::config::ViewConfig;
pub use logic::render::{RenderPlan, ResultRenderer};
pub use logic::scan::{FileUpload, HttpScanClient, ScanResult, ScanTransport};
pub use logic::simulation::{DesktopSurface, PlaybackPhase, SimulationEngine};

/// Install `env_logger` (default filter `info`, override with `RUST_LOG`).
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    log::info!("{} v{} logging ready", constants::APP_NAME, constants::APP_VERSION);
}
