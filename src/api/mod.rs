//! API Module
//!
//! Explicit component interface cho thin adapter.
//!
//! Structure:
//! - presenter.rs: Presenter trait (result card, panels, alerts)
//! - dashboard.rs: Dashboard (scan -> render -> chart -> simulation)
//!
//! Usage:
//! ```ignore
//! let mut dashboard = Dashboard::new(presenter, chart_backend, desktop, &config);
//! dashboard.initialize();
//! dashboard.show_loading();
//! dashboard.scan_file(&client, upload).await?;
//! dashboard.play_simulation()?;
//! ```

pub mod presenter;
pub mod dashboard;


pub use presenter::Presenter;
pub use dashboard::{Dashboard, ScanOrigin, ScanReceipt};
