//! Logic Module - Rendering & Playback Engines
//!
//! Chứa các engines: ResultRenderer, ChartSmoother, SimulationEngine.
//!
//! ## Structure
//! - `config` - ViewConfig (env + defaults)
//! - `scan/` - ScanResult contract + transport
//! - `render/` - ScanResult -> RenderPlan / HTML
//! - `chart/` - Feature-importance chart lifecycle
//! - `simulation/` - Timer-driven behavior playback

pub mod config;
pub mod scan;
pub mod render;
pub mod chart;
pub mod simulation;
