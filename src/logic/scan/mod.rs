//! Scan Module
//!
//! Contract với remote scanner: kết quả phân loại và transport gửi file/URL.
//!
//! ## Structure
//! - `types`: ScanResult, Indicator, SimulationStep
//! - `client`: ScanTransport trait + HTTP implementation

pub mod types;
pub mod client;

pub use types::{
    ScanResult,
    Indicator,
    IndicatorValue,
    SimulationStep,
    DEFAULT_FAMILY,
    DEFAULT_DESCRIPTION,
};

pub use client::{FileUpload, HttpScanClient, ScanTransport};
