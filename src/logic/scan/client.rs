//! Scanner API Client
//!
//! HTTP client for submitting files and URLs to the CortexShield scanner.

use std::future::Future;

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use super::types::ScanResult;
use crate::error::TransportError;
use crate::logic::config::ViewConfig;

/// Binary payload for scan-by-file
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Anything that can turn a file or URL into a ScanResult.
///
/// A server-reported failure is still `Ok` (with `error` set); `Err` is
/// reserved for requests that did not produce a result at all.
pub trait ScanTransport {
    fn scan_file(
        &self,
        upload: FileUpload,
    ) -> impl Future<Output = Result<ScanResult, TransportError>> + Send;

    fn scan_url(&self, url: &str) -> impl Future<Output = Result<ScanResult, TransportError>> + Send;
}

#[derive(Debug, Serialize)]
struct ScanUrlRequest<'a> {
    url: &'a str,
}

/// Scanner API client
pub struct HttpScanClient {
    config: ViewConfig,
    http_client: reqwest::Client,
}

impl HttpScanClient {
    /// Create new scanner client
    pub fn new(config: ViewConfig) -> Result<Self, TransportError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    async fn read_result(response: reqwest::Response) -> Result<ScanResult, TransportError> {
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ScanResult>(&body) {
            Ok(result) => {
                if !status.is_success() {
                    log::warn!("Scanner answered {} with a result body", status.as_u16());
                }
                Ok(result)
            }
            Err(e) if status.is_success() => {
                log::error!("Scanner returned an unreadable result: {}", e);
                Err(e.into())
            }
            Err(_) => {
                log::error!("Scan request failed ({}): {}", status.as_u16(), body);
                Err(TransportError::Status(status.as_u16()))
            }
        }
    }
}

impl ScanTransport for HttpScanClient {
    async fn scan_file(&self, upload: FileUpload) -> Result<ScanResult, TransportError> {
        let url = self.config.endpoint("/scan/file");

        log::info!("Submitting {} ({} bytes) for scan", upload.file_name, upload.bytes.len());

        let part = Part::bytes(upload.bytes).file_name(upload.file_name);
        let form = Form::new().part("file", part);

        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Self::read_result(response).await
    }

    async fn scan_url(&self, target: &str) -> Result<ScanResult, TransportError> {
        let url = self.config.endpoint("/scan/url");

        log::info!("Submitting URL for scan: {}", target);

        let response = self
            .http_client
            .post(&url)
            .json(&ScanUrlRequest { url: target })
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Self::read_result(response).await
    }
}

// ============================================================================
// TESTS
// ============================================================================
