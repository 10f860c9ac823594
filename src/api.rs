// API client module: a small blocking HTTP client for the document
// analysis backend. Each call is one request with its own timeout; there
// are no retries.

use crate::error::ClientError;
use crate::model::AnalysisResult;
use anyhow::Context;
use reqwest::blocking::{multipart, Client, Response};
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5010";

/// Per-endpoint request timeouts.
#[derive(Debug, Clone, Copy)]
pub struct Timeouts {
    pub health: Duration,
    /// Server-side analysis of several documents is slow.
    pub analyze: Duration,
    pub export: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Timeouts {
            health: Duration::from_secs(5),
            analyze: Duration::from_secs(120),
            export: Duration::from_secs(60),
        }
    }
}

/// Blocking client holding the reqwest client, the backend base URL and
/// the timeouts applied to each call.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeouts: Timeouts,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeouts: Timeouts::default(),
        })
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /health`. Only a 200 counts as available.
    pub fn health(&self) -> Result<(), ClientError> {
        let url = self.url("/health");
        let timeout = self.timeouts.health;
        tracing::debug!("GET {}", url);
        let res = self
            .client
            .get(&url)
            .timeout(timeout)
            .send()
            .map_err(|e| ClientError::transport(&url, timeout, e))?;
        expect_ok(&url, res)?;
        Ok(())
    }

    /// Upload every document in one multipart request along with the
    /// industry label and return the parsed analysis.
    ///
    /// Fails with `NoValidFiles` before touching the network when `files`
    /// is empty. File handles live inside the form and are closed when the
    /// request is dropped, whatever the outcome.
    pub fn analyze_documents(
        &self,
        files: &[PathBuf],
        industry: &str,
    ) -> Result<AnalysisResult, ClientError> {
        if files.is_empty() {
            return Err(ClientError::NoValidFiles);
        }

        let mut form = multipart::Form::new();
        for path in files {
            let file = File::open(path).map_err(|source| ClientError::OpenFile {
                path: path.clone(),
                source,
            })?;
            let file_name = path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "document".into());
            let part = multipart::Part::reader(file)
                .file_name(file_name)
                .mime_str("application/octet-stream")
                .map_err(ClientError::Build)?;
            form = form.part("files", part);
        }
        form = form.text("industry", industry.to_string());

        let url = self.url("/ai/analyze-multiple-documents");
        let timeout = self.timeouts.analyze;
        tracing::debug!("POST {} ({} files, industry={})", url, files.len(), industry);
        let res = self
            .client
            .post(&url)
            .multipart(form)
            .timeout(timeout)
            .send()
            .map_err(|e| ClientError::transport(&url, timeout, e))?;
        let res = expect_ok(&url, res)?;
        res.json::<AnalysisResult>().map_err(|e| {
            if e.is_timeout() {
                ClientError::transport(&url, timeout, e)
            } else {
                ClientError::Decode { url, source: e }
            }
        })
    }

    /// `POST /ai/export-powerpoint` with `{ "curriculum": ... }` and return
    /// the presentation bytes.
    pub fn export_presentation(&self, curriculum: &Value) -> Result<Vec<u8>, ClientError> {
        let url = self.url("/ai/export-powerpoint");
        let timeout = self.timeouts.export;
        tracing::debug!("POST {}", url);
        let res = self
            .client
            .post(&url)
            .json(&json!({ "curriculum": curriculum }))
            .timeout(timeout)
            .send()
            .map_err(|e| ClientError::transport(&url, timeout, e))?;
        let res = expect_ok(&url, res)?;
        let bytes = res
            .bytes()
            .map_err(|e| ClientError::transport(&url, timeout, e))?;
        tracing::debug!("received {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

/// Turn anything but a 200 into `ClientError::Status` carrying the body.
fn expect_ok(url: &str, res: Response) -> Result<Response, ClientError> {
    let status = res.status();
    tracing::debug!("{} -> {}", url, status);
    if status == StatusCode::OK {
        return Ok(res);
    }
    let body = res.text().unwrap_or_else(|_| "".into());
    Err(ClientError::Status {
        url: url.to_string(),
        status,
        body,
    })
}
