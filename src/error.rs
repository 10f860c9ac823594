// Error types shared by the API client and the argument classifier.
// The CLI layer wraps these in `anyhow` and turns every one of them into
// exit status 1.

use reqwest::StatusCode;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failures of a single step talking to the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Host unreachable, DNS failure, connection refused or any other
    /// transport error that is not a timeout.
    #[error("cannot reach {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out after {}s", .timeout.as_secs())]
    Timeout { url: String, timeout: Duration },

    /// The server answered with something other than 200.
    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot build request: {0}")]
    Build(#[source] reqwest::Error),

    #[error("no valid file to upload")]
    NoValidFiles,

    #[error("cannot open {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("analysis response has no curriculum")]
    MissingCurriculum,
}

impl ClientError {
    /// Map a reqwest transport error to `Timeout` or `Unreachable`.
    pub(crate) fn transport(url: &str, timeout: Duration, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout {
                url: url.to_string(),
                timeout,
            }
        } else {
            ClientError::Unreachable {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

/// Problems with the command line itself, detected before any request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("no arguments given")]
    NoArguments,
    #[error("no document given (accepted extensions: .pdf, .docx, .txt, .doc)")]
    NoDocuments,
}
