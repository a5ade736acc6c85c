use reqwest::StatusCode;
use shared::error::{FailureKind, ServiceErrorBody};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactServiceError {
    #[error("{operation}: failed to reach contact service: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{operation}: contact service returned {status}{}", detail_suffix(.detail))]
    Status {
        operation: &'static str,
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("{operation}: cannot build request url: {reason}")]
    InvalidUrl {
        operation: &'static str,
        reason: String,
    },
    #[error("{operation}: invalid response payload: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(" ({detail})"))
        .unwrap_or_default()
}

impl ContactServiceError {
    pub fn transport(operation: &'static str, source: reqwest::Error) -> Self {
        Self::Transport { operation, source }
    }

    pub fn invalid_url(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            operation,
            reason: reason.into(),
        }
    }

    pub fn decode(operation: &'static str, source: reqwest::Error) -> Self {
        Self::Decode { operation, source }
    }

    /// Builds a status error, pulling the service's `detail` out of the body when it parses.
    pub(crate) async fn from_response(operation: &'static str, response: reqwest::Response) -> Self {
        let status = response.status();
        let detail = response
            .json::<ServiceErrorBody>()
            .await
            .ok()
            .and_then(|body| body.summary());
        Self::Status {
            operation,
            status,
            detail,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport { .. } => FailureKind::Transport,
            Self::Status { .. } => FailureKind::Status,
            Self::Decode { .. } => FailureKind::Decode,
            Self::InvalidUrl { .. } => FailureKind::Validation,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
