use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Gateway responded with status {status}: {body}")]
    Gateway {
        status: u16,
        body: String,
        api: Option<ApiError>,
    },
    #[error("Failed to decode gateway response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn gateway(status: u16, body: String) -> Error {
        let api = serde_json::from_str::<ApiError>(&body).ok();
        Error::Gateway { status, body, api }
    }

    /// HTTP status returned by the gateway, if the call got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Gateway { status, .. } => Some(*status),
            Error::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(err) if err.is_timeout())
    }
}

/// Error object the gateway sends with 4xx/5xx responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub error_type: String,
    pub id: Option<String>,
    pub code: String,
    pub description: Option<String>,
    pub parameter: Option<String>,
}
