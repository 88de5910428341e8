//! Client side of the transform round trip.
//!
//! `state` is the form record and its transitions, `controller` drives submit
//! and copy against the seams below, `http` talks to `/api/transform`, and
//! `terminal` backs the seams for the command-line client.

pub mod controller;
pub mod http;
pub mod state;
pub mod terminal;

use async_trait::async_trait;
use thiserror::Error;

use crate::transform::generator::Variation;
use crate::transform::models::TransformRequest;

/// Alert text when the server gave no message of its own.
pub const FALLBACK_ALERT: &str = "Failed to generate variations";
/// Alert text for transport and decoding failures.
pub const UNEXPECTED_ALERT: &str = "An unexpected error occurred.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("server rejected the request (status {status})")]
    Server { status: u16, message: Option<String> },

    #[error("expected 5 variations, got {0}")]
    WrongCount(usize),

    #[error("no variation at index {0}")]
    NoSuchVariation(usize),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

impl ClientError {
    /// The message shown to the user for a failed submit.
    pub fn alert_message(&self) -> String {
        match self {
            ClientError::Server {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            ClientError::Server { .. } | ClientError::WrongCount(_) => FALLBACK_ALERT.to_string(),
            _ => UNEXPECTED_ALERT.to_string(),
        }
    }
}

/// Sends one transform request. Implementations must not retry.
#[async_trait]
pub trait TransformApi: Send + Sync {
    async fn transform(&self, request: &TransformRequest) -> Result<Vec<Variation>, ClientError>;
}

/// Destination for copied variation text.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClientError>;
}

/// Blocking, user-facing error surface.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}
