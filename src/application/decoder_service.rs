// Decoder service seam - async boundary to the remote hex decoder
use crate::domain::telemetry::TelemetryResult;
use async_trait::async_trait;
use thiserror::Error;

/// Banner text for transport-level failures; the underlying cause goes to
/// the diagnostics log only.
pub const TRANSPORT_USER_MESSAGE: &str =
    "An error occurred while processing your request. Please try again.";

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The decoder service answered with a structured failure.
    #[error("{0}")]
    Reported(String),
    /// The service was unreachable or its response did not match the
    /// documented contract.
    #[error("{0}")]
    Transport(String),
}

impl ServiceError {
    /// Text shown in the error banner. Reported errors surface verbatim.
    pub fn user_message(&self) -> &str {
        match self {
            ServiceError::Reported(message) => message,
            ServiceError::Transport(_) => TRANSPORT_USER_MESSAGE,
        }
    }
}

#[async_trait]
pub trait DecoderService: Send + Sync {
    /// Submit one hex payload and tank height, returning the decoded
    /// telemetry. The sole network operation in the system.
    async fn submit(
        &self,
        hex_string: &str,
        tank_height: f64,
    ) -> Result<TelemetryResult, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_errors_surface_verbatim() {
        let err = ServiceError::Reported("decode failed".to_string());
        assert_eq!(err.user_message(), "decode failed");
    }

    #[test]
    fn test_transport_errors_use_generic_message() {
        let err = ServiceError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), TRANSPORT_USER_MESSAGE);
    }
}
