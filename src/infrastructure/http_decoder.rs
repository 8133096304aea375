// HTTP decoder client - the one outbound request in the system
use crate::application::decoder_service::{DecoderService, ServiceError};
use crate::domain::telemetry::TelemetryResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct DecodeRequest<'a> {
    hex_string: &'a str,
    tank_height: f64,
}

#[derive(Debug, Deserialize)]
struct DecodeEnvelope {
    success: bool,
    #[serde(default)]
    data: Option<TelemetryResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpDecoderService {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDecoderService {
    pub fn new(endpoint: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

/// Interpret the decoder's response envelope. Anything other than the two
/// documented shapes is a transport error.
fn parse_envelope(body: &str) -> Result<TelemetryResult, ServiceError> {
    let envelope: DecodeEnvelope = serde_json::from_str(body)
        .map_err(|e| ServiceError::Transport(format!("malformed decoder response: {e}")))?;

    match envelope {
        DecodeEnvelope {
            success: true,
            data: Some(data),
            ..
        } => Ok(data),
        DecodeEnvelope {
            success: false,
            error: Some(error),
            ..
        } => Err(ServiceError::Reported(error)),
        _ => Err(ServiceError::Transport(
            "decoder response did not match the expected envelope".to_string(),
        )),
    }
}

#[async_trait]
impl DecoderService for HttpDecoderService {
    async fn submit(
        &self,
        hex_string: &str,
        tank_height: f64,
    ) -> Result<TelemetryResult, ServiceError> {
        let request = DecodeRequest {
            hex_string,
            tank_height,
        };

        tracing::debug!(endpoint = %self.endpoint, "submitting payload to decoder service");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ServiceError::Transport(format!("request to decoder service failed: {e}"))
            })?;

        // The service reports decode failures as 400 with a success:false
        // body, so the envelope is parsed regardless of status.
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ServiceError::Transport(format!("failed to read decoder response ({status}): {e}"))
        })?;

        parse_envelope(&body)
    }
}
