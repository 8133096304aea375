// Submission dispatch - one spawned request per submit, tagged with a
// monotonically increasing id so the controller can discard stale outcomes
use crate::application::decoder_service::{DecoderService, ServiceError};
use crate::domain::telemetry::TelemetryResult;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

/// Resolution of one dispatched submission, delivered to the event loop.
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub id: u64,
    /// Tank height the request was issued with, carried along for display.
    pub tank_height: f64,
    pub result: Result<TelemetryResult, ServiceError>,
}

pub struct SubmissionService {
    decoder: Arc<dyn DecoderService>,
    outcomes: mpsc::UnboundedSender<SubmissionOutcome>,
    next_id: AtomicU64,
}

impl SubmissionService {
    pub fn new(
        decoder: Arc<dyn DecoderService>,
        outcomes: mpsc::UnboundedSender<SubmissionOutcome>,
    ) -> Self {
        Self {
            decoder,
            outcomes,
            next_id: AtomicU64::new(0),
        }
    }

    /// Spawn the request and return its submission id. The outcome arrives
    /// on the channel; the send only fails once the UI has shut down.
    pub fn dispatch(&self, hex_string: String, tank_height: f64) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let decoder = self.decoder.clone();
        let outcomes = self.outcomes.clone();

        tokio::spawn(async move {
            let result = decoder.submit(&hex_string, tank_height).await;
            let _ = outcomes.send(SubmissionOutcome {
                id,
                tank_height,
                result,
            });
        });

        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::telemetry::sample_result;
    use async_trait::async_trait;

    struct EchoDecoder;

    #[async_trait]
    impl DecoderService for EchoDecoder {
        async fn submit(
            &self,
            _hex_string: &str,
            _tank_height: f64,
        ) -> Result<TelemetryResult, ServiceError> {
            Ok(sample_result())
        }
    }

    #[tokio::test]
    async fn test_dispatch_delivers_outcome_with_id_and_height() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = SubmissionService::new(Arc::new(EchoDecoder), tx);

        let id = service.dispatch("A1B2C3".to_string(), 2.5);
        assert_eq!(id, 1);

        let outcome = rx.recv().await.unwrap();
        assert_eq!(outcome.id, 1);
        assert_eq!(outcome.tank_height, 2.5);
        assert!(outcome.result.is_ok());
    }

    #[tokio::test]
    async fn test_ids_increase_monotonically() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = SubmissionService::new(Arc::new(EchoDecoder), tx);

        let first = service.dispatch("A1".to_string(), 0.254);
        let second = service.dispatch("B2".to_string(), 0.254);
        assert!(second > first);

        let mut seen = vec![rx.recv().await.unwrap().id, rx.recv().await.unwrap().id];
        seen.sort_unstable();
        assert_eq!(seen, vec![first, second]);
    }
}
