//! Messaging gateway seam
//!
//! The form hands a [`Submission`] to a [`Gateway`]. The only gateway shipped
//! is [`SimulatedGateway`], which waits a fixed delay and reports success.
//! A real one would POST the JSON form of the payload to the WhatsApp
//! gateway endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::info;

use crate::error::SubmissionError;
use crate::state::data::ImageFile;

/// Image part of the outbound payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImagePayload {
    pub file_name: String,
    pub media_type: String,
    /// Base64 file contents
    pub data: String,
}

/// Everything sent to the gateway for one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub image: ImagePayload,
    /// Digits only, no mask
    pub phone: String,
    pub prompt: String,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(image: &ImageFile, phone: String, prompt: String) -> Self {
        Self {
            image: ImagePayload {
                file_name: image.name.clone(),
                media_type: image.media_type.as_str().to_string(),
                data: image.to_base64(),
            },
            phone,
            prompt,
            submitted_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Something that can deliver a submission
pub trait Gateway: Send + Sync + 'static {
    fn deliver(
        &self,
        submission: Submission,
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send;
}

/// Stand-in for the real backend: sleeps, then succeeds
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

impl Gateway for SimulatedGateway {
    fn deliver(
        &self,
        submission: Submission,
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send {
        let delay = self.delay;
        async move {
            let body = submission
                .to_json()
                .map_err(|e| SubmissionError::Delivery { reason: e.to_string() })?;

            info!(
                phone = %submission.phone,
                image = %submission.image.file_name,
                payload_bytes = body.len(),
                "📨 simulating delivery"
            );

            tokio::time::sleep(delay).await;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn submission() -> Submission {
        let image = ImageFile::new(PathBuf::from("/tmp/cat.png"), "image/png".into(), vec![1, 2, 3]);
        Submission::new(&image, "11987654321".into(), "Olá".into())
    }

    #[test]
    fn test_payload_json_shape() {
        let json: serde_json::Value = serde_json::from_str(&submission().to_json().unwrap()).unwrap();

        assert_eq!(json["phone"], "11987654321");
        assert_eq!(json["prompt"], "Olá");
        assert_eq!(json["image"]["file_name"], "cat.png");
        assert_eq!(json["image"]["media_type"], "image/png");
        assert_eq!(json["image"]["data"], "AQID");
        assert!(json["submitted_at"].is_string());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_delivery_waits_for_delay() {
        let gateway = SimulatedGateway::default();
        let started = tokio::time::Instant::now();

        gateway.deliver(submission()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(2));
    }
}
