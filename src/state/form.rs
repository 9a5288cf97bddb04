use tracing::{error, info};

use crate::error::{SubmissionError, SubmitRejected, ValidationError};
use crate::gateway::Submission;
use crate::phone;
use crate::state::data::ImageFile;

/// Shown once the gateway accepts a submission
pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso!";

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// The pending submission: image, phone and prompt as currently entered
#[derive(Debug, Default)]
pub struct Form {
    image: Option<ImageFile>,
    /// Masked display value; digits are always re-derived from it
    phone: String,
    prompt: String,
    phase: Phase,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&ImageFile> {
        self.image.as_ref()
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn phone_digits(&self) -> String {
        phone::digits(&self.phone)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Selection callback from the image selector
    pub fn set_image(&mut self, file: ImageFile) {
        self.image = Some(file);
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Store a keystroke's worth of phone input, masked
    pub fn set_phone(&mut self, raw: &str) {
        self.phone = phone::format(raw);
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Check the fields in order; the first failure wins
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.image.is_none() {
            return Err(ValidationError::MissingImage);
        }

        let digits = self.phone_digits().len();
        if digits < phone::MIN_DIGITS {
            return Err(ValidationError::InvalidPhone { digits });
        }

        if self.prompt.trim().is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }

        Ok(())
    }

    /// Move to `Submitting` and build the payload, if the form is valid
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::Busy);
        }
        self.validate()?;

        let image = self.image.as_ref().ok_or(ValidationError::MissingImage)?;
        let submission = Submission::new(image, self.phone_digits(), self.prompt.clone());

        self.phase = Phase::Submitting;
        info!(phone = %submission.phone, "🚀 submitting");

        Ok(submission)
    }

    /// Apply the gateway outcome and return to `Idle`
    ///
    /// Success clears every field. Failure keeps them for a retry.
    pub fn finish_submit(
        &mut self,
        outcome: Result<(), SubmissionError>,
    ) -> Result<(), SubmissionError> {
        self.phase = Phase::Idle;

        match outcome {
            Ok(()) => {
                info!("✅ submission delivered");
                self.reset();
                Ok(())
            }
            Err(e) => {
                let SubmissionError::Delivery { reason } = &e;
                error!(%reason, "❌ submission failed");
                Err(e)
            }
        }
    }

    fn reset(&mut self) {
        self.image = None;
        self.phone.clear();
        self.prompt.clear();
    }
}
