//! Generative provider interface

use std::future::Future;

use crate::error::CashflowResult;

/// The two capabilities the advisor needs from a generative API
///
/// Any transport, provider or payload failure is reported as
/// [`crate::error::CashflowError::Provider`].
pub trait AdviceProvider {
    /// Send a prompt and return the generated text unmodified
    fn generate_text(&self, prompt: &str) -> impl Future<Output = CashflowResult<String>> + Send;

    /// Synthesize speech for a prompt, returning mono samples in `[-1.0, 1.0]`
    /// at [`super::audio::SAMPLE_RATE`]
    fn synthesize_speech(
        &self,
        prompt: &str,
    ) -> impl Future<Output = CashflowResult<Vec<f32>>> + Send;
}
