//! Advisory gateway
//!
//! Composes advice prompts from the current figures and forwards them to an
//! [`AdviceProvider`]. The gateway performs no connectivity check, no retry
//! and imposes no timeout.

use super::audio::AudioOutput;
use super::provider::AdviceProvider;
use crate::config::preferences::Preferences;
use crate::error::CashflowResult;
use crate::models::Transaction;
use crate::reports::FinancialStats;

/// Instruction prepended to text sent for speech synthesis
pub const SPEECH_PREFIX: &str = "Read the following naturally: ";

/// Gateway between the application and a generative provider
#[derive(Debug)]
pub struct AdvisoryGateway<P> {
    provider: P,
    recent_context_size: usize,
    currency_label: String,
}

impl<P: AdviceProvider> AdvisoryGateway<P> {
    pub fn new(provider: P, preferences: &Preferences) -> Self {
        Self {
            provider,
            recent_context_size: preferences.recent_context_size,
            currency_label: preferences.currency_label.clone(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build the advice prompt
    ///
    /// Embeds the last `recent_context_size` entries of `transactions` as
    /// given, without re-sorting.
    pub fn build_advice_prompt(
        &self,
        transactions: &[Transaction],
        stats: &FinancialStats,
        query: &str,
    ) -> CashflowResult<String> {
        let start = transactions.len().saturating_sub(self.recent_context_size);
        let history = serde_json::to_string(&transactions[start..])?;
        let label = &self.currency_label;

        Ok(format!(
            "Current financial data:\n\
             - Cash: {}\n\
             - Bank: {}\n\
             - Total: {}\n\
             - Survival: {} days (based on the fixed daily cost)\n\
             - Transaction history: {}\n\
             \n\
             Act as a financial advisor. Answer the user's question concisely, \
             clearly and helpfully.\n\
             \n\
             User asks: {}",
            stats.current_cash.format_with_label(label),
            stats.current_bank.format_with_label(label),
            stats.total.format_with_label(label),
            stats.survival_days,
            history,
            query
        ))
    }

    /// Ask the provider for advice; the raw response text is returned
    pub async fn get_advice(
        &self,
        transactions: &[Transaction],
        stats: &FinancialStats,
        query: &str,
    ) -> CashflowResult<String> {
        let prompt = self.build_advice_prompt(transactions, stats, query)?;
        self.provider.generate_text(&prompt).await
    }

    /// Synthesize `text` as speech and hand the samples to `output`
    pub async fn speak(&self, text: &str, output: &dyn AudioOutput) -> CashflowResult<()> {
        let prompt = format!("{}{}", SPEECH_PREFIX, text);
        let samples = self.provider.synthesize_speech(&prompt).await?;
        output.play(&samples)
    }
}
