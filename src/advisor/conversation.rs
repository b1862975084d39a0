//! Conversation log for the advisor chat
//!
//! Advice requests and speech playback are both single-flight: a submission
//! made while an answer is pending is ignored, and a speech request made
//! while speech is playing is rejected with [`CashflowError::Busy`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::audio::AudioOutput;
use super::gateway::AdvisoryGateway;
use super::provider::AdviceProvider;
use crate::error::{CashflowError, CashflowResult};
use crate::models::Transaction;
use crate::reports::FinancialStats;

/// First message shown in a new conversation
pub const GREETING: &str =
    "Hello! I'm your financial advisor. Ask me anything about your spending and savings.";

/// Shown in place of an answer when the provider fails
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong while contacting the advisor.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Outcome of a submission that reached the provider
#[derive(Debug)]
pub struct Reply {
    /// Text appended to the log (the answer or [`FALLBACK_REPLY`])
    pub text: String,
    /// Provider failure replaced by the fallback, if any
    pub failure: Option<CashflowError>,
}

/// Flag that admits one holder at a time
#[derive(Debug, Default)]
pub struct FlightGate {
    busy: AtomicBool,
}

impl FlightGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the gate, or `None` when it is already held
    pub fn try_acquire(&self) -> Option<FlightGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| FlightGuard { gate: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases its [`FlightGate`] on drop
#[derive(Debug)]
pub struct FlightGuard<'a> {
    gate: &'a FlightGate,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}

/// Chat state: message log plus the advice and speech gates
#[derive(Debug)]
pub struct Conversation {
    messages: Mutex<Vec<ChatMessage>>,
    advice_gate: FlightGate,
    speech_gate: FlightGate,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Start a conversation with the assistant's greeting
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(vec![ChatMessage::new(Role::Assistant, GREETING)]),
            advice_gate: FlightGate::new(),
            speech_gate: FlightGate::new(),
        }
    }

    pub fn messages(&self) -> CashflowResult<Vec<ChatMessage>> {
        Ok(self.lock()?.clone())
    }

    /// Most recent assistant message
    pub fn last_reply(&self) -> CashflowResult<Option<String>> {
        Ok(self
            .lock()?
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
            .map(|m| m.text.clone()))
    }

    pub fn is_loading(&self) -> bool {
        self.advice_gate.is_busy()
    }

    /// Submit a question
    ///
    /// Blank input, or input while an answer is pending, is ignored and
    /// yields `Ok(None)`. Otherwise the question and then the answer (or the
    /// fallback reply) are appended to the log.
    pub async fn submit<P: AdviceProvider>(
        &self,
        gateway: &AdvisoryGateway<P>,
        transactions: &[Transaction],
        stats: &FinancialStats,
        input: &str,
    ) -> CashflowResult<Option<Reply>> {
        let query = input.trim();
        if query.is_empty() {
            return Ok(None);
        }
        let Some(_loading) = self.advice_gate.try_acquire() else {
            return Ok(None);
        };

        self.push(ChatMessage::new(Role::User, query))?;

        let reply = match gateway.get_advice(transactions, stats, query).await {
            Ok(text) => Reply {
                text,
                failure: None,
            },
            Err(e) => Reply {
                text: FALLBACK_REPLY.to_string(),
                failure: Some(e),
            },
        };

        self.push(ChatMessage::new(Role::Assistant, reply.text.clone()))?;
        Ok(Some(reply))
    }

    /// Speak `text`, rejecting the call while other speech is playing
    pub async fn speak<P: AdviceProvider>(
        &self,
        gateway: &AdvisoryGateway<P>,
        text: &str,
        output: &dyn AudioOutput,
    ) -> CashflowResult<()> {
        let Some(_playing) = self.speech_gate.try_acquire() else {
            return Err(CashflowError::Busy("speech is already playing".into()));
        };
        gateway.speak(text, output).await
    }

    fn push(&self, message: ChatMessage) -> CashflowResult<()> {
        self.lock()?.push(message);
        Ok(())
    }

    fn lock(&self) -> CashflowResult<std::sync::MutexGuard<'_, Vec<ChatMessage>>> {
        self.messages.lock().map_err(|e| {
            CashflowError::Conversation(format!("Chat log lock poisoned: {}", e))
        })
    }
}
