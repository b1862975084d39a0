//! Financial advisor
//!
//! Advice and speech through a generative provider:
//!
//! - `AdviceProvider`: the two provider capabilities (text, speech).
//! - `GeminiProvider`: the REST implementation.
//! - `AdvisoryGateway`: prompt composition and pass-through calls.
//! - `Conversation`: chat log with single-flight advice and speech.
//! - `audio`: PCM decoding and WAV or speaker output.

pub mod audio;
pub mod conversation;
pub mod gateway;
pub mod gemini;
pub mod provider;

pub use audio::{decode_pcm16_base64, AudioOutput, WavFileOutput};
#[cfg(feature = "playback")]
pub use audio::SpeakerOutput;
pub use conversation::{ChatMessage, Conversation, Reply, Role, FALLBACK_REPLY, GREETING};
pub use gateway::AdvisoryGateway;
pub use gemini::GeminiProvider;
pub use provider::AdviceProvider;
