//! Advisor CLI commands
//!
//! One-shot questions, an interactive chat and text-to-speech. Every command
//! here needs an API key; without one the advisor is reported unavailable.

use std::path::PathBuf;

use clap::Subcommand;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::advisor::{AdvisoryGateway, AudioOutput, Conversation, GeminiProvider, WavFileOutput};
use crate::config::paths::CashflowPaths;
use crate::config::preferences::Preferences;
use crate::display::conversation::format_message;
use crate::error::CashflowResult;
use crate::reports::compute_stats;
use crate::storage::Storage;

/// Advisor subcommands
#[derive(Subcommand)]
pub enum AdvisorCommands {
    /// Ask the advisor a question about your finances
    Ask {
        /// The question
        query: String,
        /// Read the answer aloud
        #[arg(long)]
        speak: bool,
        /// Write speech to this WAV file instead of the default output
        #[arg(long)]
        wav: Option<PathBuf>,
    },
    /// Chat with the advisor (`/speak` reads the last answer, `/quit` leaves)
    Chat {
        /// Write speech to this WAV file instead of the default output
        #[arg(long)]
        wav: Option<PathBuf>,
    },
    /// Read a text aloud
    Speak {
        /// Text to read
        text: String,
        /// Write speech to this WAV file instead of the default output
        #[arg(long)]
        wav: Option<PathBuf>,
    },
}

/// Handle an advisor command
pub async fn handle_advisor_command(
    storage: &Storage,
    preferences: &Preferences,
    api_key: Option<&str>,
    cmd: AdvisorCommands,
) -> CashflowResult<()> {
    let Some(api_key) = api_key.filter(|k| !k.trim().is_empty()) else {
        println!("The advisor is unavailable: set GEMINI_API_KEY or pass --api-key.");
        return Ok(());
    };

    let gateway = AdvisoryGateway::new(GeminiProvider::new(api_key, preferences), preferences);
    let conversation = Conversation::new();

    match cmd {
        AdvisorCommands::Ask { query, speak, wav } => {
            let Some(answer) = ask(storage, &gateway, &conversation, &query).await? else {
                return Ok(());
            };
            if speak {
                let output = audio_output(storage.paths(), wav);
                speak_text(&gateway, &conversation, &answer, output.as_ref()).await;
            }
        }

        AdvisorCommands::Chat { wav } => {
            let output = audio_output(storage.paths(), wav);
            chat(storage, &gateway, &conversation, output.as_ref()).await?;
        }

        AdvisorCommands::Speak { text, wav } => {
            let output = audio_output(storage.paths(), wav);
            speak_text(&gateway, &conversation, &text, output.as_ref()).await;
        }
    }

    Ok(())
}

/// Submit a question and print the reply; returns the answer on success
async fn ask(
    storage: &Storage,
    gateway: &AdvisoryGateway<GeminiProvider>,
    conversation: &Conversation,
    query: &str,
) -> CashflowResult<Option<String>> {
    // Recorded order, so the prompt's trailing entries are the newest
    let transactions = storage.transactions.get_in_recorded_order()?;
    let settings = storage.settings.get()?;
    let stats = compute_stats(&transactions, &settings);

    let Some(reply) = conversation
        .submit(gateway, &transactions, &stats, query)
        .await?
    else {
        return Ok(None);
    };

    if let Some(err) = &reply.failure {
        eprintln!("advisor error: {}", err);
    }
    if let Some(last) = conversation.messages()?.last() {
        println!("{}", format_message(last));
    }

    Ok(reply.failure.is_none().then_some(reply.text))
}

async fn chat(
    storage: &Storage,
    gateway: &AdvisoryGateway<GeminiProvider>,
    conversation: &Conversation,
    output: &dyn AudioOutput,
) -> CashflowResult<()> {
    for message in conversation.messages()? {
        println!("{}", format_message(&message));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" => break,
            "/speak" => match conversation.last_reply()? {
                Some(text) => speak_text(gateway, conversation, &text, output).await,
                None => println!("Nothing to read yet."),
            },
            query => {
                ask(storage, gateway, conversation, query).await?;
            }
        }
    }

    Ok(())
}

/// Speech failures only abort playback; they are reported and swallowed
async fn speak_text(
    gateway: &AdvisoryGateway<GeminiProvider>,
    conversation: &Conversation,
    text: &str,
    output: &dyn AudioOutput,
) {
    if let Err(e) = conversation.speak(gateway, text, output).await {
        eprintln!("speech error: {}", e);
    }
}

fn audio_output(paths: &CashflowPaths, wav: Option<PathBuf>) -> Box<dyn AudioOutput> {
    if let Some(path) = wav {
        return Box::new(WavFileOutput::new(path));
    }
    default_output(paths)
}

#[cfg(feature = "playback")]
fn default_output(_paths: &CashflowPaths) -> Box<dyn AudioOutput> {
    Box::new(crate::advisor::SpeakerOutput)
}

#[cfg(not(feature = "playback"))]
fn default_output(paths: &CashflowPaths) -> Box<dyn AudioOutput> {
    println!("Speech will be written to {}", paths.speech_file().display());
    Box::new(WavFileOutput::new(paths.speech_file()))
}
