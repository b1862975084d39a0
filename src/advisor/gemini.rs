//! Gemini `generateContent` provider over reqwest

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use super::audio::decode_pcm16_base64;
use super::provider::AdviceProvider;
use crate::config::preferences::Preferences;
use crate::error::{CashflowError, CashflowResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: [&'static str; 1],
    speech_config: SpeechConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechConfig<'a> {
    voice_config: VoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceConfig<'a> {
    prebuilt_voice_config: PrebuiltVoiceConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrebuiltVoiceConfig<'a> {
    voice_name: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
}

impl GenerateResponse {
    fn first_parts(&self) -> &[ResponsePart] {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated text parts of the first candidate
    fn text(&self) -> CashflowResult<String> {
        let text: String = self
            .first_parts()
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.is_empty() {
            Err(CashflowError::Provider("response contained no text".into()))
        } else {
            Ok(text)
        }
    }

    /// Base64 audio payload of the first candidate
    fn audio_payload(&self) -> CashflowResult<&str> {
        self.first_parts()
            .first()
            .and_then(|p| p.inline_data.as_ref())
            .map(|d| d.data.as_str())
            .ok_or_else(|| CashflowError::Provider("response contained no audio".into()))
    }
}

fn text_request(prompt: &str) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![TextPart { text: prompt }],
        }],
        generation_config: None,
    }
}

fn speech_request<'a>(prompt: &'a str, voice_name: &'a str) -> GenerateRequest<'a> {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![TextPart { text: prompt }],
        }],
        generation_config: Some(GenerationConfig {
            response_modalities: ["AUDIO"],
            speech_config: SpeechConfig {
                voice_config: VoiceConfig {
                    prebuilt_voice_config: PrebuiltVoiceConfig { voice_name },
                },
            },
        }),
    }
}

/// Provider backed by the Gemini REST API
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    text_model: String,
    speech_model: String,
    voice_name: String,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>, preferences: &Preferences) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: preferences.api_base_url.trim_end_matches('/').to_string(),
            text_model: preferences.text_model.clone(),
            speech_model: preferences.speech_model.clone(),
            voice_name: preferences.voice_name.clone(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest<'_>,
    ) -> CashflowResult<GenerateResponse> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|_| CashflowError::Provider("API key is not a valid header".into()))?,
        );

        let resp = self
            .client
            .post(self.endpoint(model))
            .headers(headers)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CashflowError::Provider(format!("{} {}", status, body)));
        }

        Ok(resp.json().await?)
    }
}

impl AdviceProvider for GeminiProvider {
    async fn generate_text(&self, prompt: &str) -> CashflowResult<String> {
        let response = self
            .generate(&self.text_model, &text_request(prompt))
            .await?;
        response.text()
    }

    async fn synthesize_speech(&self, prompt: &str) -> CashflowResult<Vec<f32>> {
        let response = self
            .generate(&self.speech_model, &speech_request(prompt, &self.voice_name))
            .await?;
        decode_pcm16_base64(response.audio_payload()?)
    }
}
