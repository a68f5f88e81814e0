//! Gemini API client for action-item extraction.
//!
//! Wraps the `generateContent` endpoint of the Google generative language
//! API. Extraction requests ask the model for a JSON response
//! (`responseMimeType`) and deserialize it strictly into typed structs, so a
//! malformed reply surfaces as one well-defined format error instead of
//! being patched up with string surgery.

use crate::error::{DomainErrorKind, Error, ExternalErrorKind, InternalErrorKind};
use log::*;
use serde::{Deserialize, Serialize};
use service::config::Config;

/// Request body for `generateContent`
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

/// Response body from `generateContent`
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// One action item as returned by the model, prior to normalization.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedItem {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    /// Kept as raw JSON: the model is instructed to send an array but is not
    /// trusted to. Anything that is not an array flattens to no tags.
    #[serde(default)]
    pub tags: Option<serde_json::Value>,
}

/// The exact reply shape the extraction prompt demands from the model.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub action_items: Vec<ExtractedItem>,
}

/// Gemini API client
#[derive(Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new client from the configured credential, base URL and
    /// model. Fails with a configuration error when no API key is set.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let api_key = config.gemini_api_key().ok_or_else(|| {
            warn!("No Gemini API key configured");
            Error {
                source: None,
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
            }
        })?;

        let mut headers = reqwest::header::HeaderMap::new();
        let mut header_value = reqwest::header::HeaderValue::from_str(&api_key).map_err(|e| {
            warn!("Failed to create auth header: {e:?}");
            Error {
                source: Some(Box::new(e)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Invalid API key format".to_string(),
                )),
            }
        })?;
        header_value.set_sensitive(true);
        headers.insert("x-goog-api-key", header_value);

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.gemini_base_url().to_string(),
            model: config.gemini_model().to_string(),
        })
    }

    /// Extract action items from a transcript.
    ///
    /// One-shot call: no retry, no repair attempt. The reply must
    /// deserialize into [`ExtractionResponse`] or the whole ingestion fails
    /// with a format error.
    pub async fn extract_action_items(&self, transcript: &str) -> Result<Vec<ExtractedItem>, Error> {
        let prompt = extraction_prompt(transcript);
        let text = self.generate(&prompt, true).await?;

        let response: ExtractionResponse = serde_json::from_str(&text).map_err(|e| {
            warn!("Model reply failed extraction-schema deserialization: {e:?}, reply: {text}");
            Error {
                source: Some(Box::new(e)),
                error_kind: DomainErrorKind::External(ExternalErrorKind::Format),
            }
        })?;

        Ok(response.action_items)
    }

    /// Trivial generation request used by the health check.
    pub async fn ping(&self) -> Result<(), Error> {
        self.generate("ping", false).await.map(|_| ())
    }

    async fn generate(&self, prompt: &str, json_output: bool) -> Result<String, Error> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: json_output.then(|| GenerationConfig {
                response_mime_type: "application/json".to_string(),
            }),
        };

        debug!("Sending generateContent request to model: {}", self.model);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to reach generation endpoint: {e:?}");
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
                }
            })?;

        if response.status().is_success() {
            let body: GenerateContentResponse = response.json().await.map_err(|e| {
                warn!("Failed to parse generateContent response: {e:?}");
                Error {
                    source: Some(Box::new(e)),
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Format),
                }
            })?;

            let text: String = body
                .candidates
                .into_iter()
                .next()
                .map(|candidate| {
                    candidate
                        .content
                        .parts
                        .into_iter()
                        .map(|part| part.text)
                        .collect()
                })
                .unwrap_or_default();

            if text.is_empty() {
                warn!("generateContent returned no candidates");
                return Err(Error {
                    source: None,
                    error_kind: DomainErrorKind::External(ExternalErrorKind::Format),
                });
            }

            Ok(text)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            error!("Generation API: {error_text}");
            Err(Error {
                source: None,
                error_kind: DomainErrorKind::External(ExternalErrorKind::Other(error_text)),
            })
        }
    }
}

/// The fixed extraction prompt sent for every ingested transcript.
fn extraction_prompt(transcript: &str) -> String {
    format!(
        "You are an expert project manager. Extract action items from the following meeting transcript.\n\
         For each action item, identify:\n\
         - The task itself (clear and concise)\n\
         - The owner (who is responsible, if mentioned)\n\
         - The due date (if mentioned, format as an ISO date like 2026-02-20)\n\
         - Tags (an array of short, relevant categories like \"Research\", \"Backend\", \"UI\")\n\n\
         Return the result ONLY as a JSON object with a key \"action_items\" containing an array of \
         objects with the following keys: \"task\", \"owner\", \"dueDate\", \"tags\".\n\
         If no owner or due date is found, use null.\n\n\
         Transcript:\n{transcript}"
    )
}
