//! Gemini-backed blessing source.
//!
//! Uses the blocking HTTP client, so requests should run on a worker thread
//! (as [`BlessingDesk`](crate::scene::BlessingDesk) does), never on the
//! render thread.

use super::{blessing_prompt, BlessingReply, BlessingSource};
use crate::error::BlessingError;
use crate::shape::ShapeId;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Clone)]
pub struct GeminiBlessings {
    client: Client,
    api_key: Option<String>,
    model: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiBlessings {
    /// Client reading its key from [`API_KEY_VAR`].
    pub fn from_env(model: Option<String>) -> Self {
        Self::new(std::env::var(API_KEY_VAR).ok(), model)
    }

    pub fn new(api_key: Option<String>, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    /// Whether a key is configured. Without one every request fails.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn generate(&self, shape: ShapeId) -> Result<BlessingReply, BlessingError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(BlessingError::Unavailable("GEMINI_API_KEY is not set"))?;

        let body = json!({
            "contents": [{ "parts": [{ "text": blessing_prompt(shape) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "message": { "type": "STRING" }
                    },
                    "required": ["title", "message"]
                }
            }
        });

        let url = format!("{}/{}:generateContent", GEMINI_API_URL, self.model);
        let res = self
            .client
            .post(url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .map_err(|e| BlessingError::Transport(format!("failed to contact Gemini: {}", e)))?;

        if !res.status().is_success() {
            return Err(BlessingError::Transport(format!(
                "Gemini answered with status {}",
                res.status()
            )));
        }

        let parsed: GenerateResponse = res
            .json()
            .map_err(|e| BlessingError::Transport(format!("unreadable Gemini response: {}", e)))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        BlessingReply::from_json(&text)
    }
}

impl BlessingSource for GeminiBlessings {
    async fn request(&self, shape: ShapeId) -> Result<BlessingReply, BlessingError> {
        self.generate(shape)
    }
}
