use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::PipelineError;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

pub fn build_prompt(article: &str) -> String {
    // Pre-allocate approximately the right amount of space
    let mut result = String::with_capacity(article.len() + 250);
    result.push_str(
        "You are writing a short podcast episode. Turn the following article \
         into an engaging spoken narration: a one-sentence hook, the key points \
         in plain conversational language, and a brief sign-off. Output only \
         the narration text, with no headings or stage directions:\n\n",
    );
    result.push_str(article);
    result
}

/// Ask Gemini for a podcast-style narration script of the crawled article.
pub async fn summarize(
    client: &Client,
    api_key: &str,
    article: &str,
) -> Result<String, PipelineError> {
    let prompt = build_prompt(article);
    debug!(prompt_chars = prompt.len(), "requesting summarization");

    let body = GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
    };

    let res = client
        .post(GEMINI_ENDPOINT)
        .query(&[("key", api_key)])
        .json(&body)
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(PipelineError::new(format!(
            "Summarization failed: HTTP {}",
            res.status()
        )));
    }

    let json: serde_json::Value = res.json().await?;
    let script = json["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or_else(|| PipelineError::new("Invalid response format from Gemini".to_string()))?
        .to_string();

    if script.trim().is_empty() {
        return Err(PipelineError::new("Gemini returned an empty script"));
    }

    Ok(script)
}
