// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Advice-text collaborator: assembles a prompt from the collections, asks
//! the generative-AI service for prose, and degrades to a fixed string on
//! any failure. Nothing here ever surfaces an error to the caller.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::aggregate::recent_transactions;
use crate::config::Config;
use crate::store::Store;
use crate::utils::{category_label, fmt_amount, http_client};

const MODEL: &str = "gemini-3-pro-preview";
const ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// How many of the newest transactions the prompt describes.
const PROMPT_TX_LIMIT: usize = 20;

pub const FALLBACK_NO_KEY: &str =
    "Running in demo mode without an API key. Set API_KEY to receive AI financial advice.";
pub const FALLBACK_EMPTY: &str = "No advice could be generated, please try again later.";
pub const FALLBACK_UNAVAILABLE: &str = "The AI advice service is temporarily unavailable.";

#[derive(Serialize)]
struct GenerateRequest {
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

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// The prompt describes every account and the newest transactions, with
/// category names resolved defensively.
pub fn build_prompt(store: &Store) -> String {
    let accounts = store
        .accounts()
        .iter()
        .map(|a| format!("- {}: balance {}", a.name, fmt_amount(&a.balance)))
        .collect::<Vec<_>>()
        .join("\n");
    let activity = recent_transactions(store.transactions(), PROMPT_TX_LIMIT)
        .map(|t| {
            format!(
                "- {} | {} | {}: {} ({})",
                t.date.format("%Y-%m-%d"),
                t.direction.as_str(),
                category_label(store, &t.category_id),
                fmt_amount(&t.amount),
                t.note
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "As a professional financial adviser, analyze the data below and give \
         specific, actionable recommendations in a warm, professional tone.\n\n\
         Account status:\n{}\n\nRecent activity:\n{}\n",
        accounts, activity
    )
}

/// The advice string, or a fixed fallback. Service failure is retried once
/// here and nowhere else; the caller never sees an error.
pub fn fetch_advice(config: &Config, store: &Store) -> String {
    let Some(key) = config.api_key() else {
        return FALLBACK_NO_KEY.to_string();
    };
    let prompt = build_prompt(store);
    let text = request_advice(&key, &prompt).or_else(|err| {
        warn!("advice request failed, retrying once: {err:#}");
        request_advice(&key, &prompt)
    });
    match text {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => FALLBACK_EMPTY.to_string(),
        Err(err) => {
            warn!("advice service unavailable: {err:#}");
            FALLBACK_UNAVAILABLE.to_string()
        }
    }
}

fn request_advice(api_key: &str, prompt: &str) -> Result<String> {
    let client = http_client()?;
    let url = format!("{}/{}:generateContent", ENDPOINT, MODEL);
    let body = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part {
                text: prompt.to_string(),
            }],
        }],
    };
    let resp = client
        .post(url)
        .header("x-goog-api-key", api_key)
        .json(&body)
        .send()?
        .error_for_status()?;
    let parsed: GenerateResponse = resp.json().context("Malformed advice response")?;
    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| {
            c.parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();
    Ok(text)
}
