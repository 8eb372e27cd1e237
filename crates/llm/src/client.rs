use std::time::Instant;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::redaction::RedactionPolicy;

const SNIPPET_CHARS: usize = 200;
const TRUNCATION_MARKER: &str = "...";

/// Response envelope returned for every completion call. Constructed once,
/// then owned entirely by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub text: String,
    pub citations: Vec<String>,
    pub tokens: u32,
    pub latency_ms: u64,
}

/// The completion step behind the client. The stub synthesizes a summary
/// line locally; a real model integration adds a variant here and reports
/// its failures through the same `Result` channel, leaving the redaction
/// and envelope logic untouched.
#[derive(Debug, Clone, Default)]
pub enum CompletionBackend {
    #[default]
    Stub,
}

impl CompletionBackend {
    fn complete(&self, model: &str, snippet: &str) -> Result<String> {
        match self {
            CompletionBackend::Stub => Ok(format!("[{model}] Summary: {snippet}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompletionClient {
    model: String,
    policy: RedactionPolicy,
    backend: CompletionBackend,
}

impl CompletionClient {
    /// Redaction is on by default; `redact(false)` forwards context verbatim.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            policy: RedactionPolicy::standard(),
            backend: CompletionBackend::default(),
        }
    }

    pub fn redact(mut self, enabled: bool) -> Self {
        self.policy = if enabled {
            RedactionPolicy::standard()
        } else {
            RedactionPolicy::disabled()
        };
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn policy(&self) -> &RedactionPolicy {
        &self.policy
    }

    /// Sanitizes the context under the active policy, forwards a snippet of
    /// it to the completion step, and wraps the output in an envelope.
    ///
    /// Redaction runs before truncation, so a match straddling the snippet
    /// window can never leak a partial value into the output. An empty
    /// context string means "no supplementary context", same as `None`.
    pub fn complete(&self, prompt: &str, context: Option<&str>) -> Result<CompletionResponse> {
        let started = Instant::now();
        let context = context.filter(|text| !text.is_empty());
        let snippet = match context {
            Some(raw) => {
                let sanitized = self.policy.apply(raw);
                let mut snippet = truncate_chars(&sanitized, SNIPPET_CHARS);
                snippet.push_str(TRUNCATION_MARKER);
                snippet
            }
            None => truncate_chars(prompt, SNIPPET_CHARS),
        };
        let text = self.backend.complete(&self.model, &snippet)?;
        let tokens = (text.chars().count() / 4) as u32;
        let latency_ms = started.elapsed().as_millis() as u64;
        Ok(CompletionResponse {
            text,
            citations: Vec::new(),
            tokens,
            latency_ms,
        })
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
