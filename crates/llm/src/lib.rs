pub mod client;
pub mod redaction;

pub use client::{CompletionBackend, CompletionClient, CompletionResponse};
pub use redaction::{matches_any, redaction_rules, RedactionPolicy, RedactionRule, SENTINEL};
