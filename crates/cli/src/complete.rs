use anyhow::Result;
use tracing::debug;

use claimwise_llm::CompletionClient;

pub fn run(prompt: &str, context: Option<&str>, model: &str, redact: bool) -> Result<()> {
    let client = CompletionClient::new(model).redact(redact);
    debug!(model, redact, "running stub completion");
    let response = client.complete(prompt, context)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
