//! Variation generation — the structured-output call behind the transform endpoint.
//!
//! The "exactly five" contract is enforced twice: declared to the provider in
//! `variation_schema()`, and asserted on the way back in `ensure_five()`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::llm_client::{LlmClient, LlmError};

/// Number of variations every successful transform returns.
pub const VARIATION_COUNT: usize = 5;

/// One rewrite of the user's text. `kind` is model-written, not a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

/// Shape the model is asked to produce.
#[derive(Debug, Deserialize)]
pub struct VariationSet {
    pub variations: Vec<Variation>,
}

/// Output schema sent as `responseSchema` (OpenAPI subset used by Gemini).
pub fn variation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "variations": {
                "type": "ARRAY",
                "minItems": VARIATION_COUNT,
                "maxItems": VARIATION_COUNT,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "type": {
                            "type": "STRING",
                            "description": "The name of the variation type (e.g., 'The Storyteller', 'The Contrarian')"
                        },
                        "content": {
                            "type": "STRING",
                            "description": "The actual formatted text of the LinkedIn post, including line breaks and hashtags."
                        }
                    },
                    "required": ["type", "content"],
                    "propertyOrdering": ["type", "content"]
                }
            }
        },
        "required": ["variations"]
    })
}

/// Rejects anything but exactly `VARIATION_COUNT` entries. Order is preserved.
///
/// Empty `content` strings are passed through; only the count is asserted.
pub fn ensure_five(variations: Vec<Variation>) -> Result<Vec<Variation>, LlmError> {
    if variations.len() != VARIATION_COUNT {
        return Err(LlmError::SchemaViolation(format!(
            "expected {VARIATION_COUNT} variations, got {}",
            variations.len()
        )));
    }
    Ok(variations)
}

/// The generation backend. Implement this to swap providers without touching
/// the handler.
///
/// Carried in `AppState` as `Arc<dyn VariationGenerator>`.
#[async_trait]
pub trait VariationGenerator: Send + Sync {
    async fn generate(&self, system: &str, prompt: &str) -> Result<Vec<Variation>, LlmError>;
}

/// Gemini-backed generator with the declared variation schema.
pub struct GeminiVariationGenerator(pub LlmClient);

#[async_trait]
impl VariationGenerator for GeminiVariationGenerator {
    async fn generate(&self, system: &str, prompt: &str) -> Result<Vec<Variation>, LlmError> {
        let set: VariationSet = self
            .0
            .call_json(prompt, system, &variation_schema())
            .await?;
        Ok(set.variations)
    }
}
