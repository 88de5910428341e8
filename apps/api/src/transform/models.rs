use serde::{Deserialize, Serialize};

use crate::transform::generator::Variation;

/// Body of `POST /api/transform`. Both fields are optional on the wire so the
/// handler can report a missing `text` itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_voice: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformResponse {
    pub variations: Vec<Variation>,
}
