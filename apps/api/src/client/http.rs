use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::client::{ClientError, TransformApi};
use crate::transform::generator::Variation;
use crate::transform::models::TransformRequest;

/// Either shape the endpoint may answer with.
#[derive(Debug, Deserialize)]
struct TransformReply {
    variations: Option<Vec<Variation>>,
    error: Option<String>,
}

/// `TransformApi` over HTTP against a running Hookforge server.
#[derive(Clone)]
pub struct HttpTransformApi {
    client: Client,
    endpoint: String,
}

impl HttpTransformApi {
    /// `server` is the base URL, e.g. `http://localhost:8080`.
    pub fn new(server: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: format!("{}/api/transform", server.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl TransformApi for HttpTransformApi {
    async fn transform(&self, request: &TransformRequest) -> Result<Vec<Variation>, ClientError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        let reply: TransformReply = serde_json::from_slice(&body)?;

        match reply.variations {
            Some(variations) if status.is_success() => Ok(variations),
            _ => Err(ClientError::Server {
                status: status.as_u16(),
                message: reply.error,
            }),
        }
    }
}
