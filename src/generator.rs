use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::time::{Duration, timeout};

#[derive(Debug, Clone, Serialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub num_return_sequences: u32,
    pub do_sample: bool,
    pub top_p: f64,
    pub temperature: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 30,
            num_return_sequences: 1,
            do_sample: true,
            top_p: 0.95,
            temperature: 0.85,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Generation {
    pub generated_text: String,
}

#[derive(Clone)]
pub struct TextGeneration {
    client: reqwest::Client,
    backend_url: String,
    model: String,
    timeout_ms: u64,
}

#[derive(Debug)]
pub enum GenerationError {
    Timeout,
    Request(reqwest::Error),
    Backend {
        status: reqwest::StatusCode,
        body: String,
    },
    Decode(reqwest::Error),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "text generation request timed out"),
            Self::Request(err) => write!(f, "failed to reach text generation backend: {err}"),
            Self::Backend { status, body } => {
                write!(f, "text generation backend failed ({status}): {body}")
            }
            Self::Decode(err) => write!(f, "failed to decode text generation response: {err}"),
        }
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request(err) | Self::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl TextGeneration {
    pub fn new(backend_url: impl Into<String>, model: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            backend_url: backend_url.into(),
            model: model.into(),
            timeout_ms,
        }
    }

    pub async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Vec<Generation>, GenerationError> {
        let payload = serde_json::json!({
            "model": self.model,
            "inputs": prompt,
            "parameters": params,
        });

        let fut = self.client.post(&self.backend_url).json(&payload).send();

        let response = timeout(Duration::from_millis(self.timeout_ms), fut)
            .await
            .map_err(|_| GenerationError::Timeout)
            .and_then(|res| res.map_err(GenerationError::Request))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(GenerationError::Backend { status, body });
        }

        response
            .json::<Vec<Generation>>()
            .await
            .map_err(GenerationError::Decode)
    }
}
