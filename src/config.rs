use std::env;

pub struct AppConfig {
    pub port: u16,
    pub backend_url: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(5002);

        let backend_url = env::var("GENERATION_BACKEND_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080/generate".to_string());

        let model = env::var("GENERATION_MODEL").unwrap_or_else(|_| "gpt2".to_string());

        let timeout_ms = env::var("GENERATION_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(30_000);

        Self {
            port,
            backend_url,
            model,
            timeout_ms,
        }
    }
}
