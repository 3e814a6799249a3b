use thiserror::Error;

/// Ошибки обращения к upstream-сервису
#[derive(Debug, Error)]
pub enum TransportError {
    /// Ответ со статусом вне 2xx; тело ответа сохраняется как текст
    #[error("API Error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Network error calling {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// 204 там, где вызывающий ждёт тело
    #[error("Empty response from {0}")]
    EmptyBody(String),
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
