use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::error::TransportError;

/// Параметры одного запроса к upstream
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<serde_json::Value>,
    /// Заголовки вызывающего; перекрывают стандартные
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::with_method(Method::GET)
    }

    pub fn delete() -> Self {
        Self::with_method(Method::DELETE)
    }

    pub fn post(body: &impl Serialize) -> Result<Self, TransportError> {
        Self::with_method(Method::POST).body(body)
    }

    pub fn put(body: &impl Serialize) -> Result<Self, TransportError> {
        Self::with_method(Method::PUT).body(body)
    }

    pub fn header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    fn with_method(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    fn body(mut self, body: &impl Serialize) -> Result<Self, TransportError> {
        self.body = Some(serde_json::to_value(body).map_err(TransportError::Encode)?);
        Ok(self)
    }
}

/// HTTP-транспорт к одному upstream-сервису.
///
/// Состояния, кроме базового URL, нет: экземпляр можно свободно
/// использовать из параллельных запросов.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    service: &'static str,
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(service: &'static str, base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client for {}: {}", service, e))?;

        Ok(Self {
            service,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Выполнить запрос и разобрать JSON-ответ.
    ///
    /// `Ok(None)` - ответ 204 без тела. Схема ответа не проверяется:
    /// некорректный JSON даёт `TransportError::Decode`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<T>, TransportError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let method = options.method.clone();

        let mut headers = default_headers();
        headers.extend(options.headers);

        let mut builder = self.client.request(method.clone(), &url).headers(headers);
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        tracing::debug!("{} API: {} {}", self.service, method, url);

        let response = builder.send().await.map_err(|e| {
            tracing::error!("{} API: network error on {} {}: {}", self.service, method, url, e);
            TransportError::Network {
                url: url.clone(),
                source: e,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = TransportError::Status {
                status: status.as_u16(),
                body,
            };
            tracing::error!("{} API: {} {} failed: {}", self.service, method, url, err);
            return Err(err);
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().await.map_err(|e| TransportError::Network {
            url: url.clone(),
            source: e,
        })?;

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            tracing::error!("{} API: invalid JSON from {}: {}", self.service, url, e);
            TransportError::Decode { url, source: e }
        })
    }

    /// Запрос, на который upstream обязан ответить телом
    pub async fn request_body<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, TransportError> {
        self.request(endpoint, options)
            .await?
            .ok_or_else(|| TransportError::EmptyBody(format!("{}{}", self.base_url, endpoint)))
    }
}

/// JSON в обе стороны и никакого кеширования
fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}
