use async_trait::async_trait;
use serde::de::IgnoredAny;
use std::time::Duration;

use super::dto::{FacturaDto, FacturaInputDto, ProveedorDto, ProveedorInputDto};
use super::error::TransportError;
use super::transport::{HttpTransport, RequestOptions};

/// Сервис поставщиков и счетов
#[async_trait]
pub trait ProvidersApi: Send + Sync {
    /// GET /api/proveedores
    async fn get_providers(&self) -> Result<Vec<ProveedorDto>, TransportError>;

    /// GET /api/proveedores/{id}
    async fn get_provider(&self, id: i64) -> Result<ProveedorDto, TransportError>;

    /// POST /api/proveedores
    async fn create_provider(&self, input: &ProveedorInputDto) -> Result<(), TransportError>;

    /// GET /api/facturas
    async fn get_invoices(&self) -> Result<Vec<FacturaDto>, TransportError>;

    /// GET /api/facturas/{id}
    async fn get_invoice(&self, id: i64) -> Result<FacturaDto, TransportError>;

    /// POST /api/facturas
    async fn create_invoice(&self, input: &FacturaInputDto) -> Result<(), TransportError>;
}

/// HTTP-клиент сервиса поставщиков и счетов
pub struct ProvidersApiClient {
    transport: HttpTransport,
}

impl ProvidersApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            transport: HttpTransport::new("Proveedores", base_url, timeout)?,
        })
    }
}

#[async_trait]
impl ProvidersApi for ProvidersApiClient {
    async fn get_providers(&self) -> Result<Vec<ProveedorDto>, TransportError> {
        self.transport
            .request_body("/api/proveedores", RequestOptions::get())
            .await
    }

    async fn get_provider(&self, id: i64) -> Result<ProveedorDto, TransportError> {
        self.transport
            .request_body(&format!("/api/proveedores/{}", id), RequestOptions::get())
            .await
    }

    async fn create_provider(&self, input: &ProveedorInputDto) -> Result<(), TransportError> {
        self.transport
            .request::<IgnoredAny>("/api/proveedores", RequestOptions::post(input)?)
            .await?;
        Ok(())
    }

    async fn get_invoices(&self) -> Result<Vec<FacturaDto>, TransportError> {
        self.transport
            .request_body("/api/facturas", RequestOptions::get())
            .await
    }

    async fn get_invoice(&self, id: i64) -> Result<FacturaDto, TransportError> {
        self.transport
            .request_body(&format!("/api/facturas/{}", id), RequestOptions::get())
            .await
    }

    async fn create_invoice(&self, input: &FacturaInputDto) -> Result<(), TransportError> {
        self.transport
            .request::<IgnoredAny>("/api/facturas", RequestOptions::post(input)?)
            .await?;
        Ok(())
    }
}
