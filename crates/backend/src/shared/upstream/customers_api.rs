use async_trait::async_trait;
use serde::de::IgnoredAny;
use std::time::Duration;

use super::dto::{ClienteDto, ClienteInputDto, PedidoDto, PedidoInputDto};
use super::error::TransportError;
use super::transport::{HttpTransport, RequestOptions};

/// Сервис клиентов и заказов
#[async_trait]
pub trait CustomersApi: Send + Sync {
    /// GET /api/clientes
    async fn get_customers(&self) -> Result<Vec<ClienteDto>, TransportError>;

    /// GET /api/clientes/{id}
    async fn get_customer(&self, id: i64) -> Result<ClienteDto, TransportError>;

    /// POST /api/clientes; тело ответа не проверяется
    async fn create_customer(&self, input: &ClienteInputDto) -> Result<(), TransportError>;

    /// PUT /api/clientes/{id}; успех обычно 204 без тела
    async fn update_customer(&self, id: i64, input: &ClienteInputDto)
        -> Result<(), TransportError>;

    /// DELETE /api/clientes/{id}
    async fn delete_customer(&self, id: i64) -> Result<(), TransportError>;

    /// GET /api/pedidos
    async fn get_orders(&self) -> Result<Vec<PedidoDto>, TransportError>;

    /// GET /api/pedidos/{id}
    async fn get_order(&self, id: i64) -> Result<PedidoDto, TransportError>;

    /// GET /api/pedidos/cliente/{clienteId}
    async fn get_orders_by_customer(&self, customer_id: i64)
        -> Result<Vec<PedidoDto>, TransportError>;

    /// POST /api/pedidos
    async fn create_order(&self, input: &PedidoInputDto) -> Result<(), TransportError>;
}

/// HTTP-клиент сервиса клиентов и заказов
pub struct CustomersApiClient {
    transport: HttpTransport,
}

impl CustomersApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            transport: HttpTransport::new("Clientes", base_url, timeout)?,
        })
    }
}

#[async_trait]
impl CustomersApi for CustomersApiClient {
    async fn get_customers(&self) -> Result<Vec<ClienteDto>, TransportError> {
        self.transport
            .request_body("/api/clientes", RequestOptions::get())
            .await
    }

    async fn get_customer(&self, id: i64) -> Result<ClienteDto, TransportError> {
        self.transport
            .request_body(&format!("/api/clientes/{}", id), RequestOptions::get())
            .await
    }

    async fn create_customer(&self, input: &ClienteInputDto) -> Result<(), TransportError> {
        self.transport
            .request::<IgnoredAny>("/api/clientes", RequestOptions::post(input)?)
            .await?;
        Ok(())
    }

    async fn update_customer(
        &self,
        id: i64,
        input: &ClienteInputDto,
    ) -> Result<(), TransportError> {
        self.transport
            .request::<IgnoredAny>(&format!("/api/clientes/{}", id), RequestOptions::put(input)?)
            .await?;
        Ok(())
    }

    async fn delete_customer(&self, id: i64) -> Result<(), TransportError> {
        self.transport
            .request::<IgnoredAny>(&format!("/api/clientes/{}", id), RequestOptions::delete())
            .await
            .map(|_| ())
    }

    async fn get_orders(&self) -> Result<Vec<PedidoDto>, TransportError> {
        self.transport
            .request_body("/api/pedidos", RequestOptions::get())
            .await
    }

    async fn get_order(&self, id: i64) -> Result<PedidoDto, TransportError> {
        self.transport
            .request_body(&format!("/api/pedidos/{}", id), RequestOptions::get())
            .await
    }

    async fn get_orders_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<PedidoDto>, TransportError> {
        self.transport
            .request_body(
                &format!("/api/pedidos/cliente/{}", customer_id),
                RequestOptions::get(),
            )
            .await
    }

    async fn create_order(&self, input: &PedidoInputDto) -> Result<(), TransportError> {
        self.transport
            .request::<IgnoredAny>("/api/pedidos", RequestOptions::post(input)?)
            .await?;
        Ok(())
    }
}
