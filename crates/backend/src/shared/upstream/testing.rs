//! In-memory подмены upstream-сервисов для тестов запросов и действий

use async_trait::async_trait;
use std::sync::Mutex;

use super::dto::*;
use super::error::TransportError;
use super::{CustomersApi, ProvidersApi};

pub fn upstream_error(status: u16, body: &str) -> TransportError {
    TransportError::Status {
        status,
        body: body.to_string(),
    }
}

pub fn cliente(id: i64, name: &str, email: &str) -> ClienteDto {
    ClienteDto {
        id,
        name: name.into(),
        email: email.into(),
    }
}

pub fn pedido(id: i64, customer_id: i64, total: f64) -> PedidoDto {
    PedidoDto {
        id,
        customer_id,
        products: vec![ProductoDto {
            name: format!("Producto {}", id),
            price: total,
        }],
        total,
    }
}

pub fn proveedor(id: i64, name: &str, email: &str) -> ProveedorDto {
    ProveedorDto {
        id,
        name: name.into(),
        email: email.into(),
    }
}

pub fn factura(id: i64, provider_id: i64, total: f64) -> FacturaDto {
    FacturaDto {
        id,
        provider_id,
        orders: vec![PedidoReferenciaDto {
            order_id: id * 10,
            total,
        }],
        total_invoice: total,
    }
}

#[derive(Default)]
pub struct FakeCustomersApi {
    pub customers: Vec<ClienteDto>,
    pub orders: Vec<PedidoDto>,
    pub fail_customers: bool,
    pub fail_orders: bool,
    pub fail_writes: bool,
    pub created_customers: Mutex<Vec<ClienteInputDto>>,
    pub updated_customers: Mutex<Vec<(i64, ClienteInputDto)>>,
    pub deleted_customers: Mutex<Vec<i64>>,
    pub created_orders: Mutex<Vec<PedidoInputDto>>,
    pub order_lookups: Mutex<Vec<i64>>,
}

impl FakeCustomersApi {
    pub fn with(customers: Vec<ClienteDto>, orders: Vec<PedidoDto>) -> Self {
        Self {
            customers,
            orders,
            ..Default::default()
        }
    }

    fn write_result(&self) -> Result<(), TransportError> {
        if self.fail_writes {
            Err(upstream_error(500, "Internal Server Error"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CustomersApi for FakeCustomersApi {
    async fn get_customers(&self) -> Result<Vec<ClienteDto>, TransportError> {
        if self.fail_customers {
            return Err(upstream_error(500, "clientes no disponibles"));
        }
        Ok(self.customers.clone())
    }

    async fn get_customer(&self, id: i64) -> Result<ClienteDto, TransportError> {
        if self.fail_customers {
            return Err(upstream_error(500, "clientes no disponibles"));
        }
        self.customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| upstream_error(404, "Cliente no encontrado"))
    }

    async fn create_customer(&self, input: &ClienteInputDto) -> Result<(), TransportError> {
        self.write_result()?;
        self.created_customers.lock().unwrap().push(input.clone());
        Ok(())
    }

    async fn update_customer(
        &self,
        id: i64,
        input: &ClienteInputDto,
    ) -> Result<(), TransportError> {
        self.write_result()?;
        self.updated_customers.lock().unwrap().push((id, input.clone()));
        Ok(())
    }

    async fn delete_customer(&self, id: i64) -> Result<(), TransportError> {
        self.write_result()?;
        self.deleted_customers.lock().unwrap().push(id);
        Ok(())
    }

    async fn get_orders(&self) -> Result<Vec<PedidoDto>, TransportError> {
        if self.fail_orders {
            return Err(upstream_error(500, "pedidos no disponibles"));
        }
        Ok(self.orders.clone())
    }

    async fn get_order(&self, id: i64) -> Result<PedidoDto, TransportError> {
        self.order_lookups.lock().unwrap().push(id);
        if self.fail_orders {
            return Err(upstream_error(500, "pedidos no disponibles"));
        }
        self.orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or_else(|| upstream_error(404, "Pedido no encontrado"))
    }

    async fn get_orders_by_customer(
        &self,
        customer_id: i64,
    ) -> Result<Vec<PedidoDto>, TransportError> {
        let orders = self.get_orders().await?;
        Ok(orders
            .into_iter()
            .filter(|o| o.customer_id == customer_id)
            .collect())
    }

    async fn create_order(&self, input: &PedidoInputDto) -> Result<(), TransportError> {
        self.write_result()?;
        self.created_orders.lock().unwrap().push(input.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeProvidersApi {
    pub providers: Vec<ProveedorDto>,
    pub invoices: Vec<FacturaDto>,
    pub fail_providers: bool,
    pub fail_invoices: bool,
    pub fail_writes: bool,
    pub created_providers: Mutex<Vec<ProveedorInputDto>>,
    pub created_invoices: Mutex<Vec<FacturaInputDto>>,
}

impl FakeProvidersApi {
    pub fn with(providers: Vec<ProveedorDto>, invoices: Vec<FacturaDto>) -> Self {
        Self {
            providers,
            invoices,
            ..Default::default()
        }
    }
}

#[async_trait]
impl ProvidersApi for FakeProvidersApi {
    async fn get_providers(&self) -> Result<Vec<ProveedorDto>, TransportError> {
        if self.fail_providers {
            return Err(upstream_error(500, "proveedores no disponibles"));
        }
        Ok(self.providers.clone())
    }

    async fn get_provider(&self, id: i64) -> Result<ProveedorDto, TransportError> {
        self.get_providers()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| upstream_error(404, "Proveedor no encontrado"))
    }

    async fn create_provider(&self, input: &ProveedorInputDto) -> Result<(), TransportError> {
        if self.fail_writes {
            return Err(upstream_error(500, "Internal Server Error"));
        }
        self.created_providers.lock().unwrap().push(input.clone());
        Ok(())
    }

    async fn get_invoices(&self) -> Result<Vec<FacturaDto>, TransportError> {
        if self.fail_invoices {
            return Err(upstream_error(500, "facturas no disponibles"));
        }
        Ok(self.invoices.clone())
    }

    async fn get_invoice(&self, id: i64) -> Result<FacturaDto, TransportError> {
        self.get_invoices()
            .await?
            .into_iter()
            .find(|f| f.id == id)
            .ok_or_else(|| upstream_error(404, "Factura no encontrada"))
    }

    async fn create_invoice(&self, input: &FacturaInputDto) -> Result<(), TransportError> {
        if self.fail_writes {
            return Err(upstream_error(500, "Internal Server Error"));
        }
        self.created_invoices.lock().unwrap().push(input.clone());
        Ok(())
    }
}
