//! DTO upstream-сервисов в их wire-формате (испанские имена полей)

use serde::{Deserialize, Deserializer, Serialize};

/// Суммы, которые upstream ещё не посчитал, приходят как `null`
fn zero_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Клиент из сервиса клиентов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClienteDto {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClienteInputDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductoDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
}

/// Заказ; `total` считает upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoDto {
    pub id: i64,
    #[serde(rename = "clienteId")]
    pub customer_id: i64,
    #[serde(rename = "productos", default)]
    pub products: Vec<ProductoDto>,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoInputDto {
    #[serde(rename = "clienteId")]
    pub customer_id: i64,
    #[serde(rename = "productos")]
    pub products: Vec<ProductoDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProveedorDto {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProveedorInputDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
}

/// Снимок суммы заказа на момент выставления счёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoReferenciaDto {
    #[serde(rename = "pedidoId")]
    pub order_id: i64,
    #[serde(default, deserialize_with = "zero_if_null")]
    pub total: f64,
}

/// Счёт; `total_invoice` считает upstream по `orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacturaDto {
    pub id: i64,
    #[serde(rename = "proveedorId")]
    pub provider_id: i64,
    #[serde(rename = "pedidos", default)]
    pub orders: Vec<PedidoReferenciaDto>,
    #[serde(rename = "totalFactura", default, deserialize_with = "zero_if_null")]
    pub total_invoice: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacturaInputDto {
    #[serde(rename = "proveedorId")]
    pub provider_id: i64,
    #[serde(rename = "pedidos")]
    pub orders: Vec<PedidoReferenciaDto>,
}
