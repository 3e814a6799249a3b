//! Клиенты двух upstream-сервисов: клиенты/заказы и поставщики/счета

pub mod customers_api;
pub mod dto;
pub mod error;
pub mod providers_api;
pub mod transport;

#[cfg(test)]
pub mod testing;

pub use customers_api::{CustomersApi, CustomersApiClient};
pub use error::TransportError;
pub use providers_api::{ProvidersApi, ProvidersApiClient};
