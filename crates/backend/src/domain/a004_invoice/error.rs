use thiserror::Error;

use crate::shared::upstream::TransportError;

/// Ошибка списка счетов. В отличие от остальных запросов, список счетов
/// не деградирует до пустого результата, а сообщает о сбое.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch invoices.")]
    Invoices(#[source] TransportError),

    #[error("Failed to fetch total number of invoices.")]
    InvoicePages(#[source] TransportError),
}
