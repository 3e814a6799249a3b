use contracts::dashboards::d001_overview::{CardData, Revenue};
use contracts::domain::a004_invoice::aggregate::LatestInvoice;
use rand::Rng;

use crate::shared::format::{format_currency, to_cents};
use crate::shared::policy::{LATEST_INVOICES_LIMIT, PENDING_SHARE};
use crate::shared::upstream::{CustomersApi, ProvidersApi};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Карточки обзора.
///
/// Клиенты, счета и заказы запрашиваются параллельно. Без клиентов или счетов
/// все карточки нулевые; без заказов обнуляется только `number_of_orders`.
pub async fn fetch_card_data(
    customers_api: &dyn CustomersApi,
    providers_api: &dyn ProvidersApi,
) -> CardData {
    let (customers, invoices, orders) = tokio::join!(
        customers_api.get_customers(),
        providers_api.get_invoices(),
        customers_api.get_orders(),
    );

    let (customers, invoices) = match (customers, invoices) {
        (Ok(customers), Ok(invoices)) => (customers, invoices),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!("Error fetching card data: {}", e);
            return summary(0, 0, 0, 0.0);
        }
    };
    let number_of_orders = match orders {
        Ok(orders) => orders.len(),
        Err(e) => {
            tracing::warn!("Orders unavailable for card data: {}", e);
            0
        }
    };

    let paid: f64 = invoices.iter().map(|f| f.total_invoice).sum();
    summary(customers.len(), invoices.len(), number_of_orders, paid)
}

fn summary(customers: usize, invoices: usize, orders: usize, paid: f64) -> CardData {
    CardData {
        number_of_customers: customers,
        number_of_invoices: invoices,
        number_of_orders: orders,
        total_paid_invoices: format_currency(to_cents(paid)),
        total_pending_invoices: format_currency(to_cents(paid * PENDING_SHARE)),
    }
}

/// Выручка по месяцам.
///
/// Upstream выручку не считает: значения случайные (1000..6000),
/// постоянен только формат - двенадцать месяцев по порядку.
pub async fn fetch_revenue() -> Vec<Revenue> {
    let mut rng = rand::thread_rng();
    MONTHS
        .iter()
        .map(|month| Revenue {
            month: month.to_string(),
            revenue: rng.gen_range(1000..6000) as f64,
        })
        .collect()
}

/// Последние пять счетов, новые сверху; при ошибке upstream - пустой список
pub async fn fetch_latest_invoices(api: &dyn ProvidersApi) -> Vec<LatestInvoice> {
    let (invoices, providers) = match tokio::try_join!(api.get_invoices(), api.get_providers()) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Error fetching latest invoices: {}", e);
            return Vec::new();
        }
    };

    invoices
        .iter()
        .rev()
        .take(LATEST_INVOICES_LIMIT)
        .map(|invoice| invoice.to_latest_invoice(invoice.find_provider(&providers)))
        .collect()
}
