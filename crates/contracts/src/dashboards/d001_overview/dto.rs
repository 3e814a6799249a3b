use serde::{Deserialize, Serialize};

/// Карточки обзорной панели
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardData {
    pub number_of_customers: usize,
    pub number_of_invoices: usize,
    pub number_of_orders: usize,
    /// Сумма всех счетов, отформатированная как валюта
    pub total_paid_invoices: String,
    /// Условная «задолженность»: фиксированные 30% от `total_paid_invoices`
    pub total_pending_invoices: String,
}

/// Выручка за месяц (для графика)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revenue {
    pub month: String,
    pub revenue: f64,
}
