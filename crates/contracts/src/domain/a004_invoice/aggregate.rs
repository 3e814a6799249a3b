use serde::{Deserialize, Serialize};

use crate::shared::action_state::FieldErrors;
use crate::shared::form_value::text_or_number;
use crate::shared::validation::{non_empty, parse_id, parse_positive};

/// Статус оплаты счёта.
///
/// Upstream статус не хранит, поэтому все счета отображаются как `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            _ => None,
        }
    }
}

/// Строка таблицы счетов.
///
/// `amount` в центах, `formatted_amount` - та же сумма, отформатированная как валюта.
/// Дата и картинка - заглушки: upstream их пока не отдаёт.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoicesTableRow {
    pub id: String,
    pub provider_id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub date: String,
    pub amount: i64,
    pub formatted_amount: String,
    pub status: InvoiceStatus,
}

/// Страница списка счетов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoicesPage {
    pub invoices: Vec<InvoicesTableRow>,
    pub total_pages: usize,
    /// `false` - UI показывает подсказку, что сначала нужно завести поставщика
    pub has_providers: bool,
}

/// Счёт для формы редактирования (сумма в обычных единицах, не в центах)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceForm {
    pub id: String,
    pub provider_id: String,
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Последние счета для обзорной панели
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestInvoice {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: String,
}

/// Форма создания счёта: поставщик и один заказ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateInvoiceForm {
    #[serde(rename = "proveedorId", default, deserialize_with = "text_or_number")]
    pub provider_id: Option<String>,
    #[serde(rename = "pedidoId", default, deserialize_with = "text_or_number")]
    pub order_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateInvoiceInput {
    pub provider_id: i64,
    pub order_id: i64,
}

impl CreateInvoiceForm {
    pub fn new(provider_id: &str, order_id: &str) -> Self {
        Self {
            provider_id: Some(provider_id.to_string()),
            order_id: Some(order_id.to_string()),
        }
    }

    pub fn validate(&self) -> Result<CreateInvoiceInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let provider_id = non_empty(self.provider_id.as_deref()).and_then(parse_id);
        if provider_id.is_none() {
            errors.add("proveedorId", "Por favor seleccione un proveedor.");
        }
        let order_id = non_empty(self.order_id.as_deref()).and_then(parse_id);
        if order_id.is_none() {
            errors.add("pedidoId", "Por favor seleccione un pedido.");
        }

        match (provider_id, order_id) {
            (Some(provider_id), Some(order_id)) => Ok(CreateInvoiceInput {
                provider_id,
                order_id,
            }),
            _ => Err(errors),
        }
    }
}

/// Форма редактирования счёта
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateInvoiceForm {
    #[serde(rename = "proveedorId", default, deserialize_with = "text_or_number")]
    pub provider_id: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub amount: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateInvoiceInput {
    pub provider_id: i64,
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl UpdateInvoiceForm {
    pub fn validate(&self) -> Result<UpdateInvoiceInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let provider_id = non_empty(self.provider_id.as_deref()).and_then(parse_id);
        if provider_id.is_none() {
            errors.add("proveedorId", "Please select a provider.");
        }
        let amount = self.amount.as_deref().and_then(parse_positive);
        if amount.is_none() {
            errors.add("amount", "Please enter an amount greater than $0.");
        }
        let status = self.status.as_deref().and_then(InvoiceStatus::parse);
        if status.is_none() {
            errors.add("status", "Please select an invoice status.");
        }

        match (provider_id, amount, status) {
            (Some(provider_id), Some(amount), Some(status)) => Ok(UpdateInvoiceInput {
                provider_id,
                amount,
                status,
            }),
            _ => Err(errors),
        }
    }
}
