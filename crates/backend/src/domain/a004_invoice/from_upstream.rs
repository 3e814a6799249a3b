use contracts::domain::a004_invoice::aggregate::{
    InvoiceForm, InvoiceStatus, InvoicesTableRow, LatestInvoice,
};

use crate::shared::format::{format_currency, to_cents};
use crate::shared::policy::{placeholder_date, NO_IMAGE, UNKNOWN_PROVIDER_NAME};
use crate::shared::upstream::dto::{FacturaDto, PedidoDto, PedidoReferenciaDto, ProveedorDto};

impl FacturaDto {
    /// Поставщик счёта из уже загруженного списка
    pub fn find_provider<'a>(&self, providers: &'a [ProveedorDto]) -> Option<&'a ProveedorDto> {
        providers.iter().find(|p| p.id == self.provider_id)
    }

    /// Поля для поиска: имя и email поставщика, сумма и id счёта
    pub fn search_fields(&self, provider: Option<&ProveedorDto>) -> Vec<String> {
        let mut fields = Vec::with_capacity(4);
        if let Some(provider) = provider {
            fields.push(provider.name.clone());
            fields.push(provider.email.clone());
        }
        fields.push(self.total_invoice.to_string());
        fields.push(self.id.to_string());
        fields
    }

    pub fn to_table_row(&self, provider: Option<&ProveedorDto>) -> InvoicesTableRow {
        let amount = to_cents(self.total_invoice);
        InvoicesTableRow {
            id: self.id.to_string(),
            provider_id: self.provider_id.to_string(),
            name: provider
                .map(|p| p.name.clone())
                .unwrap_or_else(|| UNKNOWN_PROVIDER_NAME.to_string()),
            email: provider.map(|p| p.email.clone()).unwrap_or_default(),
            image_url: NO_IMAGE.to_string(),
            date: placeholder_date(),
            amount,
            formatted_amount: format_currency(amount),
            status: InvoiceStatus::Pending,
        }
    }

    /// Форма редактирования: сумма остаётся в обычных единицах
    pub fn to_invoice_form(&self) -> InvoiceForm {
        InvoiceForm {
            id: self.id.to_string(),
            provider_id: self.provider_id.to_string(),
            amount: self.total_invoice,
            status: InvoiceStatus::Pending,
        }
    }

    pub fn to_latest_invoice(&self, provider: Option<&ProveedorDto>) -> LatestInvoice {
        LatestInvoice {
            id: self.id.to_string(),
            name: provider
                .map(|p| p.name.clone())
                .unwrap_or_else(|| UNKNOWN_PROVIDER_NAME.to_string()),
            image_url: NO_IMAGE.to_string(),
            email: provider.map(|p| p.email.clone()).unwrap_or_default(),
            amount: format_currency(to_cents(self.total_invoice)),
        }
    }
}

impl PedidoDto {
    /// Снимок суммы заказа для счёта
    pub fn to_order_reference(&self) -> PedidoReferenciaDto {
        PedidoReferenciaDto {
            order_id: self.id,
            total: self.total,
        }
    }
}
