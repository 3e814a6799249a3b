use contracts::domain::a001_customer::aggregate::{Customer, CustomerField, CustomersTableRow};
use contracts::shared::contact::ContactInput;

use crate::shared::format::{format_currency, to_cents};
use crate::shared::policy::{NO_IMAGE, PAID_SHARE, PENDING_SHARE};
use crate::shared::upstream::dto::{ClienteDto, ClienteInputDto, PedidoDto};

impl ClienteDto {
    pub fn to_customer_field(&self) -> CustomerField {
        CustomerField {
            id: self.id.to_string(),
            name: self.name.clone(),
        }
    }

    pub fn to_customer(&self) -> Customer {
        Customer {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    /// Строка таблицы: заказы клиента выбираются из `orders` по `customer_id`
    pub fn to_table_row(&self, orders: &[PedidoDto]) -> CustomersTableRow {
        let own: Vec<&PedidoDto> = orders.iter().filter(|o| o.customer_id == self.id).collect();
        let total: f64 = own.iter().map(|o| o.total).sum();

        CustomersTableRow {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            image_url: NO_IMAGE.to_string(),
            total_invoices: own.len(),
            total_pending: format_currency(to_cents(total * PENDING_SHARE)),
            total_paid: format_currency(to_cents(total * PAID_SHARE)),
        }
    }

    pub fn search_fields(&self) -> [&str; 2] {
        [&self.name, &self.email]
    }
}

impl From<ContactInput> for ClienteInputDto {
    fn from(input: ContactInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
        }
    }
}
