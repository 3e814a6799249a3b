use serde::{Deserialize, Serialize};

use crate::shared::contact::ContactForm;

/// Клиент для выпадающих списков (форма заказа)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerField {
    pub id: String,
    pub name: String,
}

/// Клиент для формы редактирования
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Строка таблицы клиентов со статистикой по заказам.
///
/// Суммы уже переведены в центы и отформатированы как валюта.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomersTableRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: usize,
    pub total_pending: String,
    pub total_paid: String,
}

/// Форма создания/редактирования клиента
pub type CustomerForm = ContactForm;
