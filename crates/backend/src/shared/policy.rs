//! Временные правила, пока upstream не отдаёт реальные данные об оплате.
//!
//! Значения условные: интерфейс (оплачено / ожидает оплаты) важнее самих долей.

use chrono::Local;

/// Доля суммы заказов клиента, считающаяся оплаченной
pub const PAID_SHARE: f64 = 0.7;

/// Доля, считающаяся ожидающей оплаты (для карточек - от суммы всех счетов)
pub const PENDING_SHARE: f64 = 0.3;

/// Картинок у клиентов и поставщиков нет
pub const NO_IMAGE: &str = "";

/// Сколько счетов показывает блок «последние счета»
pub const LATEST_INVOICES_LIMIT: usize = 5;

pub const UNKNOWN_PROVIDER_NAME: &str = "Desconocido";

/// Upstream не хранит дату счёта, показываем сегодняшнюю
pub fn placeholder_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
