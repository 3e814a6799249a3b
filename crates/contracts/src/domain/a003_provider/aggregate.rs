use serde::{Deserialize, Serialize};

use crate::shared::contact::ContactForm;

/// Поставщик для выпадающих списков (форма счёта)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderField {
    pub id: String,
    pub name: String,
}

/// Форма создания поставщика
pub type ProviderForm = ContactForm;
