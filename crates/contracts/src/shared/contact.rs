use serde::{Deserialize, Serialize};

use super::action_state::FieldErrors;
use super::validation::{is_valid_email, non_empty};

/// Форма «имя + email», общая для клиента и поставщика
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(rename = "nombre", default)]
    pub name: Option<String>,
    #[serde(rename = "correo", default)]
    pub email: Option<String>,
}

/// Проверенные данные формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
        }
    }

    pub fn validate(&self) -> Result<ContactInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = non_empty(self.name.as_deref());
        if name.is_none() {
            errors.add("nombre", "El nombre es obligatorio");
        }

        let email = self.email.as_deref().map(str::trim).filter(|e| is_valid_email(e));
        if email.is_none() {
            errors.add("correo", "El correo debe ser válido");
        }

        match (name, email) {
            (Some(name), Some(email)) => Ok(ContactInput {
                name: name.to_string(),
                email: email.to_string(),
            }),
            _ => Err(errors),
        }
    }
}
