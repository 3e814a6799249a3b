use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ошибки валидации формы: имя поля → список сообщений
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить сообщение к полю (поле может накопить несколько сообщений)
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(|v| v.as_slice())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }
}

/// Состояние формы, которое действие возвращает UI при неудаче
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionState {
    #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
    pub message: String,
}

impl ActionState {
    /// Ошибка без привязки к полям (сбой upstream, ссылка на удалённый объект)
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: FieldErrors::default(),
            message: message.into(),
        }
    }

    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors,
            message: message.into(),
        }
    }

    pub fn has_field_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
