//! Примитивы валидации полей форм

/// Обрезать пробелы; пустая строка считается отсутствующим значением
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Упрощённая проверка email: одна `@`, непустая локальная часть,
/// домен с точкой, без пробелов
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !host.starts_with('.') && tld.len() >= 2,
        None => false,
    }
}

/// Числовое значение из поля формы; `None`, если это не конечное число
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Строго положительное число из поля формы
pub fn parse_positive(value: &str) -> Option<f64> {
    parse_number(value).filter(|v| *v > 0.0)
}

/// Идентификатор upstream-сервиса (целое число) из строкового поля
pub fn parse_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}
