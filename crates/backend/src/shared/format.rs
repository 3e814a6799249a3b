/// Переводит сумму в обычных единицах (например, 25.5) в целые центы.
///
/// Вызывается ровно один раз на значение, прямо перед форматированием.
pub fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Форматирует сумму в центах как валюту en-US
///
/// # Примеры
/// ```ignore
/// assert_eq!(format_currency(100_000), "$1,000.00");
/// assert_eq!(format_currency(-550), "-$5.50");
/// ```
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(&(abs / 100).to_string(), ','),
        abs % 100
    )
}

/// Форматирует число с разделителями тысяч (точками), для логов
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string(), '.')
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
