//! Фильтрация и пагинация в памяти: upstream не умеет ни того, ни другого

/// Фиксированный размер страницы списков
pub const ITEMS_PER_PAGE: usize = 6;

/// Регистронезависимый поиск подстроки хотя бы в одном из полей.
/// Пустой запрос совпадает со всем; пробелы в запросе значимы.
pub fn matches_query<S: AsRef<str>>(query: &str, fields: &[S]) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.as_ref().to_lowercase().contains(&needle))
}

/// Номер страницы из query-параметра; всё невалидное или < 1 даёт 1
pub fn parse_page(page: Option<&str>) -> usize {
    page.and_then(|p| p.trim().parse::<usize>().ok())
        .filter(|p| *p >= 1)
        .unwrap_or(1)
}

/// Записи `[(page-1)*6, page*6)` уже отфильтрованного списка
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(ITEMS_PER_PAGE).min(items.len());
    let end = start.saturating_add(ITEMS_PER_PAGE).min(items.len());
    &items[start..end]
}

/// Количество страниц: ceil(count / 6)
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(ITEMS_PER_PAGE)
}
