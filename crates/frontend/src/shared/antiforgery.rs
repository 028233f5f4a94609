//! Anti-forgery токен хост-страницы

/// Прочитать токен из `<meta name="csrf-token">` хост-страницы.
///
/// Ядро токен не генерирует — только прикладывает его заголовком
/// `X-CSRF-Token` к каждому изменяющему запросу.
pub fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(r#"meta[name="csrf-token"]"#)
        .ok()??;
    meta.get_attribute("content").filter(|t| !t.is_empty())
}
