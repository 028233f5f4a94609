use contracts::domain::a001_category::aggregate::{
    Category, CategoryDto, SaveCategoryResponse, ValidationErrorResponse,
};
use contracts::shared::validation::FieldErrors;
use gloo_net::http::Request;

use crate::shared::antiforgery::csrf_token;
use crate::shared::api_utils::api_base;

/// Исход сохранения черновика.
///
/// Успех и структурированные ошибки валидации сервера — разные варианты
/// одного значения; транспортный сбой идёт отдельно как `Err(String)`.
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    Saved(Category),
    Invalid(FieldErrors),
}

/// Сохранить черновик: POST для нового (без ID), PUT по ID для существующего.
///
/// Ровно один запрос — ровно один ответ; отмена не поддерживается.
pub async fn save_category(dto: &CategoryDto) -> Result<SaveOutcome, String> {
    let token = csrf_token().unwrap_or_default();

    let builder = match dto.id.as_deref() {
        Some(id) => Request::put(&format!("{}/api/category/{}", api_base(), id)),
        None => Request::post(&format!("{}/api/category", api_base())),
    };

    let response = builder
        .header("Accept", "application/json")
        .header("X-CSRF-Token", &token)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    // 422: сервер вернул карту ошибок по полям — показываем как клиентские
    if response.status() == 422 {
        let body: ValidationErrorResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse validation errors: {}", e))?;
        return Ok(SaveOutcome::Invalid(body.errors));
    }

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let body: SaveCategoryResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(SaveOutcome::Saved(body.category))
}
