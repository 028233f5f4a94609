use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};

use crate::shared::config;

/// Middleware anti-forgery защиты.
///
/// Каждый изменяющий запрос (POST/PUT/DELETE) обязан нести заголовок
/// `X-CSRF-Token` с токеном, который хост-страница встраивает в разметку.
/// Сервер токен не генерирует — только сверяет со значением из конфигурации.
pub async fn require_csrf(req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    // Читающие запросы токена не требуют
    if matches!(req.method().as_str(), "GET" | "HEAD" | "OPTIONS") {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get("X-CSRF-Token")
        .and_then(|h| h.to_str().ok())
        .ok_or(StatusCode::FORBIDDEN)?;

    if token != config::get_config().security.csrf_token {
        return Err(StatusCode::FORBIDDEN);
    }

    Ok(next.run(req).await)
}
