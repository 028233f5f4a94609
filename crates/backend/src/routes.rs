use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // BUSINESS ROUTES
        // ========================================
        // A001 Category handlers
        .route(
            "/api/category",
            get(handlers::a001_category::list_all).post(handlers::a001_category::create),
        )
        .route(
            "/api/category/:id",
            get(handlers::a001_category::get_by_id)
                .put(handlers::a001_category::update)
                .delete(handlers::a001_category::delete),
        )
        .route(
            "/api/category/testdata",
            post(handlers::a001_category::insert_test_data),
        )
        // Изменяющие запросы проходят через anti-forgery проверку
        .layer(middleware::from_fn(system::antiforgery::require_csrf))
}
