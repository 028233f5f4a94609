use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use contracts::domain::a001_category::aggregate::{
    Category, CategoryDto, SaveCategoryResponse, ValidationErrorResponse,
};

use crate::domain::a001_category::{self, service::CategoryError};

/// Структурированные ошибки валидации уходят клиенту как 422 с картой полей,
/// внутренние сбои — как 500 без деталей
fn error_response(operation: &str, err: CategoryError) -> Response {
    match err {
        CategoryError::Validation(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorResponse { errors }),
        )
            .into_response(),
        CategoryError::NotFound => StatusCode::NOT_FOUND.into_response(),
        CategoryError::Internal(e) => {
            tracing::error!("{operation} failed: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET /api/category
pub async fn list_all() -> Result<Json<Vec<Category>>, StatusCode> {
    match a001_category::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Category list failed: {e:#}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/category/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Category>, StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a001_category::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Category get failed: {e:#}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/category
pub async fn create(Json(dto): Json<CategoryDto>) -> Response {
    match a001_category::service::create(dto).await {
        Ok(category) => Json(SaveCategoryResponse { category }).into_response(),
        Err(e) => error_response("Category create", e),
    }
}

/// PUT /api/category/:id
pub async fn update(Path(id): Path<String>, Json(dto): Json<CategoryDto>) -> Response {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };
    match a001_category::service::update(uuid, dto).await {
        Ok(category) => Json(SaveCategoryResponse { category }).into_response(),
        Err(e) => error_response("Category update", e),
    }
}

/// DELETE /api/category/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(StatusCode::BAD_REQUEST),
    };
    match a001_category::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Category delete failed: {e:#}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/category/testdata
pub async fn insert_test_data() -> StatusCode {
    match a001_category::service::insert_test_data().await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::error!("Category test data failed: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
