use super::repository;
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::shared::validation::FieldErrors;
use uuid::Uuid;

/// Ошибка операций над категориями
#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    /// Черновик не прошёл валидацию; карта "поле -> сообщение"
    /// уходит клиенту как есть (HTTP 422)
    #[error("ошибка валидации")]
    Validation(FieldErrors),
    #[error("категория не найдена")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Пустые строки в необязательных полях приводим к NULL
fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Создание новой категории
pub async fn create(dto: CategoryDto) -> Result<Category, CategoryError> {
    // Валидация
    let errors = dto.validate();
    if !errors.is_empty() {
        return Err(CategoryError::Validation(errors));
    }

    let name = dto.name.trim().to_string();

    // Уникальность названия среди неудалённых категорий
    if repository::get_by_name(&name).await?.is_some() {
        return Err(CategoryError::Validation(FieldErrors::single(
            "name",
            "Категория с таким названием уже существует",
        )));
    }

    let mut aggregate = Category::new_for_insert(
        name,
        normalize_optional(dto.description.as_deref()),
        normalize_optional(dto.color.as_deref()),
        dto.active,
    );

    // Before write
    aggregate.before_write();

    // Сохранение через repository
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

/// Обновление существующей категории. Все поля, кроме ID, заменяются.
pub async fn update(id: Uuid, dto: CategoryDto) -> Result<Category, CategoryError> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(CategoryError::NotFound)?;

    // Валидация
    let errors = dto.validate();
    if !errors.is_empty() {
        return Err(CategoryError::Validation(errors));
    }

    let name = dto.name.trim().to_string();

    // Уникальность, исключая саму запись
    if let Some(existing) = repository::get_by_name(&name).await? {
        if existing.base.id.value() != id {
            return Err(CategoryError::Validation(FieldErrors::single(
                "name",
                "Категория с таким названием уже существует",
            )));
        }
    }

    let normalized = CategoryDto {
        name,
        description: normalize_optional(dto.description.as_deref()),
        color: normalize_optional(dto.color.as_deref()),
        ..dto
    };
    aggregate.update(&normalized);

    // Before write
    aggregate.before_write();

    // Сохранение
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Мягкое удаление категории
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

/// Получение категории по ID
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Category>> {
    repository::get_by_id(id).await
}

/// Получение списка всех категорий
pub async fn list_all() -> anyhow::Result<Vec<Category>> {
    repository::list_all().await
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> Result<(), CategoryError> {
    let data = vec![
        CategoryDto {
            name: "Электроника".into(),
            description: Some("Техника, гаджеты и аксессуары".into()),
            color: Some("#2563EB".into()),
            ..CategoryDto::default()
        },
        CategoryDto {
            name: "Одежда".into(),
            description: Some("Мужская и женская одежда".into()),
            color: Some("#DB2777".into()),
            ..CategoryDto::default()
        },
        CategoryDto {
            name: "Дом и сад".into(),
            ..CategoryDto::default()
        },
        CategoryDto {
            name: "Архив".into(),
            description: Some("Снятые с продажи товары".into()),
            active: false,
            ..CategoryDto::default()
        },
    ];

    for dto in data {
        match create(dto).await {
            // Повторный запуск не дублирует записи: конфликт названия пропускаем
            Ok(_) | Err(CategoryError::Validation(_)) => {}
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
