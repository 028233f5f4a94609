use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::FieldErrors;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор категории товаров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория товаров
///
/// Связь "категория -> товары" (один ко многим) живёт на стороне товаров
/// и этим агрегатом не хранится.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseAggregate<CategoryId>,

    // Специфичные поля агрегата

    /// Цвет для отображения в списках, формат "#RRGGBB"
    pub color: Option<String>,

    /// Категория активна
    pub active: bool,
}

impl Category {
    /// Создать новую категорию для вставки в БД
    pub fn new_for_insert(
        name: String,
        description: Option<String>,
        color: Option<String>,
        active: bool,
    ) -> Self {
        let mut base = BaseAggregate::new(CategoryId::new_v4(), name);
        base.set_description(description);

        Self {
            base,
            color,
            active,
        }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить timestamp
    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    /// Обновить данные из DTO. ID не изменяется.
    pub fn update(&mut self, dto: &CategoryDto) {
        self.base.name = dto.name.clone();
        self.base.description = dto.description.clone();
        self.color = dto.color.clone();
        self.active = dto.active;
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.touch_updated();
        self.base.metadata.increment_version();
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn description(&self) -> Option<&str> {
        self.base.description.as_deref()
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Категория"
    }

    fn list_name() -> &'static str {
        "Категории"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO (черновик) для создания/обновления категории
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub active: bool,
}

impl Default for CategoryDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: None,
            color: None,
            active: true,
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(category: &Category) -> Self {
        Self {
            id: Some(category.base.id.as_string()),
            name: category.base.name.clone(),
            description: category.base.description.clone(),
            color: category.color.clone(),
            active: category.active,
        }
    }
}

impl CategoryDto {
    /// Валидация черновика.
    ///
    /// Чистая функция: повторный вызов на том же черновике даёт то же
    /// отображение ошибок. Пустой результат — черновик валиден.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("name", "Название обязательно для заполнения");
        }

        if let Some(color) = self.color.as_deref() {
            if !color.is_empty() && !is_hex_color(color) {
                errors.insert(
                    "color",
                    "Цвет должен быть в шестнадцатеричном формате (#RRGGBB)",
                );
            }
        }

        errors
    }
}

/// Проверка формата "#RRGGBB", регистр цифр не важен
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

// ============================================================================
// API Responses
// ============================================================================

/// Ответ на успешное создание/обновление категории
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveCategoryResponse {
    pub category: Category,
}

/// Тело ответа 422: ошибки валидации по полям
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: FieldErrors,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, color: Option<&str>) -> CategoryDto {
        CategoryDto {
            name: name.to_string(),
            color: color.map(str::to_string),
            ..CategoryDto::default()
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let errors = draft("", None).validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("name").is_some());
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        let errors = draft("   \t ", Some("#FF5733")).validate();
        assert!(errors.get("name").is_some());
        assert!(errors.get("color").is_none());
    }

    #[test]
    fn malformed_colors_are_rejected() {
        for bad in ["FF5733", "#FF573", "#FF57333", "#GG5733", "красный", "#"] {
            let errors = draft("Электроника", Some(bad)).validate();
            assert!(errors.get("color").is_some(), "ожидалась ошибка для {bad:?}");
        }
    }

    #[test]
    fn wellformed_colors_are_accepted() {
        for good in ["#FF5733", "#abc123", "#AbC123", "#000000"] {
            let errors = draft("Электроника", Some(good)).validate();
            assert!(errors.is_empty(), "не ожидалось ошибок для {good:?}");
        }
    }

    #[test]
    fn absent_or_empty_color_is_accepted() {
        assert!(draft("Электроника", None).validate().is_empty());
        assert!(draft("Электроника", Some("")).validate().is_empty());
    }

    #[test]
    fn validation_is_idempotent() {
        let dto = draft(" ", Some("#xyz"));
        assert_eq!(dto.validate(), dto.validate());
    }

    #[test]
    fn default_draft_is_active() {
        let dto = CategoryDto::default();
        assert!(dto.active);
        assert!(dto.id.is_none());
        assert!(dto.description.is_none());
    }

    #[test]
    fn update_replaces_fields_but_keeps_id() {
        let mut category =
            Category::new_for_insert("Электроника".into(), None, Some("#FF5733".into()), true);
        let id = category.base.id;

        let mut dto = CategoryDto::from(&category);
        dto.name = "Бытовая техника".into();
        dto.active = false;
        category.update(&dto);

        assert_eq!(category.base.id, id);
        assert_eq!(category.base.name, "Бытовая техника");
        assert!(!category.active);
    }

    #[test]
    fn aggregate_root_metadata() {
        let category = Category::new_for_insert("Электроника".into(), None, None, true);
        assert_eq!(Category::aggregate_index(), "a001");
        assert_eq!(Category::collection_name(), "category");
        assert_eq!(Category::element_name(), "Категория");
        assert_eq!(Category::list_name(), "Категории");
        assert_eq!(category.name(), "Электроника");
        assert!(category.description().is_none());
    }

    #[test]
    fn id_survives_string_roundtrip() {
        let id = CategoryId::new_v4();
        assert_eq!(CategoryId::from_string(&id.as_string()), Ok(id));
        assert!(CategoryId::from_string("не uuid").is_err());
    }

    #[test]
    fn dto_roundtrip_from_aggregate() {
        let category = Category::new_for_insert(
            "Одежда".into(),
            Some("Сезонные коллекции".into()),
            None,
            false,
        );
        let dto = CategoryDto::from(&category);
        assert_eq!(dto.id.as_deref(), Some(category.to_string_id().as_str()));
        assert_eq!(dto.name, "Одежда");
        assert_eq!(dto.description.as_deref(), Some("Сезонные коллекции"));
        assert!(dto.color.is_none());
        assert!(!dto.active);
    }
}
