use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Базовый агрегат с обязательными полями для всех агрегатов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Уникальный идентификатор записи
    pub id: Id,
    /// Название записи (обязательное)
    pub name: String,
    /// Описание (произвольный текст, необязательное)
    pub description: Option<String>,
    /// Метаданные жизненного цикла
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    /// Создать новый агрегат
    pub fn new(id: Id, name: String) -> Self {
        Self {
            id,
            name,
            description: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Создать агрегат с существующими метаданными (для загрузки из БД)
    pub fn with_metadata(
        id: Id,
        name: String,
        description: Option<String>,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            id,
            name,
            description,
            metadata,
        }
    }

    /// Обновить timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }

    /// Установить описание
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }
}
