//! Ошибки валидации, адресуемые по полям формы

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Отображение "поле -> сообщение об ошибке".
///
/// Один и тот же контракт используется для клиентской валидации черновика
/// и для структурированных ошибок, которые возвращает сервер (HTTP 422).
/// Пустое отображение означает, что черновик валиден.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Единственная ошибка по одному полю
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Добавить ошибку по полю. Повторная запись по тому же полю затирает предыдущую.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Сообщение об ошибке для указанного поля
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_flat_map() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "обязательно");
        errors.insert("color", "неверный формат");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"color":"неверный формат","name":"обязательно"}"#);

        let back: FieldErrors = serde_json::from_str(&json).unwrap();
        assert_eq!(back, errors);
    }

    #[test]
    fn insert_overwrites_same_field() {
        let mut errors = FieldErrors::new();
        errors.insert("name", "первое");
        errors.insert("name", "второе");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("второе"));
    }
}
