use super::model::{self, SaveOutcome};
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

/// ViewModel for Category details form
#[derive(Clone)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDto>,
    pub errors: RwSignal<FieldErrors>,
    pub processing: RwSignal<bool>,
    /// Сбой транспорта, не привязанный к полю
    pub error: RwSignal<Option<String>>,
}

impl CategoryDetailsViewModel {
    /// Создание: пустой шаблон. Редактирование: копия полей исходной записи.
    /// Ошибки предыдущего открытия не переживают.
    pub fn new(source: Option<&Category>) -> Self {
        let form = match source {
            Some(category) => CategoryDto::from(category),
            None => CategoryDto::default(),
        };
        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(FieldErrors::new()),
            processing: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().id.is_some()
    }

    /// Save form data to server
    ///
    /// Single-flight: пока запрос в полёте, повторный вызов игнорируется,
    /// а кнопка отправки в view заблокирована через `processing`.
    pub fn save_command(&self, on_saved: Callback<Category>) {
        if self.processing.get() {
            return;
        }

        let current = self.form.get();

        // Клиентская валидация: при ошибках запрос не отправляется
        let validation = current.validate();
        if !validation.is_empty() {
            self.errors.set(validation);
            return;
        }

        self.errors.set(FieldErrors::new());
        self.error.set(None);
        self.processing.set(true);

        let form = self.form;
        let errors = self.errors;
        let error = self.error;
        let processing = self.processing;
        wasm_bindgen_futures::spawn_local(async move {
            match model::save_category(&current).await {
                Ok(SaveOutcome::Saved(category)) => {
                    form.set(CategoryDto::default());
                    processing.set(false);
                    on_saved.run(category);
                }
                Ok(SaveOutcome::Invalid(server_errors)) => {
                    // Форма остаётся открытой с серверной картой ошибок
                    errors.set(server_errors);
                    processing.set(false);
                }
                Err(e) => {
                    log::error!("Не удалось сохранить категорию: {}", e);
                    error.set(Some(
                        "Не удалось сохранить категорию. Попробуйте ещё раз.".to_string(),
                    ));
                    processing.set(false);
                }
            }
        });
    }
}
