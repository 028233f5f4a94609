use contracts::domain::a001_category::aggregate::{Category, CategoryId};

/// Локальная проекция списка категорий.
///
/// Владеет порядком и содержимым списка на клиенте; истина остаётся за
/// сервером, и мутации применяются только по подтверждённым им результатам.
/// Порядок — как отдал сервер, с новыми записями в начале; пересортировки
/// на клиенте нет. От рендеринга не зависит.
#[derive(Clone, Debug, Default)]
pub struct CategoryListState {
    items: Vec<Category>,
}

impl CategoryListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Полная замена списка свежими данными сервера
    pub fn initialize(&mut self, items: Vec<Category>) {
        self.items = items;
    }

    /// Подтверждённое создание: запись добавляется в начало списка.
    /// Дедупликации нет — вызывающий гарантирует, что запись новая.
    pub fn on_created(&mut self, category: Category) {
        self.items.insert(0, category);
    }

    /// Подтверждённое обновление: замена записи с совпадающим ID.
    /// Если записи нет — список не меняется.
    pub fn on_updated(&mut self, category: Category) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.base.id == category.base.id)
        {
            *existing = category;
        }
    }

    /// Подтверждённое удаление: запись убирается из списка.
    /// Вызывается только после успешного ответа сервера.
    pub fn on_deleted(&mut self, id: CategoryId) {
        self.items.retain(|item| item.base.id != id);
    }

    pub fn items(&self) -> &[Category] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> Category {
        Category::new_for_insert(name.to_string(), None, None, true)
    }

    fn names(state: &CategoryListState) -> Vec<&str> {
        state.items().iter().map(|c| c.base.name.as_str()).collect()
    }

    #[test]
    fn initialize_replaces_whole_list() {
        let mut state = CategoryListState::new();
        state.initialize(vec![category("Электроника"), category("Одежда")]);
        assert_eq!(names(&state), vec!["Электроника", "Одежда"]);

        state.initialize(vec![category("Дом и сад")]);
        assert_eq!(names(&state), vec!["Дом и сад"]);
    }

    #[test]
    fn created_is_prepended() {
        let mut state = CategoryListState::new();
        state.initialize(vec![category("Одежда")]);

        state.on_created(category("Электроника"));

        assert_eq!(state.len(), 2);
        assert_eq!(names(&state), vec!["Электроника", "Одежда"]);
    }

    #[test]
    fn updated_replaces_exactly_one_entry() {
        let mut state = CategoryListState::new();
        let first = category("Электроника");
        let second = category("Одежда");
        let id = second.base.id;
        state.initialize(vec![first.clone(), second.clone()]);

        let mut renamed = second;
        renamed.base.name = "Бытовая техника".into();
        state.on_updated(renamed);

        assert_eq!(state.len(), 2);
        assert_eq!(names(&state), vec!["Электроника", "Бытовая техника"]);
        // остальные записи не тронуты, позиция сохранена
        assert_eq!(state.items()[0].base.id, first.base.id);
        assert_eq!(state.items()[1].base.id, id);
    }

    #[test]
    fn updated_with_unknown_id_is_a_noop() {
        let mut state = CategoryListState::new();
        state.initialize(vec![category("Электроника"), category("Одежда")]);
        let before = names(&state)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        state.on_updated(category("Призрак"));

        assert_eq!(state.len(), 2);
        assert_eq!(names(&state), before);
    }

    #[test]
    fn deleted_removes_matching_entry() {
        let mut state = CategoryListState::new();
        let doomed = category("Архив");
        let id = doomed.base.id;
        state.initialize(vec![category("Электроника"), doomed]);

        state.on_deleted(id);

        assert_eq!(state.len(), 1);
        assert_eq!(names(&state), vec!["Электроника"]);
    }

    #[test]
    fn deleted_with_unknown_id_is_a_noop() {
        let mut state = CategoryListState::new();
        state.initialize(vec![category("Электроника")]);

        state.on_deleted(CategoryId::new_v4());

        assert_eq!(state.len(), 1);
    }
}
