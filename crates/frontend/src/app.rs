use crate::domain::a001_category::ui::list::CategoryList;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <CategoryList />
        </main>
    }
}
