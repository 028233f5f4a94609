pub mod state;

use self::state::CategoryListState;
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::antiforgery::csrf_token;
use crate::shared::api_utils::api_base;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::common::{AggregateId, AggregateRoot};
use leptos::prelude::*;

/// Что открыто в модальном окне деталей
#[derive(Clone)]
enum FormTarget {
    Create,
    Edit(Category),
}

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let state = RwSignal::new(CategoryListState::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let form_target = RwSignal::new(None::<FormTarget>);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_categories().await {
                Ok(v) => {
                    state.update(|s| s.initialize(v));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let handle_delete = move |category: Category| {
        // Явное подтверждение до отправки запроса; отказ — запрос не уходит
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(&format!(
                    "Удалить категорию \"{}\"?",
                    category.base.name
                ))
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let id = category.base.id;
        wasm_bindgen_futures::spawn_local(async move {
            match delete_category(&id.as_string()).await {
                // Строка исчезает только после подтверждения сервером;
                // при ошибке запись остаётся на месте
                Ok(()) => state.update(|s| s.on_deleted(id)),
                Err(e) => set_error.set(Some(format!("Ошибка удаления: {}", e))),
            }
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{Category::list_name()}</h2>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| form_target.set(Some(FormTarget::Create))
                    >
                        {icon("plus")}
                        {"Новая категория"}
                    </button>
                    <button class="button button--primary" on:click=move |_| {
                        wasm_bindgen_futures::spawn_local(async move {
                            match fill_test_data().await {
                                Ok(_) => fetch(),
                                Err(e) => set_error.set(Some(format!("Ошибка заполнения: {}", e))),
                            }
                        });
                    }>
                        {icon("download")}
                        {"Заполнить"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="table-wrapper">
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__header-cell">{"Название"}</th>
                            <th class="table__header-cell">{"Описание"}</th>
                            <th class="table__header-cell">{"Цвет"}</th>
                            <th class="table__header-cell">{"Статус"}</th>
                            <th class="table__header-cell">{"Действия"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = state.get().items().to_vec();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan="5">
                                            {"Категории не заведены"}
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                items.into_iter().map(|category| {
                                    let edit_target = category.clone();
                                    let delete_target = category.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--name">{category.base.name.clone()}</td>
                                            <td class="table__cell">
                                                {category.base.description.clone().unwrap_or_else(|| "-".to_string())}
                                            </td>
                                            <td class="table__cell">
                                                {match category.color.clone() {
                                                    Some(color) => {
                                                        let swatch_style = format!("background-color: {};", color);
                                                        view! {
                                                            <div class="color-cell">
                                                                <div class="color-swatch" style=swatch_style></div>
                                                                <span class="color-hex">{color}</span>
                                                            </div>
                                                        }.into_any()
                                                    }
                                                    None => view! { <span>{"-"}</span> }.into_any(),
                                                }}
                                            </td>
                                            <td class="table__cell">
                                                {if category.active {
                                                    view! { <span class="badge badge--active">{"Активна"}</span> }.into_any()
                                                } else {
                                                    view! { <span class="badge badge--inactive">{"Неактивна"}</span> }.into_any()
                                                }}
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--secondary"
                                                    on:click=move |_| form_target.set(Some(FormTarget::Edit(edit_target.clone())))
                                                >
                                                    {icon("edit")}
                                                    {"Изменить"}
                                                </button>
                                                <button
                                                    class="button button--danger"
                                                    on:click=move |_| handle_delete(delete_target.clone())
                                                >
                                                    {icon("delete")}
                                                    {"Удалить"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            {move || form_target.get().map(|target| {
                let is_edit = matches!(target, FormTarget::Edit(_));
                let source = match target {
                    FormTarget::Create => None,
                    FormTarget::Edit(category) => Some(category),
                };
                let title = if is_edit {
                    "Редактирование категории"
                } else {
                    "Новая категория"
                };
                view! {
                    <Modal
                        title=title.to_string()
                        on_close=Callback::new(move |_| form_target.set(None))
                    >
                        <CategoryDetails
                            source=source
                            on_saved=Callback::new(move |category| {
                                // Список меняется только подтверждённой сервером записью
                                state.update(|s| {
                                    if is_edit {
                                        s.on_updated(category)
                                    } else {
                                        s.on_created(category)
                                    }
                                });
                                form_target.set(None);
                            })
                            on_cancel=Callback::new(move |_| form_target.set(None))
                        />
                    </Modal>
                }
            })}
        </div>
    }
}

async fn fetch_categories() -> Result<Vec<Category>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/category", api_base());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Vec<Category> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

async fn delete_category(id: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("DELETE");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/category/{}", api_base(), id);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("X-CSRF-Token", &csrf_token().unwrap_or_default())
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}

async fn fill_test_data() -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);

    let url = format!("{}/api/category/testdata", api_base());
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("X-CSRF-Token", &csrf_token().unwrap_or_default())
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
