use super::view_model::CategoryDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_category::aggregate::{is_hex_color, Category};
use leptos::prelude::*;

#[component]
pub fn CategoryDetails(
    source: Option<Category>,
    on_saved: Callback<Category>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(source.as_ref());

    // Clone vm for multiple closures
    let vm_clone = vm.clone();

    let field_error = move |errors: &RwSignal<contracts::shared::validation::FieldErrors>,
                            field: &'static str| {
        let errors = *errors;
        move || {
            errors
                .get()
                .get(field)
                .map(|message| view! { <div class="field-error">{message.to_string()}</div> })
        }
    };

    view! {
        <div class="details-container category-details">
            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="name">{"Название"}</label>
                    <input
                        type="text"
                        id="name"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().name
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        }
                        placeholder="Например: Электроника"
                    />
                    {field_error(&vm_clone.errors, "name")}
                </div>

                <div class="form-group">
                    <label for="description">{"Описание"}</label>
                    <textarea
                        id="description"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().description.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.description = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="Необязательное описание"
                        rows="3"
                    />
                </div>

                <div class="form-group">
                    <label for="color">{"Цвет (Hex)"}</label>
                    <div class="color-input-row">
                        <input
                            type="text"
                            id="color"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().color.clone().unwrap_or_default()
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    let value = event_target_value(&ev);
                                    vm.form.update(|f| {
                                        f.color = if value.is_empty() { None } else { Some(value) };
                                    });
                                }
                            }
                            placeholder="#FF5733"
                        />
                        {
                            // Предпросмотр только для корректного значения
                            let vm = vm_clone.clone();
                            move || {
                                let color = vm.form.get().color.unwrap_or_default();
                                is_hex_color(&color).then(|| view! {
                                    <div
                                        class="color-swatch color-swatch--preview"
                                        style=format!("background-color: {};", color)
                                    ></div>
                                })
                            }
                        }
                    </div>
                    {field_error(&vm_clone.errors, "color")}
                </div>

                <div class="form-group">
                    <label for="active">{"Статус"}</label>
                    <select
                        id="active"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || if vm.form.get().active { "1" } else { "0" }
                        }
                        on:change={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.active = value == "1");
                            }
                        }
                    >
                        <option value="1">{"Активна"}</option>
                        <option value="0">{"Неактивна"}</option>
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm_clone.clone();
                        move |_| vm.save_command(on_saved)
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || vm.processing.get()
                    }
                >
                    {icon("save")}
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Сохранить" } else { "Создать" }
                    }
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| on_cancel.run(())
                >
                    {icon("cancel")}
                    {"Отмена"}
                </button>
            </div>
        </div>
    }
}
