use crate::shared::components::ui::{Button, Input};
use crate::shared::components::CardTitle;
use crate::shared::form::{Form, FormSnapshot};
use crate::shared::icons::icon;
use crate::shared::localization::use_localizer;
use contracts::shared::validation::{error_map, FieldError};
use leptos::prelude::*;
use serde_json::Value;
use thaw::Card;

fn empty_pair() -> FormSnapshot {
    FormSnapshot::from([
        ("category_name".to_string(), Value::String(String::new())),
        (
            "category_description".to_string(),
            Value::String(String::new()),
        ),
    ])
}

/// Карточка подкатегорий: пара полей для быстрого добавления.
#[component]
pub fn CategorySubcategories(
    /// Ошибки валидации от внешнего коллаборатора
    #[prop(optional)]
    errors: Vec<FieldError>,
    /// Блокировка полей на время загрузки или сохранения
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Колбэк отправки с текущим снимком значений
    #[prop(into)]
    on_submit: Callback<FormSnapshot>,
    /// Переход к полной форме подкатегории
    #[prop(optional)]
    on_edit: Option<Callback<()>>,
) -> impl IntoView {
    let i18n = use_localizer();
    let error_list = error_map(&errors);
    let name_error = error_list.get("category_name").cloned();
    let description_error = error_list.get("category_description").cloned();

    let initial = Signal::derive(|| Some(empty_pair()));

    let edit_click = Callback::new(move |_: leptos::ev::MouseEvent| {
        if let Some(handler) = on_edit {
            handler.run(());
        }
    });

    let toolbar = view! {
        <Button variant="ghost" on_click=edit_click>
            {i18n.t("Add subcategory")}
        </Button>
    }
    .into_any();

    view! {
        <div class="container container--md">
            <Card>
                <CardTitle title=i18n.t("Subcategories") toolbar=toolbar />
                <div class="card__content">
                    <p class="card__text">
                        {i18n.t("Add subcategories to help you organize your products")}
                    </p>
                    <Form initial=initial on_submit=on_submit render=move |form| view! {
                        <Input
                            id="subcategory-name"
                            label=i18n.t_ctx("Category Name", "category")
                            value=Signal::derive(move || form.text("category_name"))
                            on_input=Callback::new(move |value: String| {
                                form.change_text("category_name", value);
                            })
                            error=name_error.clone()
                            disabled=disabled
                        />
                        <Input
                            id="subcategory-description"
                            label=i18n.t_ctx("Category Description", "category")
                            value=Signal::derive(move || form.text("category_description"))
                            on_input=Callback::new(move |value: String| {
                                form.change_text("category_description", value);
                            })
                            error=description_error.clone()
                            disabled=disabled
                        />
                    } />
                </div>
                <hr class="card__divider" />
                <Button variant="ghost" class="card__footer-action" on_click=edit_click>
                    {i18n.t("Add subcategory")}
                    {icon("add")}
                </Button>
            </Card>
        </div>
    }
}
