use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::components::CardTitle;
use crate::shared::form::{Form, FormSnapshot};
use crate::shared::icons::icon;
use crate::shared::localization::use_localizer;
use contracts::domain::a001_category::CategoryDto;
use contracts::shared::validation::{error_map, FieldError};
use leptos::prelude::*;
use thaw::Card;

/// Карточка "Общая информация" формы категории.
///
/// Ошибки валидации приходят снаружи списком и отображаются под
/// соответствующими полями; сам компонент значения не проверяет.
#[component]
pub fn CategoryGeneralInfo(
    /// Данные категории; `None`, пока данные не загружены
    #[prop(into)]
    category: Signal<Option<CategoryDto>>,
    /// Ошибки валидации от внешнего коллаборатора
    #[prop(optional)]
    errors: Vec<FieldError>,
    /// Блокировка полей на время загрузки или сохранения
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Колбэк отправки с текущим снимком значений
    #[prop(into)]
    on_submit: Callback<FormSnapshot>,
    /// Возврат к списку категорий
    #[prop(optional)]
    on_back: Option<Callback<()>>,
) -> impl IntoView {
    let i18n = use_localizer();
    let error_list = error_map(&errors);
    let name_error = error_list.get("name").cloned();
    let description_error = error_list.get("description").cloned();

    let initial = Signal::derive(move || category.get().map(|dto| dto.to_form_snapshot()));

    view! {
        <div class="container container--md">
            <Card>
                <CardTitle title=i18n.t("General Information") />
                <div class="card__content">
                    <Form initial=initial on_submit=on_submit render=move |form| view! {
                        <Input
                            id="category-name"
                            label=i18n.t_ctx("Name", "category")
                            value=Signal::derive(move || form.text("name"))
                            on_input=Callback::new(move |value: String| {
                                form.change_text("name", value);
                            })
                            error=name_error.clone()
                            disabled=disabled
                            autofocus=true
                        />
                        <Textarea
                            id="category-description"
                            label=i18n.t_ctx("Description", "category")
                            value=Signal::derive(move || form.text("description"))
                            on_input=Callback::new(move |value: String| {
                                form.change_text("description", value);
                            })
                            error=description_error.clone()
                            helper_text=i18n.t_ctx("Select text to enable text-formating tools.", "field")
                            disabled=disabled
                            rows=3
                        />
                        <div class="details-actions">
                            <Button
                                on_click=Callback::new(move |_| form.submit())
                                disabled=disabled
                            >
                                {icon("save")}
                                {i18n.t("Save")}
                            </Button>
                            {on_back.map(|handler| view! {
                                <Button
                                    variant="secondary"
                                    on_click=Callback::new(move |_| handler.run(()))
                                >
                                    {icon("cancel")}
                                    {i18n.t("Back")}
                                </Button>
                            })}
                        </div>
                    } />
                </div>
            </Card>
        </div>
    }
}
