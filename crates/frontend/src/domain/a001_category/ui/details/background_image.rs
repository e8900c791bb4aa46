use crate::shared::components::ui::{Button, Input};
use crate::shared::components::CardTitle;
use crate::shared::form::{Form, FormSnapshot};
use crate::shared::icons::icon;
use crate::shared::localization::use_localizer;
use contracts::domain::a001_category::CategoryDto;
use contracts::shared::validation::{error_map, FieldError};
use leptos::prelude::*;
use serde_json::Value;
use thaw::Card;

/// Карточка фонового изображения категории.
///
/// Выбор и загрузка файла остаются за вызывающим (`on_image_upload`);
/// здесь только предпросмотр и текстовое описание изображения.
#[component]
pub fn CategoryBackgroundImage(
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
    /// Открыть диалог выбора файла
    #[prop(optional)]
    on_image_upload: Option<Callback<()>>,
) -> impl IntoView {
    let i18n = use_localizer();
    let error_list = error_map(&errors);
    let alt_error = error_list.get("background_image_alt").cloned();

    let initial = Signal::derive(move || {
        category.get().map(|dto| {
            FormSnapshot::from([(
                "background_image_alt".to_string(),
                Value::String(dto.background_image_alt.unwrap_or_default()),
            )])
        })
    });

    let toolbar = view! {
        <Button
            variant="ghost"
            on_click=Callback::new(move |_| {
                if let Some(handler) = on_image_upload {
                    handler.run(());
                }
            })
        >
            {icon("upload")}
            {i18n.t("Upload image")}
        </Button>
    }
    .into_any();

    view! {
        <div class="container container--md">
            <Card>
                <CardTitle title=i18n.t("Background image (optional)") toolbar=toolbar />
                <div class="card__content">
                    {move || {
                        category.get().and_then(|dto| {
                            let url = dto.background_image_url.clone()?;
                            let alt = dto.background_image_alt.clone().unwrap_or_else(|| {
                                i18n.t_params("Background image for {name}", &[("name", &dto.name)])
                            });
                            Some(view! {
                                <img class="category-image__preview" src=url alt=alt />
                            })
                        })
                    }}
                    <Form initial=initial on_submit=on_submit render=move |form| view! {
                        <Input
                            id="category-image-alt"
                            label=i18n.t_ctx("Image description", "image")
                            value=Signal::derive(move || form.text("background_image_alt"))
                            on_input=Callback::new(move |value: String| {
                                form.change_text("background_image_alt", value);
                            })
                            error=alt_error.clone()
                            disabled=disabled
                        />
                    } />
                </div>
            </Card>
        </div>
    }
}
