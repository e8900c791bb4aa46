use super::details::{CategoryBackgroundImage, CategoryGeneralInfo, CategorySubcategories};
use crate::domain::a001_category::fixtures;
use crate::shared::form::FormSnapshot;
use leptos::prelude::*;

use contracts::domain::a001_category::Category;
use contracts::domain::common::AggregateRoot;

const PLACEHOLDER_IMAGE: &str = "/assets/images/category-placeholder.svg";

/// Вариант отображения форм на странице предпросмотра
#[derive(Clone, Copy, Debug, PartialEq)]
enum Variant {
    Default,
    Loading,
    WithErrors,
}

impl Variant {
    const ALL: [Variant; 3] = [Variant::Default, Variant::Loading, Variant::WithErrors];

    fn label(&self) -> &'static str {
        match self {
            Variant::Default => "По умолчанию",
            Variant::Loading => "Загрузка",
            Variant::WithErrors => "С ошибками",
        }
    }
}

/// Страница предпросмотра форм категории.
///
/// Каждый вариант монтирует компоненты заново, как отдельную запись
/// в галерее состояний.
#[component]
pub fn CategoryFormsPreviewPage() -> impl IntoView {
    let variant = RwSignal::new(Variant::Default);

    let on_submit = Callback::new(|data: FormSnapshot| {
        log::debug!("Category form submitted: {:?}", data);
    });
    let on_image_upload = Callback::new(|_: ()| {
        log::debug!("Upload image requested");
    });
    let on_edit = Callback::new(|_: ()| {
        log::debug!("Add subcategory requested");
    });
    let on_back = Callback::new(|_: ()| {
        log::debug!("Back requested");
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {format!("{} — предпросмотр форм", Category::list_name())}
                    </h1>
                </div>
                <div class="page__header-right">
                    {Variant::ALL
                        .iter()
                        .map(|&item| {
                            view! {
                                <button
                                    class=move || {
                                        if variant.get() == item {
                                            "button button--primary"
                                        } else {
                                            "button button--secondary"
                                        }
                                    }
                                    on:click=move |_| variant.set(item)
                                >
                                    {item.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                let current = variant.get();
                let loading = current == Variant::Loading;
                let category_data = if loading {
                    None
                } else {
                    Some(fixtures::category(PLACEHOLDER_IMAGE))
                };
                let category = Signal::derive(move || category_data.clone());
                let errors = if current == Variant::WithErrors {
                    fixtures::errors()
                } else {
                    Vec::new()
                };

                view! {
                    <CategoryGeneralInfo
                        category=category
                        errors=errors
                        disabled=loading
                        on_submit=on_submit
                        on_back=on_back
                    />
                    <CategoryBackgroundImage
                        category=category
                        disabled=loading
                        on_submit=on_submit
                        on_image_upload=on_image_upload
                    />
                    <CategorySubcategories
                        disabled=loading
                        on_submit=on_submit
                        on_edit=on_edit
                    />
                }
                .into_any()
            }}
        </div>
    }
}
