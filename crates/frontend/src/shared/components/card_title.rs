use leptos::prelude::*;

/// Заголовок карточки с необязательной панелью действий справа.
///
/// Панель (`toolbar`) обычно содержит одну-две кнопки; без неё
/// рендерится только текст заголовка.
#[component]
pub fn CardTitle(
    /// Текст заголовка
    #[prop(into)]
    title: String,
    /// Панель действий (кнопки) в правой части заголовка
    #[prop(optional)]
    toolbar: Option<AnyView>,
) -> impl IntoView {
    view! {
        <div class="card__title">
            <h3 class="card__title-text">{title}</h3>
            {toolbar.map(|content| view! {
                <div class="card__title-toolbar">{content}</div>
            })}
        </div>
    }
}
