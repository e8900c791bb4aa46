use super::controller::FormController;
use super::state::FormSnapshot;
use leptos::prelude::*;

/// Контейнер состояния формы: состояние здесь, разметка у вызывающего.
///
/// `render` получает [`FormController`] и возвращает содержимое формы.
/// Когда `initial` меняет идентичность (данные пришли с сервера или
/// сменилась запись), состояние пересеивается из нового снимка, а
/// незавершённые правки отбрасываются.
#[component]
pub fn Form<F, IV>(
    /// Начальный снимок; `None`, пока данные не загружены.
    #[prop(into)]
    initial: Signal<Option<FormSnapshot>>,
    /// Колбэк отправки, получает текущий снимок значений.
    #[prop(into)]
    on_submit: Callback<FormSnapshot>,
    /// Функция отрисовки содержимого формы.
    render: F,
) -> impl IntoView
where
    F: Fn(FormController) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let controller = match FormController::try_new(initial.get_untracked(), on_submit) {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("Form rejected initial snapshot: {}", e);
            FormController::empty(on_submit)
        }
    };

    // Пересев при смене идентичности снимка; повторный рендер с теми же
    // данными правок не трогает
    let seen = StoredValue::new(initial.get_untracked());
    Effect::new(move |_| {
        let next = initial.get();
        let changed = seen.with_value(|prev| *prev != next);
        if changed {
            seen.set_value(next.clone());
            if let Some(snapshot) = next {
                controller.on_initial_data_changed(snapshot);
            }
        }
    });

    render(controller)
}
