use crate::domain::a001_category::ui::CategoryFormsPreviewPage;
use crate::shared::localization::Localizer;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the Localizer to the whole app via context.
    provide_context(Localizer::new());

    view! {
        <CategoryFormsPreviewPage />
    }
}
