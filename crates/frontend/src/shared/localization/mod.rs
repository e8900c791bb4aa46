//! Сервис локализации интерфейсных строк.
//!
//! Передаётся компонентам через контекст Leptos, а не через глобальное
//! состояние: компоненты получают его вызовом [`use_localizer`].

mod catalog;

use leptos::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static RU_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| catalog::RU.iter().copied().collect());

/// Справочник "ключ → отображаемый текст".
///
/// Незнакомый ключ возвращается как есть: форма остаётся читаемой,
/// даже если строка ещё не переведена.
#[derive(Clone, Copy, Debug, Default)]
pub struct Localizer;

impl Localizer {
    pub fn new() -> Self {
        Self
    }

    /// Найти строку по ключу
    pub fn t(&self, key: &str) -> String {
        match RU_INDEX.get(key) {
            Some(text) => (*text).to_string(),
            None => key.to_string(),
        }
    }

    /// Вариант ключа с контекстом: сначала "ключ_контекст", затем ключ
    pub fn t_ctx(&self, key: &str, context: &str) -> String {
        let ctx_key = format!("{}_{}", key, context);
        match RU_INDEX.get(ctx_key.as_str()) {
            Some(text) => (*text).to_string(),
            None => self.t(key),
        }
    }

    /// Подстановка параметров вида "{имя}" в найденную строку
    pub fn t_params(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut text = self.t(key);
        for (name, value) in params {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

/// Получить Localizer из контекста приложения
pub fn use_localizer() -> Localizer {
    use_context::<Localizer>().expect("Localizer not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key() {
        assert_eq!(Localizer::new().t("Subcategories"), "Подкатегории");
    }

    #[test]
    fn test_unknown_key_returned_verbatim() {
        assert_eq!(Localizer::new().t("No such key"), "No such key");
    }

    #[test]
    fn test_context_lookup_with_fallback() {
        let i18n = Localizer::new();

        assert_eq!(i18n.t_ctx("Name", "category"), "Наименование");
        // Нет варианта для контекста "product": падаем на базовый ключ,
        // а его нет в словаре, значит возвращается сам ключ
        assert_eq!(i18n.t_ctx("Name", "product"), "Name");
        // Базовый ключ есть, контекстного варианта нет
        assert_eq!(i18n.t_ctx("Subcategories", "product"), "Подкатегории");
    }

    #[test]
    fn test_params_interpolation() {
        let text =
            Localizer::new().t_params("Background image for {name}", &[("name", "Обувь")]);
        assert_eq!(text, "Фоновое изображение категории Обувь");
    }
}
