//! Демонстрационные данные для страницы предпросмотра форм.

use contracts::domain::a001_category::{Category, CategoryDto, ImageRef};
use contracts::shared::validation::FieldError;

/// Категория с заполненными полями; `placeholder_image` подставляется
/// как фоновое изображение (пустая строка отключает изображение).
pub fn category(placeholder_image: &str) -> CategoryDto {
    let mut aggregate = Category::new_for_insert(
        "CAT-0001".to_string(),
        "Обувь".to_string(),
        "Летняя и зимняя обувь для всей семьи".to_string(),
    );
    if !placeholder_image.is_empty() {
        aggregate.background_image = Some(ImageRef {
            url: placeholder_image.to_string(),
            alt: Some("Обувь".to_string()),
        });
    }
    aggregate.to_dto()
}

/// Ошибки валидации в том виде, в котором их возвращает сервер.
pub fn errors() -> Vec<FieldError> {
    vec![
        FieldError::new("name", "Наименование не может быть пустым"),
        FieldError::new("description", "Описание не должно превышать 1000 символов"),
    ]
}
