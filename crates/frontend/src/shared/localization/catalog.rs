//! Словарь интерфейсных строк (ru).
//!
//! Контекстный вариант ключа записывается как "ключ_контекст".

pub const RU: &[(&str, &str)] = &[
    // Формы категории
    ("General Information", "Общая информация"),
    ("Name_category", "Наименование"),
    ("Description_category", "Описание"),
    (
        "Select text to enable text-formating tools._field",
        "Выделите текст, чтобы открыть инструменты форматирования.",
    ),
    ("Background image (optional)", "Фоновое изображение (необязательно)"),
    ("Upload image", "Загрузить изображение"),
    ("Image description_image", "Описание изображения"),
    ("Subcategories", "Подкатегории"),
    ("Add subcategory", "Добавить подкатегорию"),
    (
        "Add subcategories to help you organize your products",
        "Добавьте подкатегории, чтобы упорядочить товары",
    ),
    ("Category Name_category", "Название категории"),
    ("Category Description_category", "Описание категории"),
    (
        "Background image for {name}",
        "Фоновое изображение категории {name}",
    ),
    // Общие действия
    ("Save", "Сохранить"),
    ("Back", "Назад"),
];
