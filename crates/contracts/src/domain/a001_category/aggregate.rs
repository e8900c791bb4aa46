use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::validation::{FieldError, ValidationRules};

/// Правила для наименования категории
const NAME_RULES: ValidationRules = ValidationRules {
    max_length: Some(128),
    ..ValidationRules::required()
};

/// Правила для текстового описания категории
const DESCRIPTION_RULES: ValidationRules = ValidationRules {
    max_length: Some(1000),
    ..ValidationRules::none()
};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор категории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Вложенные типы
// ============================================================================

/// Ссылка на загруженное фоновое изображение категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub alt: Option<String>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория каталога товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseAggregate<CategoryId>,

    // Специфичные поля агрегата
    pub description: String,

    #[serde(rename = "parentId")]
    pub parent_id: Option<CategoryId>,

    #[serde(rename = "backgroundImage")]
    pub background_image: Option<ImageRef>,
}

impl Category {
    /// Создать новую категорию верхнего уровня
    pub fn new_for_insert(code: String, name: String, description: String) -> Self {
        Self {
            base: BaseAggregate::new(CategoryId::new_v4(), code, name),
            description,
            parent_id: None,
            background_image: None,
        }
    }

    /// Создать подкатегорию с заданным родителем
    pub fn new_subcategory(parent_id: CategoryId, name: String, description: String) -> Self {
        let mut category = Self::new_for_insert(String::new(), name, description);
        category.parent_id = Some(parent_id);
        category
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Собрать DTO формы из агрегата
    pub fn to_dto(&self) -> CategoryDto {
        CategoryDto {
            id: Some(self.base.id.as_string()),
            code: Some(self.base.code.clone()),
            name: self.base.name.clone(),
            description: self.description.clone(),
            background_image_url: self.background_image.as_ref().map(|img| img.url.clone()),
            background_image_alt: self
                .background_image
                .as_ref()
                .and_then(|img| img.alt.clone()),
            parent_id: self.parent_id.map(|id| id.as_string()),
        }
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &CategoryDto) {
        self.base.name = dto.name.clone();
        self.description = dto.description.clone();
        self.background_image = dto.background_image_url.as_ref().map(|url| ImageRef {
            url: url.clone(),
            alt: dto.background_image_alt.clone(),
        });
        self.base.touch();
    }

    /// Валидация данных; список ошибок в том виде, в котором их
    /// отображает форма (поле → сообщение)
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        if let Err(message) = NAME_RULES.validate_string(&self.base.name, "Наименование") {
            errors.push(FieldError::new("name", message));
        }

        if let Err(message) = DESCRIPTION_RULES.validate_string(&self.description, "Описание") {
            errors.push(FieldError::new("description", message));
        }

        errors
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "category"
    }

    fn element_name() -> &'static str {
        "Категория"
    }

    fn list_name() -> &'static str {
        "Категории"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления категории
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CategoryDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub description: String,
    #[serde(rename = "backgroundImageUrl")]
    pub background_image_url: Option<String>,
    #[serde(rename = "backgroundImageAlt")]
    pub background_image_alt: Option<String>,
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
}

impl CategoryDto {
    /// Плоский снимок значений для контейнера состояния формы.
    ///
    /// Ключи соответствуют именам полей формы; все значения примитивные.
    pub fn to_form_snapshot(&self) -> HashMap<String, Value> {
        HashMap::from([
            ("name".to_string(), Value::String(self.name.clone())),
            (
                "description".to_string(),
                Value::String(self.description.clone()),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Category {
        Category::new_for_insert(
            "CAT-0001".to_string(),
            "Обувь".to_string(),
            "Летняя и зимняя обувь".to_string(),
        )
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_empty());
    }

    #[test]
    fn test_validate_empty_name() {
        let mut category = sample();
        category.base.name = "  ".to_string();

        let errors = category.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_validate_name_too_long() {
        let mut category = sample();
        category.base.name = "х".repeat(129);

        let errors = category.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_to_dto_maps_fields() {
        let mut category = sample();
        category.background_image = Some(ImageRef {
            url: "/assets/images/shoes.jpg".to_string(),
            alt: Some("Обувь".to_string()),
        });

        let dto = category.to_dto();
        assert_eq!(dto.id.as_deref(), Some(category.to_string_id().as_str()));
        assert_eq!(dto.name, "Обувь");
        assert_eq!(dto.background_image_url.as_deref(), Some("/assets/images/shoes.jpg"));
    }

    #[test]
    fn test_update_from_dto_touches_metadata() {
        let mut category = sample();
        let before = category.base.metadata.updated_at;

        let mut dto = category.to_dto();
        dto.name = "Ботинки".to_string();
        category.update(&dto);

        assert_eq!(category.base.name, "Ботинки");
        assert!(category.base.metadata.updated_at >= before);
    }

    #[test]
    fn test_form_snapshot_keys() {
        let dto = sample().to_dto();
        let snapshot = dto.to_form_snapshot();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("name"), Some(&Value::String("Обувь".to_string())));
        assert_eq!(
            snapshot.get("description"),
            Some(&Value::String("Летняя и зимняя обувь".to_string()))
        );
    }

    #[test]
    fn test_new_subcategory_links_parent() {
        let parent = sample();
        let child = Category::new_subcategory(
            parent.id(),
            "Сандалии".to_string(),
            String::new(),
        );

        assert_eq!(child.parent_id, Some(parent.id()));
        assert_eq!(child.to_dto().parent_id, Some(parent.to_string_id()));
    }

    #[test]
    fn test_category_id_from_string() {
        let id = CategoryId::new_v4();
        let parsed = CategoryId::from_string(&id.as_string()).unwrap();
        assert_eq!(parsed, id);

        assert!(CategoryId::from_string("не uuid").is_err());
    }

    #[test]
    fn test_full_name() {
        assert_eq!(Category::full_name(), "a001_category");
    }
}
