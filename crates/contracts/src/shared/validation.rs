//! Validation primitives shared by the contracts and the form UI

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ошибка валидации, привязанная к полю формы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Свернуть список ошибок в отображение "поле → сообщение".
///
/// Пустой список даёт пустую map (форма без ошибок). При нескольких
/// ошибках на одно поле остаётся последняя.
pub fn error_map(errors: &[FieldError]) -> HashMap<String, String> {
    errors.iter().fold(HashMap::new(), |mut acc, err| {
        acc.insert(err.field.clone(), err.message.clone());
        acc
    })
}

/// Validation rules for a single field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for a required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} не может быть пустым", field_label));
        }

        if let Some(min) = self.min_length {
            if value.chars().count() < min {
                return Err(format!(
                    "{} должен содержать минимум {} символов",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(format!(
                    "{} не должен превышать {} символов",
                    field_label, max
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} должен быть не менее {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} должен быть не более {}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_map_lookup() {
        let errors = vec![FieldError::new("name", "Required")];
        let map = error_map(&errors);

        assert_eq!(map.get("name").map(String::as_str), Some("Required"));
        assert_eq!(map.get("description"), None);
    }

    #[test]
    fn test_error_map_empty() {
        assert!(error_map(&[]).is_empty());
    }

    #[test]
    fn test_error_map_duplicate_field_last_wins() {
        let errors = vec![
            FieldError::new("name", "Первая ошибка"),
            FieldError::new("name", "Вторая ошибка"),
        ];
        let map = error_map(&errors);

        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("name").map(String::as_str),
            Some("Вторая ошибка")
        );
    }

    #[test]
    fn test_validate_string_required() {
        let rules = ValidationRules::required();

        assert!(rules.validate_string("Обувь", "Наименование").is_ok());
        assert!(rules.validate_string("", "Наименование").is_err());
        assert!(rules.validate_string("   ", "Наименование").is_err());
    }

    #[test]
    fn test_validate_string_length() {
        let rules = ValidationRules {
            min_length: Some(2),
            max_length: Some(5),
            ..ValidationRules::none()
        };

        assert!(rules.validate_string("абв", "Код").is_ok());
        assert!(rules.validate_string("а", "Код").is_err());
        assert!(rules.validate_string("абвгде", "Код").is_err());
    }

    #[test]
    fn test_validate_number_bounds() {
        let rules = ValidationRules {
            min: Some(0.0),
            max: Some(100.0),
            ..ValidationRules::none()
        };

        assert!(rules.validate_number(50.0, "Скидка").is_ok());
        assert!(rules.validate_number(-1.0, "Скидка").is_err());
        assert!(rules.validate_number(101.0, "Скидка").is_err());
    }
}
