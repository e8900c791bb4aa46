use serde_json::Value;
use std::collections::HashMap;

/// Точечный снимок значений формы: "имя поля → примитивное значение".
pub type FormSnapshot = HashMap<String, Value>;

/// FormState holds the field values of a single mounted form.
///
/// Seeded from an initial snapshot, mutated synchronously by change
/// events, reseeded when the owner supplies a new snapshot. Every key of
/// the initial snapshot stays present; change events may add new keys but
/// never remove existing ones.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    initial: FormSnapshot,
    values: FormSnapshot,
}

fn check_field_name(field: &str) -> Result<(), String> {
    if field.trim().is_empty() {
        return Err(format!("invalid field name: {:?}", field));
    }
    Ok(())
}

fn check_primitive(field: &str, value: &Value) -> Result<(), String> {
    match value {
        Value::Object(_) | Value::Array(_) => Err(format!(
            "value of field {:?} must be a primitive, got: {}",
            field, value
        )),
        _ => Ok(()),
    }
}

fn check_snapshot(snapshot: &FormSnapshot) -> Result<(), String> {
    for (field, value) in snapshot {
        check_field_name(field)?;
        check_primitive(field, value)?;
    }
    Ok(())
}

impl FormState {
    /// Seed the state from an initial snapshot. An empty snapshot is
    /// allowed; blank field names and non-primitive values are rejected.
    pub fn try_new(initial: FormSnapshot) -> Result<Self, String> {
        check_snapshot(&initial)?;
        Ok(Self {
            values: initial.clone(),
            initial,
        })
    }

    /// Empty state for a form whose data has not arrived yet.
    pub fn empty() -> Self {
        Self {
            initial: FormSnapshot::new(),
            values: FormSnapshot::new(),
        }
    }

    /// Store a new value: insert the field or overwrite the previous
    /// value. Pure value storage, no validation of the content.
    pub fn set(&mut self, field: &str, value: Value) -> Result<(), String> {
        check_field_name(field)?;
        check_primitive(field, &value)?;
        self.values.insert(field.to_string(), value);
        Ok(())
    }

    /// Reseed from a new snapshot, discarding in-progress edits. This is
    /// the explicit transition for "no data yet" → "loaded data".
    pub fn on_initial_data_changed(&mut self, new_initial: FormSnapshot) -> Result<(), String> {
        check_snapshot(&new_initial)?;
        self.values = new_initial.clone();
        self.initial = new_initial;
        Ok(())
    }

    pub fn value(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Display text of a field: strings verbatim, numbers and booleans
    /// via to_string, absent or null fields as an empty string.
    pub fn text(&self, field: &str) -> String {
        match self.values.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Null) | None => String::new(),
            // Объекты и массивы отсекаются на границе set/try_new
            Some(other) => other.to_string(),
        }
    }

    pub fn values(&self) -> &FormSnapshot {
        &self.values
    }

    pub fn initial(&self) -> &FormSnapshot {
        &self.initial
    }

    /// Point-in-time copy of the current values, the payload for submit.
    pub fn snapshot(&self) -> FormSnapshot {
        self.values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(pairs: &[(&str, &str)]) -> FormSnapshot {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    #[test]
    fn test_construct_yields_exact_initial() {
        let initial = snapshot(&[("name", "Обувь"), ("description", "")]);
        let state = FormState::try_new(initial.clone()).unwrap();

        assert_eq!(state.values(), &initial);
        assert_eq!(state.initial(), &initial);
    }

    #[test]
    fn test_empty_initial_allowed() {
        let state = FormState::try_new(FormSnapshot::new()).unwrap();
        assert!(state.values().is_empty());
    }

    #[test]
    fn test_changes_apply_in_order() {
        let mut state = FormState::try_new(snapshot(&[("name", ""), ("description", "")])).unwrap();

        state.set("name", json!("Сапоги")).unwrap();
        state.set("name", json!("Ботинки")).unwrap();
        state.set("description", json!("Кожаные")).unwrap();

        // Поздняя запись в то же поле побеждает, соседние поля не затронуты
        assert_eq!(state.text("name"), "Ботинки");
        assert_eq!(state.text("description"), "Кожаные");
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut state = FormState::try_new(snapshot(&[("name", "")])).unwrap();

        state.set("name", json!("Обувь")).unwrap();
        let after_first = state.snapshot();
        state.set("name", json!("Обувь")).unwrap();

        assert_eq!(state.snapshot(), after_first);
    }

    #[test]
    fn test_set_inserts_unknown_field() {
        let mut state = FormState::try_new(FormSnapshot::new()).unwrap();
        state.set("comment", json!("Новый")).unwrap();

        assert_eq!(state.text("comment"), "Новый");
    }

    #[test]
    fn test_initial_keys_never_dropped() {
        let mut state = FormState::try_new(snapshot(&[("name", ""), ("description", "")])).unwrap();
        state.set("name", json!("Обувь")).unwrap();

        for key in state.initial().keys() {
            assert!(state.value(key).is_some(), "missing key {:?}", key);
        }
    }

    #[test]
    fn test_remount_discards_edits() {
        // Данные ещё не пришли, пользователь уже что-то ввёл
        let mut state = FormState::empty();
        state.set("name", json!("черновик")).unwrap();

        let loaded = snapshot(&[("name", "Shoes"), ("description", "")]);
        state.on_initial_data_changed(loaded.clone()).unwrap();

        assert_eq!(state.values(), &loaded);
        assert_eq!(state.initial(), &loaded);
    }

    #[test]
    fn test_submit_scenario() {
        let mut state = FormState::try_new(snapshot(&[("name", ""), ("description", "")])).unwrap();
        state.set("name", json!("Boots")).unwrap();

        assert_eq!(
            state.snapshot(),
            snapshot(&[("name", "Boots"), ("description", "")])
        );
    }

    #[test]
    fn test_blank_field_name_rejected() {
        assert!(FormState::try_new(snapshot(&[("", "x")])).is_err());

        let mut state = FormState::empty();
        assert!(state.set("  ", json!("x")).is_err());
        assert!(state
            .on_initial_data_changed(snapshot(&[("", "x")]))
            .is_err());
    }

    #[test]
    fn test_non_primitive_value_rejected() {
        let nested = FormSnapshot::from([("name".to_string(), json!({"nested": true}))]);
        assert!(FormState::try_new(nested.clone()).is_err());

        let mut state = FormState::empty();
        assert!(state.set("name", json!({"nested": true})).is_err());
        assert!(state.set("name", json!(["a", "b"])).is_err());
        assert!(state.on_initial_data_changed(nested).is_err());

        // Отклонённый ввод не портит состояние
        assert!(state.values().is_empty());
    }

    #[test]
    fn test_text_coercion() {
        let mut state = FormState::empty();
        state.set("count", json!(3)).unwrap();
        state.set("enabled", json!(true)).unwrap();
        state.set("comment", Value::Null).unwrap();

        assert_eq!(state.text("count"), "3");
        assert_eq!(state.text("enabled"), "true");
        assert_eq!(state.text("comment"), "");
        assert_eq!(state.text("missing"), "");
    }
}
