use super::state::{FormSnapshot, FormState};
use leptos::prelude::*;
use serde_json::Value;

/// Copy-able handle owning the reactive state of one mounted form.
///
/// The markup layer reads values through [`FormController::text`] and
/// reports user input through [`FormController::change_text`]; the state
/// update is synchronous, so the new value is visible to the next render
/// pass and to a subsequent [`FormController::submit`].
#[derive(Clone, Copy)]
pub struct FormController {
    state: RwSignal<FormState>,
    on_submit: Callback<FormSnapshot>,
}

impl FormController {
    /// Seed the controller from an initial snapshot (`None` while the
    /// data has not arrived yet).
    pub fn try_new(
        initial: Option<FormSnapshot>,
        on_submit: Callback<FormSnapshot>,
    ) -> Result<Self, String> {
        let state = match initial {
            Some(snapshot) => FormState::try_new(snapshot)?,
            None => FormState::empty(),
        };
        Ok(Self {
            state: RwSignal::new(state),
            on_submit,
        })
    }

    /// Controller over an empty form, the fallback for a rejected seed.
    pub fn empty(on_submit: Callback<FormSnapshot>) -> Self {
        Self {
            state: RwSignal::new(FormState::empty()),
            on_submit,
        }
    }

    /// Reactive display text of a field.
    pub fn text(&self, field: &str) -> String {
        self.state.with(|state| state.text(field))
    }

    /// Store a new field value. A rejected input (blank name,
    /// non-primitive value) is a programmer error: it is logged and the
    /// state stays as it was.
    pub fn change(&self, field: &str, value: Value) {
        let result = self.state.try_update(|state| state.set(field, value));
        if let Some(Err(e)) = result {
            log::error!("Form change rejected: {}", e);
        }
    }

    /// Store a new text value, the common case for input fields.
    pub fn change_text(&self, field: &str, text: String) {
        self.change(field, Value::String(text));
    }

    /// Reseed from a new snapshot, discarding in-progress edits.
    pub fn on_initial_data_changed(&self, new_initial: FormSnapshot) {
        let result = self
            .state
            .try_update(|state| state.on_initial_data_changed(new_initial));
        if let Some(Err(e)) = result {
            log::error!("Form reseed rejected: {}", e);
        }
    }

    /// Invoke the submission callback with the current snapshot. State is
    /// neither cleared nor reset; failure handling belongs to the caller.
    pub fn submit(&self) {
        let snapshot = self.state.with_untracked(|state| state.snapshot());
        self.on_submit.run(snapshot);
    }

    /// Reactive copy of the current values.
    pub fn values(&self) -> FormSnapshot {
        self.state.with(|state| state.snapshot())
    }
}
