use std::{collections::BTreeMap, future::Future};

use leptos::*;

/// Error key used for failures reported by the submit callback.
pub const SUBMIT_ERROR_FIELD: &str = "submit";

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<V> {
    initial: V,
    pub values: V,
    pub errors: BTreeMap<String, String>,
    pub is_submitting: bool,
}

impl<V: Clone> FormState<V> {
    pub fn new(initial: V) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: BTreeMap::new(),
            is_submitting: false,
        }
    }

    pub fn initial(&self) -> &V {
        &self.initial
    }

    /// Applies one field edit and clears that field's error.
    pub fn change(&mut self, field: &str, edit: impl FnOnce(&mut V)) {
        edit(&mut self.values);
        self.errors.remove(field);
    }

    pub fn set_values(&mut self, values: V) {
        self.values = values;
    }

    pub fn set_field_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.insert(field.to_string(), message.into());
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Marks the form as submitting and hands out the values to persist.
    /// Returns `None` while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<V> {
        if self.is_submitting {
            return None;
        }
        self.is_submitting = true;
        Some(self.values.clone())
    }

    pub fn finish_submit(&mut self, result: Result<(), String>) {
        if let Err(message) = result {
            self.errors.clear();
            self.errors.insert(SUBMIT_ERROR_FIELD.to_string(), message);
        }
        self.is_submitting = false;
    }

    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.errors.clear();
        self.is_submitting = false;
    }
}

pub fn use_form<V: Clone + 'static>(initial: V) -> RwSignal<FormState<V>> {
    create_rw_signal(FormState::new(initial))
}

/// Runs `submit` with the current values. Returns whether it succeeded; a
/// second call while one is in flight does nothing and returns `false`.
pub async fn submit_form<V, F, Fut>(form: RwSignal<FormState<V>>, submit: F) -> bool
where
    V: Clone + 'static,
    F: FnOnce(V) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    let Some(values) = form.try_update(|state| state.begin_submit()).flatten() else {
        return false;
    };
    let result = submit(values).await;
    let succeeded = result.is_ok();
    form.try_update(|state| state.finish_submit(result));
    succeeded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Values {
        name: String,
        present: bool,
    }

    fn initial() -> Values {
        Values {
            name: "Alice".into(),
            present: true,
        }
    }

    #[test]
    fn change_updates_value_and_clears_only_that_error() {
        let mut form = FormState::new(initial());
        form.set_field_error("name", "Required");
        form.set_field_error("present", "Pick one");

        form.change("name", |v| v.name = "Bob".into());
        assert_eq!(form.values.name, "Bob");
        assert_eq!(form.error("name"), None);
        assert_eq!(form.error("present"), Some("Pick one"));
    }

    #[test]
    fn failed_submit_replaces_errors_with_submit_message() {
        let mut form = FormState::new(initial());
        form.set_field_error("name", "Required");
        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting);
        assert!(form.begin_submit().is_none());

        form.finish_submit(Err("Email already exists".into()));
        assert!(!form.is_submitting);
        assert_eq!(form.errors.len(), 1);
        assert_eq!(form.error(SUBMIT_ERROR_FIELD), Some("Email already exists"));
    }

    #[test]
    fn successful_submit_keeps_values() {
        let mut form = FormState::new(initial());
        form.change("present", |v| v.present = false);
        let submitted = form.begin_submit().unwrap();
        form.finish_submit(Ok(()));
        assert!(!submitted.present);
        assert!(!form.values.present);
        assert!(!form.is_submitting);
        assert!(!form.has_errors());
    }

    #[test]
    fn reset_restores_construction_values_after_set_values() {
        let mut form = FormState::new(initial());
        form.set_values(Values {
            name: "Editing".into(),
            present: false,
        });
        form.set_field_error(SUBMIT_ERROR_FIELD, "boom");
        form.is_submitting = true;

        form.reset();
        assert_eq!(form.values, initial());
        assert_eq!(form.initial(), &initial());
        assert!(form.errors.is_empty());
        assert!(!form.is_submitting);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[tokio::test]
    async fn submit_form_reports_callback_outcome() {
        let runtime = create_runtime();
        let form = use_form(initial());

        let ok = submit_form(form, |values| async move {
            assert_eq!(values.name, "Alice");
            Ok(())
        })
        .await;
        assert!(ok);
        assert!(!form.get_untracked().is_submitting);

        let ok = submit_form(form, |_| async { Err("Failed to add employee".to_string()) }).await;
        assert!(!ok);
        assert_eq!(
            form.get_untracked().error(SUBMIT_ERROR_FIELD),
            Some("Failed to add employee")
        );
        runtime.dispose();
    }
}
