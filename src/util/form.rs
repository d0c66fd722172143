//! Field registration and submit wiring for the app's forms.
//!
//! DESIGN
//! ======
//! Each form declares its inputs once as a static `FieldSpec` list. The same
//! list drives rendering (`FormField`), the initial `FieldValues` map and the
//! typed model built on submit, so a field that is rendered is always a field
//! that is collected.
//!
//! No validation rules are applied beyond registration. Email inputs rely on
//! the browser's own `type="email"` checking.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use thiserror::Error;

/// HTML input type for a registered field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Email,
}

impl InputKind {
    /// Value for the input's `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
        }
    }
}

/// A single registered form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name, used as the input `id`/`name` and the model key.
    pub name: &'static str,
    /// Visible label text.
    pub label: &'static str,
    pub kind: InputKind,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: InputKind::Text }
    }

    pub const fn email(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: InputKind::Email }
    }
}

/// Errors raised while collecting a submit model from field values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field `{0}` is not registered")]
    Unregistered(&'static str),
}

/// Current input values keyed by registered field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<&'static str, String>,
}

impl FieldValues {
    /// Register `fields`, each starting with an empty value.
    pub fn register(fields: &[FieldSpec]) -> Self {
        Self {
            values: fields.iter().map(|f| (f.name, String::new())).collect(),
        }
    }

    /// Current value for `name`, or `""` when the field is unknown.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Update a registered field. Writes to unregistered names are dropped.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value.into();
        }
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Owned value for a field a model requires.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Unregistered`] if `name` was never registered.
    pub fn field(&self, name: &'static str) -> Result<String, FormError> {
        self.values
            .get(name)
            .cloned()
            .ok_or(FormError::Unregistered(name))
    }
}

/// A typed model collected from a form on submit.
pub trait FormModel: Sized {
    /// Inputs the form registers, in render order.
    const FIELDS: &'static [FieldSpec];

    /// Build the model from the current values.
    ///
    /// # Errors
    ///
    /// Returns a [`FormError`] when a required field is not registered.
    fn from_values(values: &FieldValues) -> Result<Self, FormError>;
}

/// Collect a submit model from `values`.
///
/// # Errors
///
/// Propagates the model's [`FormError`] so the caller can abort the submit.
pub fn handle_submit<M: FormModel>(values: &FieldValues) -> Result<M, FormError> {
    M::from_values(values)
}
