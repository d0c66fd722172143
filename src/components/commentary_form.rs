//! Commentary form shown once a post is saved.
//!
//! Submitting only logs the commentary; nothing is stored or sent.

#[cfg(test)]
#[path = "commentary_form_test.rs"]
mod commentary_form_test;

use leptos::prelude::*;

use crate::components::form_field::FormField;
use crate::net::types::Commentary;
use crate::util::form::{FieldSpec, FieldValues, FormError, FormModel, handle_submit};

impl FormModel for Commentary {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("name", "Nome"),
        FieldSpec::email("email", "Email"),
        FieldSpec::text("comment", "Comentário"),
    ];

    fn from_values(values: &FieldValues) -> Result<Self, FormError> {
        Ok(Self {
            name: values.field("name")?,
            email: values.field("email")?,
            comment: values.field("comment")?,
        })
    }
}

#[component]
pub fn CommentaryForm() -> impl IntoView {
    let values = RwSignal::new(FieldValues::register(Commentary::FIELDS));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Err(e) = values.with_untracked(submit_commentary) {
            leptos::logging::warn!("commentary form: {e}");
        }
    };

    view! {
        <form on:submit=on_submit>
            {Commentary::FIELDS
                .iter()
                .map(|spec| view! { <FormField spec=*spec values=values/> })
                .collect_view()}

            <div class="control">
                <button type="submit" class="button is-link">
                    "Submit"
                </button>
            </div>
        </form>
    }
}

/// Collect the commentary from `values` and log it. Returns the logged record.
///
/// # Errors
///
/// Returns a [`FormError`] if a commentary field is not registered.
pub fn submit_commentary(values: &FieldValues) -> Result<serde_json::Value, FormError> {
    let commentary = handle_submit::<Commentary>(values)?;
    let record = commentary.log_record();
    leptos::logging::log!("{record}");
    Ok(record)
}
