//! Labelled input bound to one entry of a form's `FieldValues`.

use leptos::prelude::*;

use crate::util::form::{FieldSpec, FieldValues};

/// One form row: label plus an input whose value lives in `values`.
#[component]
pub fn FormField(spec: FieldSpec, values: RwSignal<FieldValues>) -> impl IntoView {
    let name = spec.name;

    view! {
        <div class="field">
            <label class="label" for=name>{spec.label}</label>
            <div class="control">
                <input
                    id=name
                    name=name
                    type=spec.kind.as_str()
                    class="input"
                    prop:value=move || values.with(|v| v.get(name).to_owned())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        values.update(|v| v.set(name, value));
                    }
                />
            </div>
        </div>
    }
}
