//! Form Field Components
//!
//! Inputs bound to a `TaskForm` / `ItemForm` signal, with the per-field
//! validation message under each one.

use leptos::prelude::*;
use list_replica::validation::{Field, FormErrors, ItemForm, TaskForm};
use list_replica::{ItemState, Priority};

/// Validation message for one field, if any
#[component]
pub fn FieldErrorText(errors: RwSignal<FormErrors>, field: Field) -> impl IntoView {
    move || {
        errors.with(|errors| {
            errors
                .get(field)
                .map(|error| view! { <div class="field-error">{error.to_string()}</div> })
        })
    }
}

fn input_class(errors: RwSignal<FormErrors>, field: Field) -> impl Fn() -> &'static str + Copy {
    move || {
        if errors.with(|errors| errors.get(field).is_some()) {
            "input invalid"
        } else {
            "input"
        }
    }
}

/// Title, expiration date and description of a task
#[component]
pub fn TaskFormFields(form: RwSignal<TaskForm>, errors: RwSignal<FormErrors>) -> impl IntoView {
    view! {
        <div class="form-row">
            <label class="form-field">
                <span>"Title"</span>
                <input
                    type="text"
                    class=input_class(errors, Field::Title)
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
                <FieldErrorText errors=errors field=Field::Title />
            </label>
            <label class="form-field narrow">
                <span>"Expiration date"</span>
                <input
                    type="date"
                    class=input_class(errors, Field::ExpiresAt)
                    prop:value=move || form.with(|f| f.expires_at.clone())
                    on:input=move |ev| form.update(|f| f.expires_at = event_target_value(&ev))
                />
                <FieldErrorText errors=errors field=Field::ExpiresAt />
            </label>
        </div>
        <label class="form-field">
            <span>"Description"</span>
            <textarea
                class=input_class(errors, Field::Description)
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            />
            <FieldErrorText errors=errors field=Field::Description />
        </label>
    }
}

/// Title, description, priority and state of an item
#[component]
pub fn ItemFormFields(form: RwSignal<ItemForm>, errors: RwSignal<FormErrors>) -> impl IntoView {
    let priority = move || form.with(|f| f.priority.map(Priority::as_wire).unwrap_or_default());
    let set_priority = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.priority = Priority::from_wire(&value));
    };
    let state = move || form.with(|f| f.state.map(ItemState::as_wire).unwrap_or_default());
    let set_state = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.state = ItemState::from_wire(&value));
    };

    view! {
        <label class="form-field">
            <span>"Title"</span>
            <input
                type="text"
                class=input_class(errors, Field::Title)
                prop:value=move || form.with(|f| f.title.clone())
                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
            />
            <FieldErrorText errors=errors field=Field::Title />
        </label>
        <label class="form-field">
            <span>"Description"</span>
            <textarea
                class=input_class(errors, Field::Description)
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            />
            <FieldErrorText errors=errors field=Field::Description />
        </label>
        <div class="form-row">
            <label class="form-field">
                <span>"Priority"</span>
                <select
                    class=input_class(errors, Field::Priority)
                    prop:value=priority
                    on:change=set_priority
                >
                    <option value="">"Select a priority"</option>
                    {Priority::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.as_wire()>{p.label()}</option> })
                        .collect_view()}
                </select>
                <FieldErrorText errors=errors field=Field::Priority />
            </label>
            <label class="form-field">
                <span>"State"</span>
                <select
                    class=input_class(errors, Field::State)
                    prop:value=state
                    on:change=set_state
                >
                    <option value="">"Select a state"</option>
                    {ItemState::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_wire()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <FieldErrorText errors=errors field=Field::State />
            </label>
        </div>
    }
}
