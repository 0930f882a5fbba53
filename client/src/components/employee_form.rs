//! Employee creation form card.
//!
//! The inputs are uncontrolled and the "Add Employee" button has no
//! handler: nothing is validated, collected or submitted.

use leptos::prelude::*;

use crate::components::image_upload::ImageUpload;
use crate::state::form::EmployeeField;
use crate::state::preview::PreviewState;
use crate::util::dark_mode::themed;

#[component]
pub fn EmployeeForm(#[prop(into)] dark: Signal<bool>, preview: RwSignal<PreviewState>) -> impl IntoView {
    view! {
        <h1 class=move || themed("employee-form__title", dark.get())>"Add new employee"</h1>

        <div class=move || themed("employee-form__card", dark.get())>
            <div class="employee-form__grid">
                <div class="employee-form__full-row">
                    <ImageUpload dark=dark preview=preview/>
                </div>

                {EmployeeField::ALL
                    .into_iter()
                    .map(|field| view! { <FormField field=field dark=dark/> })
                    .collect_view()}

                <div class="employee-form__full-row employee-form__actions">
                    <button type="button" class="employee-form__submit">
                        "Add Employee"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// One labeled input.
#[component]
fn FormField(field: EmployeeField, #[prop(into)] dark: Signal<bool>) -> impl IntoView {
    view! {
        <div class="employee-form__field">
            <label class=move || themed("employee-form__label", dark.get())>{field.label()}</label>
            <input
                type=field.input_type()
                placeholder=field.placeholder()
                class=move || themed("employee-form__input", dark.get())
            />
        </div>
    }
}
