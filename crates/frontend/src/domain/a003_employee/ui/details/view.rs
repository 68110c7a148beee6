use contracts::domain::a003_employee::aggregate::{Employee, EMPLOYEE_ROLES};
use leptos::prelude::*;
use thaw::*;

use super::view_model::EmployeeDetailsViewModel;
use crate::shared::components::form_field::{select_field, text_field};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::context::use_session;

#[component]
pub fn EmployeeDetails(
    /// `None` opens an empty form
    employee: Option<Employee>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = EmployeeDetailsViewModel::new(employee.as_ref());
    let session = use_session();
    let form = vm.form;

    let title = if vm.is_edit_mode() {
        format!("Edit employee: {}", form.with_untracked(|f| f.name.clone()))
    } else {
        "New employee".to_string()
    };

    view! {
        <ModalFrame title=title on_close=on_close modal_class="modal--form">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                {text_field(form, "name", "Name", "text", "Full name", |f| f.name.as_str(), |f, v| f.name = v)}
                {text_field(form, "email", "Email", "email", "name@company.com", |f| f.email.as_str(), |f, v| f.email = v)}
                {text_field(form, "mobile", "Mobile", "tel", "10 digits", |f| f.mobile.as_str(), |f, v| f.mobile = v)}
                {text_field(form, "designation", "Designation", "text", "e.g. Sales Manager", |f| f.designation.as_str(), |f, v| f.designation = v)}
                {select_field(form, "user_type", "Role", &EMPLOYEE_ROLES, |f| f.user_type.as_str(), |f, v| f.user_type = v)}
                {text_field(form, "city", "City", "text", "", |f| f.city.as_str(), |f, v| f.city = v)}
                {text_field(form, "state", "State", "text", "", |f| f.state.as_str(), |f, v| f.state = v)}

                <Show when=move || !vm.is_edit_mode()>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || form.with(|f| f.password.clone().unwrap_or_default())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.password = (!value.is_empty()).then_some(value));
                            }
                            placeholder="At least 6 characters"
                        />
                    </div>
                </Show>
            </div>

            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || vm.saving.get())
                    on_click=move |_| vm.save_command(&session.get_untracked(), on_saved)
                >
                    {icon("save")}
                    {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                </Button>
            </Flex>
        </ModalFrame>
    }
}
