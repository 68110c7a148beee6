use contracts::domain::a006_career::aggregate::{Career, CareerDto, EMPLOYMENT_TYPES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_career::api;
use crate::shared::components::form_field::{select_field, text_area, text_field};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::context::use_session;

#[component]
pub fn CareerDetails(
    /// `None` opens an empty form
    career: Option<Career>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let is_edit = career.is_some();
    let form = RwSignal::new(career.as_ref().map(CareerDto::from_career).unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = match &career {
        Some(c) => format!("Edit opening: {}", c.job_title),
        None => "New opening".to_string(),
    };

    let on_save = move |_| {
        let mut dto = form.get_untracked();
        dto.author = session.get_untracked().stamp();
        if let Err(message) = dto.validate() {
            set_error.set(Some(message));
            return;
        }
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::save_career(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    set_error.set(Some(format!("Failed to save: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame title=title on_close=on_close modal_class="modal--form">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                {text_field(form, "job_title", "Job title", "text", "e.g. Sales Executive", |f| f.job_title.as_str(), |f, v| f.job_title = v)}
                {text_field(form, "location", "Location", "text", "City", |f| f.location.as_str(), |f, v| f.location = v)}
                {select_field(form, "employment_type", "Employment type", &EMPLOYMENT_TYPES, |f| f.employment_type.as_str(), |f, v| f.employment_type = v)}
                {text_field(form, "experience", "Experience", "text", "e.g. 2-4 years", |f| f.experience.as_str(), |f, v| f.experience = v)}
                {text_area(form, "description", "Description", 6, |f| f.description.as_str(), |f, v| f.description = v)}
            </div>

            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || saving.get())
                    on_click=on_save
                >
                    {icon("save")}
                    {move || match (saving.get(), is_edit) {
                        (true, _) => " Saving...",
                        (false, true) => " Save",
                        (false, false) => " Publish",
                    }}
                </Button>
            </Flex>
        </ModalFrame>
    }
}
