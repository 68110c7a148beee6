use contracts::domain::a005_ad::aggregate::{CreateAdDto, AD_TYPES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_ad::api;
use crate::shared::components::form_field::{select_field, text_area, text_field};
use crate::shared::date_utils::today_iso;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::context::use_session;

/// New ad form; ads are replaced rather than edited.
#[component]
pub fn AdCreateForm(on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let session = use_session();
    let form = RwSignal::new(CreateAdDto {
        start_date: today_iso(),
        ..Default::default()
    });
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

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
            match api::create_ad(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    set_error.set(Some(format!("Failed to create ad: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame title="New ad" on_close=on_close modal_class="modal--form">
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                {text_field(form, "ad_title", "Title", "text", "", |f| f.ad_title.as_str(), |f, v| f.ad_title = v)}
                {text_area(form, "ad_description", "Description", 3, |f| f.ad_description.as_str(), |f, v| f.ad_description = v)}
                {select_field(form, "ad_type", "Placement", &AD_TYPES, |f| f.ad_type.as_str(), |f, v| f.ad_type = v)}
                {text_field(form, "ad_link", "Link", "url", "https://", |f| f.ad_link.as_str(), |f, v| f.ad_link = v)}
                {text_field(form, "image_url", "Image URL", "url", "https://", |f| f.image_url.as_str(), |f, v| f.image_url = v)}
                {text_field(form, "city", "City", "text", "Leave empty for all cities", |f| f.city.as_str(), |f, v| f.city = v)}
                {text_field(form, "start_date", "Starts", "date", "", |f| f.start_date.as_str(), |f, v| f.start_date = v)}
                {text_field(form, "end_date", "Ends", "date", "", |f| f.end_date.as_str(), |f, v| f.end_date = v)}
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
                    {move || if saving.get() { " Saving..." } else { " Create" }}
                </Button>
            </Flex>
        </ModalFrame>
    }
}
