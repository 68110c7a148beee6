use contracts::domain::a007_static_page::aggregate::{StaticPage, StaticPageKind, UpdateStaticPageDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a007_static_page::api;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::resource::RemoteValue;
use crate::system::auth::context::use_session;

/// Plain-text editor for one public page (terms, privacy).
#[component]
pub fn StaticPageEditor(kind: StaticPageKind) -> impl IntoView {
    let session = use_session();
    let page = RemoteValue::new("static page", StaticPage::default());
    let draft = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);
    let (save_error, set_save_error) = signal::<Option<String>>(None);
    let (saved_note, set_saved_note) = signal::<Option<String>>(None);

    let load_data = move || page.load(api::fetch_page(kind));
    load_data();

    // a fresh load replaces whatever is in the editor
    Effect::new(move |_| {
        draft.set(page.data.with(|p| p.content.clone()));
    });

    let is_dirty = Signal::derive(move || page.data.with(|p| p.content != draft.get()));

    let on_save = move |_| {
        let dto = UpdateStaticPageDto {
            slug: kind.slug().to_string(),
            content: draft.get_untracked(),
            author: session.get_untracked().stamp(),
        };
        set_saving.set(true);
        set_save_error.set(None);
        set_saved_note.set(None);
        spawn_local(async move {
            match api::update_page(&dto).await {
                Ok(()) => {
                    log::info!("static page {} saved", dto.slug);
                    page.data.update(|p| p.content = dto.content);
                    set_saved_note.set(Some("Saved".to_string()));
                }
                Err(e) => set_save_error.set(Some(format!("Failed to save: {}", e))),
            }
            set_saving.set(false);
        });
    };

    view! {
        <PageFrame page_id="a007_static_page--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{kind.title()}</h1>
                    {move || page.data.with(|p| p.updated_at.clone()).map(|at| view! {
                        <span class="page__subtitle">"Last updated " {format_datetime(Some(&at))}</span>
                    })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || page.loading.get() || saving.get())
                    >
                        {icon("refresh")}
                        " Reload"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get() || page.loading.get() || !is_dirty.get())
                    >
                        {icon("save")}
                        {move || if saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || page.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || save_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || saved_note.get().map(|n| view! { <div class="alert alert--success">{n}</div> })}

                <Show
                    when=move || !page.loading.get()
                    fallback=|| view! { <Spinner /> }
                >
                    <textarea
                        class="static-page__editor"
                        rows=24
                        style="width: 100%; font-family: inherit;"
                        prop:value=move || draft.get()
                        on:input=move |ev| {
                            draft.set(event_target_value(&ev));
                            set_saved_note.set(None);
                        }
                    />
                </Show>
            </div>
        </PageFrame>
    }
}
