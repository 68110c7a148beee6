use leptos::prelude::*;

/// Labelled input bound to one text field of a form signal.
///
/// `get` and `set` select the field, so every form reuses the same markup:
/// `text_field(form, "name", "Name", "text", "", |f| f.name.as_str(), |f, v| f.name = v)`
pub fn text_field<F>(
    form: RwSignal<F>,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    get: fn(&F) -> &str,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                prop:value=move || form.with(|f| get(f).to_string())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                placeholder=placeholder
            />
        </div>
    }
}

/// Same as [`text_field`] with a multi-line textarea.
pub fn text_area<F>(
    form: RwSignal<F>,
    id: &'static str,
    label: &'static str,
    rows: u32,
    get: fn(&F) -> &str,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <textarea
                id=id
                rows=rows
                prop:value=move || form.with(|f| get(f).to_string())
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}

/// Labelled dropdown over a fixed list of values.
pub fn select_field<F>(
    form: RwSignal<F>,
    id: &'static str,
    label: &'static str,
    options: &'static [&'static str],
    get: fn(&F) -> &str,
    set: fn(&mut F, String),
) -> impl IntoView
where
    F: Send + Sync + 'static,
{
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                prop:value=move || form.with(|f| get(f).to_string())
                on:change=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            >
                <option value="">"Select..."</option>
                {options.iter().map(|&option| view! {
                    <option value=option selected=move || form.with(|f| get(f) == option)>{option}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
