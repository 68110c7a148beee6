use leptos::prelude::*;

use crate::shared::list_utils::status_badge_class;

/// Inline status changer for a table row
///
/// A value outside `options` (legacy data) stays selectable so the row still
/// shows what the backend returned.
#[component]
pub fn StatusSelect(
    options: &'static [&'static str],
    /// Current status of the row
    #[prop(into)]
    value: String,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    on_change: Callback<String>,
) -> impl IntoView {
    let class = format!("status-select {}", status_badge_class(&value));
    let unknown = (!value.is_empty() && !options.contains(&value.as_str())).then(|| value.clone());
    let current = value.clone();

    view! {
        <select
            class=class
            disabled=move || disabled.get()
            on:change=move |ev| {
                let next = event_target_value(&ev);
                if next != current {
                    on_change.run(next);
                }
            }
        >
            {value.is_empty().then(|| view! { <option value="" selected=true>"-"</option> })}
            {unknown.map(|v| view! { <option value=v.clone() selected=true>{v.clone()}</option> })}
            {options.iter().map(|&option| view! {
                <option value=option selected=option == value>{option}</option>
            }).collect_view()}
        </select>
    }
}
