use leptos::prelude::*;

/// Dropdown for one facet of a list filter
///
/// The first option ("All") maps to an empty value, which removes the facet.
#[component]
pub fn FacetSelect(
    #[prop(into)]
    label: String,

    /// Distinct values present in the loaded data
    #[prop(into)]
    options: Signal<Vec<String>>,

    /// Selected value, empty for "All"
    #[prop(into)]
    value: Signal<String>,

    on_change: Callback<String>,

    /// Display text per option value; defaults to the value itself
    #[prop(optional)]
    option_label: Option<fn(&str) -> String>,
) -> impl IntoView {
    let render_label = option_label.unwrap_or(|v: &str| v.to_string());

    view! {
        <label class="facet-select">
            <span class="facet-select__label">{label}</span>
            <select
                class=move || {
                    if value.get().is_empty() {
                        "facet-select__field"
                    } else {
                        "facet-select__field facet-select__field--active"
                    }
                }
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">"All"</option>
                {move || {
                    let selected = value.get();
                    let mut options = options.get();
                    // keep a selection visible after a reload dropped its last record
                    if !selected.is_empty() && !options.contains(&selected) {
                        options.push(selected.clone());
                    }
                    options
                        .into_iter()
                        .map(|option| {
                            let is_selected = option == selected;
                            let text = render_label(&option);
                            view! {
                                <option value=option selected=is_selected>{text}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
