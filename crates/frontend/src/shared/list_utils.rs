/// Shared list widgets: debounced search input and match highlighting
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Debounce of the search box, ms
const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Highlights case-insensitive matches of `filter` inside `text`.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();

    // Lower-casing may change byte offsets for non-ASCII text; highlight only when it doesn't
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(view! {
            <mark class="search-match">{text[actual_pos..match_end].to_string()}</mark>
        }.into_any());

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Table cell text for an optional field: missing or blank becomes "-".
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Badge modifier for the workflow statuses used across the back office.
pub fn status_badge_class(status: &str) -> &'static str {
    match status.trim().to_lowercase().as_str() {
        "approved" | "active" | "closed" | "success" | "paid" => "badge badge--success",
        "pending" | "new" | "contacted" | "interested" => "badge badge--warning",
        "rejected" | "expired" | "cancelled" | "failed" => "badge badge--error",
        _ => "badge badge--neutral",
    }
}

/// Whether the search box must take over the filter value, dropping any
/// text still waiting for the debounce.
fn needs_resync(external: &str, shown: &str, forced: bool) -> bool {
    forced || external != shown
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value after the debounce
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
    /// Reset counter of the owning list; a change drops unsent text
    #[prop(optional, into)]
    reset: Option<Signal<u64>>,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local value shown in the input before the debounce fires
    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_debounce = move || {
        if let (Some(window), Some(timeout_id)) = (web_sys::window(), debounce_timeout.get_value()) {
            window.clear_timeout_with_handle(timeout_id);
        }
        debounce_timeout.set_value(None);
    };

    // Follow the filter value when it changes from outside (Reset, navigation)
    let external = Memo::new(move |_| value.get());
    Effect::new(move |prev_reset: Option<u64>| {
        let current = external.get();
        let generation = reset.map(|r| r.get()).unwrap_or_default();
        let forced = prev_reset.is_some_and(|prev| prev != generation);
        if needs_resync(&current, &input_value.get_untracked(), forced) {
            cancel_debounce();
            set_input_value.set(current);
        }
        generation
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };

        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::once(move || {
            debounce_timeout.set_value(None);
            on_change.run(new_value);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => {
                closure.forget();
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(_) => log::warn!("setTimeout failed, search debounce skipped"),
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        cancel_debounce();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || if is_filter_active() { "search-input__field search-input__field--active" } else { "search-input__field" }
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter title="Clear">
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("Hyderabad")), "Hyderabad");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(None), "-");
    }

    #[test]
    fn test_status_badge_class() {
        assert_eq!(status_badge_class("Approved"), "badge badge--success");
        assert_eq!(status_badge_class("pending"), "badge badge--warning");
        assert_eq!(status_badge_class("expired"), "badge badge--error");
        assert_eq!(status_badge_class("whatever"), "badge badge--neutral");
    }

    #[test]
    fn test_search_box_follows_outside_changes() {
        // debounce delivered what the user typed: nothing to do
        assert!(!needs_resync("villa", "villa", false));
        // Reset cleared the query while "villa" was shown
        assert!(needs_resync("", "villa", false));
        // Reset with the query already empty but text still pending
        assert!(needs_resync("", "vil", true));
        assert!(!needs_resync("", "", false));
    }
}
