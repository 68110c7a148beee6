use crate::shared::icons::icon;
use leptos::prelude::*;

/// `1234567` -> `"1,234,567"`
pub fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Counter value (None = not loaded)
    #[prop(into)]
    value: Signal<Option<u64>>,
    #[prop(into)]
    loading: Signal<bool>,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Route opened by clicking the card
    #[prop(optional)]
    href: Option<&'static str>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None if loading.get() => "…".to_string(),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    let body = view! {
        <div class="stat-card__icon">
            {icon(icon_name)}
        </div>
        <div class="stat-card__content">
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{formatted}</div>
            {subtitle_view}
        </div>
    };

    match href {
        Some(path) => view! { <a class="stat-card stat-card--link" href=path>{body}</a> }.into_any(),
        None => view! { <div class="stat-card">{body}</div> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
