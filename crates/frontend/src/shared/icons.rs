use leptos::prelude::*;

/// Inline SVG icon by name. Unknown names render an empty square.
pub fn icon(name: &str) -> AnyView {
    match name {
        "home" => svg(view! {
            <path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>
            <polyline points="9 22 9 12 15 12 15 22"/>
        }.into_any()),
        "users" => svg(view! {
            <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }.into_any()),
        "building" => svg(view! {
            <path d="M3 22h18"/>
            <path d="M6 22V8l6-5 6 5v14"/>
            <rect x="9" y="13" width="6" height="9"/>
        }.into_any()),
        "phone" => svg(view! {
            <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"/>
        }.into_any()),
        "briefcase" => svg(view! {
            <rect x="2" y="7" width="20" height="14" rx="2"/>
            <path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>
        }.into_any()),
        "credit-card" => svg(view! {
            <rect x="2" y="4" width="20" height="16" rx="2"/>
            <path d="M2 10h20"/>
        }.into_any()),
        "megaphone" => svg(view! {
            <path d="M3 11l18-5v12L3 13v-2z"/>
            <path d="M11.6 16.8a3 3 0 1 1-5.8-1.6"/>
        }.into_any()),
        "file-text" => svg(view! {
            <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/>
            <path d="M14 2v6h6"/>
            <path d="M16 13H8"/>
            <path d="M16 17H8"/>
        }.into_any()),
        "filter" => svg(view! {
            <polygon points="22 3 2 3 10 12.46 10 19 14 21 14 12.46 22 3"/>
        }.into_any()),
        "plus" => svg(view! {
            <path d="M12 5v14"/>
            <path d="M5 12h14"/>
        }.into_any()),
        "refresh" => svg(view! {
            <polyline points="23 4 23 10 17 10"/>
            <path d="M20.49 15a9 9 0 1 1-2.12-9.36L23 10"/>
        }.into_any()),
        "edit" => svg(view! {
            <path d="M12 20h9"/>
            <path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>
        }.into_any()),
        "trash" => svg(view! {
            <polyline points="3 6 5 6 21 6"/>
            <path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/>
            <path d="M10 11v6"/>
            <path d="M14 11v6"/>
        }.into_any()),
        "check" => svg(view! {
            <polyline points="20 6 9 17 4 12"/>
        }.into_any()),
        "x" => svg(view! {
            <path d="M18 6L6 18"/>
            <path d="M6 6l12 12"/>
        }.into_any()),
        "save" => svg(view! {
            <path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/>
            <polyline points="17 21 17 13 7 13 7 21"/>
            <polyline points="7 3 7 8 15 8"/>
        }.into_any()),
        "chevron-left" => svg(view! {
            <polyline points="15 18 9 12 15 6"/>
        }.into_any()),
        "chevron-right" => svg(view! {
            <polyline points="9 18 15 12 9 6"/>
        }.into_any()),
        "eye" => svg(view! {
            <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/>
            <circle cx="12" cy="12" r="3"/>
        }.into_any()),
        "log-out" => svg(view! {
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
            <polyline points="16 17 21 12 16 7"/>
            <path d="M21 12H9"/>
        }.into_any()),
        "menu" => svg(view! {
            <path d="M3 12h18"/>
            <path d="M3 6h18"/>
            <path d="M3 18h18"/>
        }.into_any()),
        "user" => svg(view! {
            <path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/>
            <circle cx="12" cy="7" r="4"/>
        }.into_any()),
        _ => svg(view! { <rect x="4" y="4" width="16" height="16" rx="2"/> }.into_any()),
    }
}

fn svg(body: AnyView) -> AnyView {
    view! {
        <svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {body}
        </svg>
    }
    .into_any()
}
