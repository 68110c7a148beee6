//! Sidebar navigation grouped by back-office area.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Overview",
            items: vec![("/", "Dashboard", "home")],
        },
        MenuGroup {
            label: "Listings",
            items: vec![
                ("/properties", "Properties", "building"),
                ("/leads", "Leads", "phone"),
            ],
        },
        MenuGroup {
            label: "People",
            items: vec![
                ("/users", "Users", "users"),
                ("/employees", "Employees", "briefcase"),
            ],
        },
        MenuGroup {
            label: "Business",
            items: vec![
                ("/subscriptions", "Subscriptions", "credit-card"),
                ("/ads", "Ads", "megaphone"),
                ("/careers", "Careers", "briefcase"),
            ],
        },
        MenuGroup {
            label: "Content",
            items: vec![
                ("/pages/terms", "Terms & Conditions", "file-text"),
                ("/pages/privacy", "Privacy Policy", "file-text"),
            ],
        },
    ]
}

/// `/` matches only itself; other entries also match their sub-paths.
fn is_active(current: &str, path: &str) -> bool {
    if path == "/" {
        current == "/"
    } else {
        current == path || current.starts_with(&format!("{}/", path))
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|(path, label, icon_name)| {
                            view! {
                                <A href=path>
                                    <div class=move || {
                                        if location.pathname.with(|p| is_active(p, path)) {
                                            "app-sidebar__item app-sidebar__item--active"
                                        } else {
                                            "app-sidebar__item"
                                        }
                                    }>
                                        <div class="app-sidebar__item-content">
                                            {icon(icon_name)}
                                            <span>{label}</span>
                                        </div>
                                    </div>
                                </A>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_menu_item() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/leads", "/"));
        assert!(is_active("/pages/terms", "/pages/terms"));
        assert!(is_active("/employees/12", "/employees"));
        assert!(!is_active("/employeesx", "/employees"));
    }
}
