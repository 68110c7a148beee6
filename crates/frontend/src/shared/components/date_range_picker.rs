use crate::shared::date_utils::relative_month_bounds;
use leptos::prelude::*;
use thaw::*;

/// DateRangePicker component - two native date inputs with quick month buttons
///
/// Emits `(from, to)` as `yyyy-mm-dd`; an empty string means the bound is open.
#[component]
pub fn DateRangePicker(
    /// Start date in yyyy-mm-dd format
    #[prop(into)]
    date_from: Signal<String>,

    /// End date in yyyy-mm-dd format
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback when the range changes (from, to)
    on_change: Callback<(String, String)>,

    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        on_change.run((new_from, date_to.get_untracked()));
    };

    let on_to_change = move |new_to: String| {
        on_change.run((date_from.get_untracked(), new_to));
    };

    let pick_month = move |offset: i32| {
        if let Some(bounds) = relative_month_bounds(offset) {
            on_change.run(bounds);
        }
    };

    let has_range = move || !date_from.get().is_empty() || !date_to.get().is_empty();

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_from
                    on:input=move |ev| on_from_change(event_target_value(&ev))
                />
                <div>"–"</div>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_to
                    on:input=move |ev| on_to_change(event_target_value(&ev))
                />
                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| pick_month(-1)
                    >
                        "-1M"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| pick_month(0)
                    >
                        "0M"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        disabled=Signal::derive(move || !has_range())
                        on_click=move |_| on_change.run((String::new(), String::new()))
                    >
                        "✕"
                    </Button>
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}
