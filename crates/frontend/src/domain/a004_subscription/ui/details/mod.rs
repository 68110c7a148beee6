use contracts::domain::a004_subscription::aggregate::{Subscription, UpdateSubscriptionDto, SUBSCRIPTION_STATUSES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_subscription::api;
use crate::shared::date_utils::format_price;
use crate::shared::icons::icon;
use crate::shared::list_utils::or_dash;
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::context::use_session;

/// Status and expiry editor for one subscription.
#[component]
pub fn SubscriptionEditForm(
    subscription: Subscription,
    on_close: Callback<()>,
    /// Receives the row as saved
    on_saved: Callback<Subscription>,
) -> impl IntoView {
    let session = use_session();
    let status = RwSignal::new(subscription.subscription_status.clone().unwrap_or_default());
    let expiry = RwSignal::new(
        subscription
            .subscription_expiry_date
            .as_deref()
            .map(|d| d.split('T').next().unwrap_or(d).to_string())
            .unwrap_or_default(),
    );
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let title = format!(
        "Subscription #{} · {}",
        subscription.id,
        or_dash(subscription.name.as_deref())
    );
    let plan = format!(
        "{} · {}",
        or_dash(subscription.subscription_package.as_deref()),
        format_price(subscription.amount)
    );
    let original = StoredValue::new(subscription);

    let on_save = move |_| {
        let status_val = status.get_untracked();
        if status_val.trim().is_empty() {
            set_error.set(Some("Select a status".to_string()));
            return;
        }
        let expiry_val = expiry.get_untracked();
        let dto = UpdateSubscriptionDto {
            id: original.with_value(|s| s.id),
            subscription_status: status_val.clone(),
            subscription_expiry_date: (!expiry_val.is_empty()).then(|| expiry_val.clone()),
            updated_by: session.get_untracked().stamp().created_by,
        };

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::update_subscription(&dto).await {
                Ok(()) => {
                    let mut saved = original.get_value();
                    saved.subscription_status = Some(status_val);
                    if !expiry_val.is_empty() {
                        saved.subscription_expiry_date = Some(expiry_val);
                    }
                    on_saved.run(saved);
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to save: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame title=title on_close=on_close>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <Flex vertical=true gap=FlexGap::Medium>
                <div class="form-group">
                    <Label>"Plan"</Label>
                    <div>{plan}</div>
                </div>
                <div class="form-group">
                    <Label>"Status"</Label>
                    <select
                        prop:value=move || status.get()
                        on:change=move |ev| status.set(event_target_value(&ev))
                    >
                        <option value="">"-"</option>
                        {SUBSCRIPTION_STATUSES.iter().map(|&s| view! {
                            <option value=s selected=move || status.get() == s>{s}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <Label>"Expires on"</Label>
                    <input
                        type="date"
                        prop:value=move || expiry.get()
                        on:input=move |ev| expiry.set(event_target_value(&ev))
                    />
                </div>
                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {icon("save")}
                        {move || if saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                </Flex>
            </Flex>
        </ModalFrame>
    }
}
