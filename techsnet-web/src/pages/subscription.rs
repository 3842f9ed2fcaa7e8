use crate::{api::TechsNetClient, auth::use_auth, components::subscription_plans::SubscriptionPlans};
use i18nrs::yew::use_translation;
use shared::models::SubscriptionRecord;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct CurrentPlanProps {
    record: SubscriptionRecord,
}

#[function_component(CurrentPlan)]
fn current_plan(props: &CurrentPlanProps) -> Html {
    let (i18n, ..) = use_translation();
    let record = &props.record;
    let field = |value: &Option<String>| value.clone().unwrap_or_else(|| "N/A".to_string());
    let badge = if record.is_active() {
        "badge-success"
    } else {
        "badge-ghost"
    };

    html! {
        <div class="card bg-base-200 shadow-sm">
            <div class="card-body">
                <h2 class="card-title">
                    {i18n.t("subscription.current")}
                    <span class={classes!("badge", badge)}>{field(&record.status)}</span>
                </h2>
                <p>{format!("{}: {}", i18n.t("subscription.plan"), field(&record.plan))}</p>
                <p>{format!("{}: {}", i18n.t("subscription.next_billing"), field(&record.next_billing_date))}</p>
            </div>
        </div>
    }
}

#[function_component(SubscriptionPage)]
pub fn subscription_page() -> Html {
    let auth = use_auth();
    let record = use_state(|| None::<SubscriptionRecord>);
    let email = auth.user().map(|user| user.email.clone());

    {
        let record = record.clone();
        use_effect_with(email, move |email| {
            if let Some(email) = email.clone() {
                spawn_local(async move {
                    match TechsNetClient::shared().subscription(&email).await {
                        Ok(found) => record.set(Some(found)),
                        Err(err) => log::warn!("subscription lookup failed: {err}"),
                    }
                });
            }
            || ()
        });
    }

    html! {
        <div class="flex flex-col gap-8 max-w-4xl mx-auto">
            if let Some(record) = (*record).clone() {
                <CurrentPlan {record} />
            }
            <SubscriptionPlans />
        </div>
    }
}
