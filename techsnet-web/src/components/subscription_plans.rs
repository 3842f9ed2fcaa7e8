use crate::{api::TechsNetClient, auth::use_auth};
use i18nrs::yew::use_translation;
use shared::models::Plan;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn redirect_to(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(url) {
        log::error!("could not open checkout page: {err:?}");
    }
}

/// Plan cards with a subscribe button that hands off to the hosted checkout.
#[function_component(SubscriptionPlans)]
pub fn subscription_plans() -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_auth();
    let pending = use_state(|| None::<Plan>);
    let error = use_state(|| None::<String>);

    let subscribe = {
        let pending = pending.clone();
        let error = error.clone();
        Callback::from(move |plan: Plan| {
            let Some(token) = auth.token() else {
                error.set(Some("You must be logged in to subscribe.".to_string()));
                return;
            };
            pending.set(Some(plan));
            error.set(None);
            let pending = pending.clone();
            let error = error.clone();
            spawn_local(async move {
                match TechsNetClient::shared()
                    .create_payment_intent(&token, plan)
                    .await
                {
                    Ok(intent) => redirect_to(&intent.url),
                    Err(err) => {
                        log::error!("payment initialization failed: {err}");
                        error.set(Some(
                            "Payment initialization failed. Please try again.".to_string(),
                        ));
                    }
                }
                pending.set(None);
            });
        })
    };

    let card = |plan: Plan| -> Html {
        let busy = *pending == Some(plan);
        let onclick = {
            let subscribe = subscribe.clone();
            Callback::from(move |_: MouseEvent| subscribe.emit(plan))
        };
        let featured = plan == Plan::Yearly;
        html! {
            <div class={classes!("card", "bg-base-200", "shadow", featured.then_some("border-2 border-primary"))}>
                <div class="card-body items-center text-center">
                    if featured {
                        <span class="badge badge-primary">
                            {format!("{} {}%", i18n.t("subscription.save"), Plan::yearly_savings_percent())}
                        </span>
                    }
                    <h3 class="card-title">{i18n.t(plan.title_key())}</h3>
                    <p class="text-4xl font-light">
                        {format!("${}", plan.amount())}
                        <span class="text-base text-base-content/60">{plan.period()}</span>
                    </p>
                    <button class="btn btn-primary mt-4" disabled={pending.is_some()} {onclick}>
                        if busy {
                            <span class="loading loading-spinner loading-sm"></span>
                        }
                        {i18n.t("subscription.subscribe")}
                    </button>
                </div>
            </div>
        }
    };

    html! {
        <section class="flex flex-col gap-6">
            <h2 class="text-2xl text-center">{i18n.t("subscription.plans.title")}</h2>
            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }
            <div class="grid gap-6 md:grid-cols-2">
                { for Plan::ALL.into_iter().map(card) }
            </div>
        </section>
    }
}
