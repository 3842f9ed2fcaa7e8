use crate::{api::TechsNetClient, auth::use_auth, routes::Route};
use i18nrs::yew::use_translation;
use shared::models::SubscriptionUsage;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct UsageSummaryProps {
    usage: SubscriptionUsage,
}

#[function_component(UsageSummary)]
fn usage_summary(props: &UsageSummaryProps) -> Html {
    let (i18n, ..) = use_translation();
    let usage = &props.usage;
    html! {
        <div class="stats shadow bg-base-200">
            <div class="stat">
                <div class="stat-title">{i18n.t("home.usage.queries")}</div>
                <div class="stat-value">{format!("{} / {}", usage.queries_used, usage.query_limit)}</div>
                <div class="stat-desc">{format!("{} {}", usage.remaining(), i18n.t("home.usage.remaining"))}</div>
            </div>
            <div class="stat">
                <div class="stat-title">{i18n.t("home.usage.plan")}</div>
                <div class="stat-value text-lg capitalize">{usage.status.clone()}</div>
                if usage.is_exhausted() {
                    <div class="stat-actions">
                        <Link<Route> to={Route::Subscription} classes="btn btn-warning btn-sm">
                            {i18n.t("home.usage.upgrade")}
                        </Link<Route>>
                    </div>
                }
            </div>
        </div>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_auth();
    let usage = use_state(|| None::<SubscriptionUsage>);

    {
        let usage = usage.clone();
        let token = auth.token();
        use_effect_with(token, move |token| {
            if let Some(token) = token.clone() {
                spawn_local(async move {
                    match TechsNetClient::shared().profile_by_token(&token).await {
                        Ok(profile) => usage.set(profile.subscription),
                        Err(err) => log::warn!("usage summary unavailable: {err}"),
                    }
                });
            }
            || ()
        });
    }

    html! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content text-center flex-col gap-6">
                <h1 class="text-4xl font-bold">{i18n.t("home.title")}</h1>
                <p class="max-w-xl text-base-content/80">{i18n.t("home.subtitle")}</p>
                <Link<Route> to={Route::Query} classes="btn btn-primary btn-lg">
                    <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-6 h-6" />
                    {i18n.t("home.cta")}
                </Link<Route>>
                if let Some(usage) = (*usage).clone() {
                    <UsageSummary {usage} />
                }
            </div>
        </div>
    }
}
