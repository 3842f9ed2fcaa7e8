use crate::routes::Route;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Shown instead of an error when the query allowance is used up.
#[function_component(UpgradePrompt)]
pub fn upgrade_prompt() -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <div class="alert alert-warning flex flex-col items-start gap-3" role="alert">
            <h3 class="font-bold text-lg">{i18n.t("query.quota.title")}</h3>
            <p>{i18n.t("query.quota.body")}</p>
            <Link<Route> to={Route::Subscription} classes="btn btn-primary btn-sm">
                {i18n.t("query.quota.upgrade")}
            </Link<Route>>
        </div>
    }
}
