use crate::{auth::use_auth, routes::Route};
use i18nrs::yew::use_translation;
use shared::oauth::{self, OAuthOutcome, RedirectTarget};
use shared::session::now_secs;
use yew::prelude::*;
use yew_router::prelude::*;

fn route_for(target: RedirectTarget) -> Route {
    match target {
        RedirectTarget::Home => Route::Home,
        RedirectTarget::PublicEntry => Route::Login,
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window()
        && let Err(err) = window.alert_with_message(message)
    {
        log::warn!("could not show alert: {err:?}");
    }
}

/// Return leg of the OAuth flow: `/auth-success?token=...`.
///
/// Resolves once on mount and always navigates away, replacing this entry
/// in the history so the token does not linger in the back stack.
#[function_component(AuthSuccessPage)]
pub fn auth_success_page() -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_auth();
    let navigator = use_navigator();
    let query = use_location()
        .map(|location| location.query_str().to_string())
        .unwrap_or_default();

    {
        let failure_message = i18n.t("auth_success.failed");
        use_effect_with((), move |_| {
            let outcome = oauth::resolve(&query, now_secs());
            let target = route_for(outcome.redirect());
            if outcome.is_failure() {
                alert(&failure_message);
            }
            if let OAuthOutcome::Accepted { token, profile } = outcome {
                auth.login(&token, profile);
            }
            match navigator {
                Some(navigator) => navigator.replace(&target),
                None => log::error!("no router available to leave /auth-success"),
            }
            || ()
        });
    }

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <p class="font-semibold">{i18n.t("auth_success.pending")}</p>
        </div>
    }
}
