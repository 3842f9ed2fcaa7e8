use crate::api::TechsNetClient;
use i18nrs::yew::use_translation;
use yew::prelude::*;

/// Public entry: the only way in is the Google sign-in flow.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let href = TechsNetClient::shared().google_login_url();

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body items-center text-center">
                    <h2 class="card-title text-2xl">{i18n.t("login.title")}</h2>
                    <p class="text-base-content/70">{i18n.t("login.subtitle")}</p>
                    <div class="card-actions mt-6 w-full">
                        <a class="btn btn-primary w-full" {href}>
                            {i18n.t("login.google")}
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
