mod api;
mod app;
mod auth;
mod components;
mod config;
mod containers;
mod language;
mod models;
mod pages;
mod routes;
mod storage;

use app::App;
use config::FrontendConfig;
use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use language::{DEFAULT_LANGUAGE, supported_languages};
use std::collections::HashMap;
use yew::{Html, Renderer, function_component, html};

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <I18nProvider ..config>
            <App />
        </I18nProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let config = FrontendConfig::new();
    if let Err(err) = console_log::init_with_level(config.log_level) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    log::info!("starting TechsNetwork portal against {}", config.api_base_url);

    match mount_point() {
        Some(root) => Renderer::<InternationalApp>::with_root(root).render(),
        None => Renderer::<InternationalApp>::new().render(),
    };
}

/// The `#app` mount point, when the host page provides one.
fn mount_point() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id("app")
}
