use crate::{auth::use_auth, components::user_dropdown::UserDropdown, routes::Route};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub sidebar_open: bool,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_auth();

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let toggle_icon = if props.sidebar_open {
        IconId::HeroiconsOutlineXMark
    } else {
        IconId::HeroiconsOutlineBars3
    };

    html! {
        <nav class="navbar justify-between bg-base-300 sticky top-0 z-30">
            <div class="flex items-center gap-2">
                <button
                    class="btn btn-ghost btn-square"
                    aria-label={i18n.t("header.menu")}
                    aria-expanded={props.sidebar_open.to_string()}
                    {onclick}
                >
                    <Icon icon_id={toggle_icon} class="w-6 h-6" />
                </button>
                <Link<Route> to={Route::Home} classes="btn btn-ghost text-lg">
                    {i18n.t("app.title")}
                </Link<Route>>
            </div>
            {
                auth.user().map_or_else(Html::default, |user| html! {
                    <div class="flex items-center gap-2">
                        <span class="hidden sm:inline text-sm text-base-content/80">
                            { user.display_name() }
                        </span>
                        <UserDropdown />
                    </div>
                })
            }
        </nav>
    }
}
