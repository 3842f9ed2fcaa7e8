use crate::{auth::use_auth, routes::Route};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator();
    let (i18n, ..) = use_translation();
    let auth = use_auth();
    let Some(user) = auth.user().cloned() else {
        return html! {};
    };

    let subscription_button = {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Subscription);
            }
        });
        html! {
            <li><a {onclick}>{i18n.t("nav.subscription")}</a></li>
        }
    };

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            auth.logout();
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        });
        html! {
            <li><a {onclick}>{i18n.t("header.logout")}</a></li>
        }
    };

    let avatar = user.picture.clone().map_or_else(
        || html! { <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-6 h-6" /> },
        |src| html! { <img class="w-8 h-8 rounded-full" {src} alt="" referrerpolicy="no-referrer" /> },
    );

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                {avatar}
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-56">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ user.display_name() }</div>
                    <div class="text-xs text-base-content/70">{ &user.email }</div>
                </li>
                <div class="divider my-0"></div>
                {subscription_button}
                {logout_button}
            </ul>
        </div>
    }
}
