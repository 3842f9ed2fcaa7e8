use crate::routes::Route;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::Icon;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub open: bool,
    pub current_route: Route,
    pub on_close: Callback<()>,
    pub on_navigate: Callback<()>,
}

/// Navigation drawer. On narrow viewports it overlays the page behind a
/// backdrop that closes it when tapped.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let (i18n, ..) = use_translation();

    let backdrop = props.open.then(|| {
        let on_close = props.on_close.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_close.emit(()));
        html! { <div class="fixed inset-0 z-10 bg-black/40 md:hidden" {onclick}></div> }
    });

    let items = Route::nav_items().into_iter().map(|route| {
        let active = route == props.current_route;
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(()));
        let label = i18n.t(route.nav_key());
        html! {
            <li {onclick}>
                <Link<Route>
                    to={route.clone()}
                    classes={classes!("gap-3", active.then_some("menu-active"))}
                >
                    <Icon icon_id={route.icon()} class="w-5 h-5" />
                    {label}
                </Link<Route>>
            </li>
        }
    });

    html! {
        <>
            {backdrop}
            <aside
                class={classes!(
                    "fixed", "top-16", "bottom-0", "left-0", "z-20", "w-64",
                    "bg-base-200", "transition-transform", "duration-300",
                    if props.open { "translate-x-0" } else { "-translate-x-full" }
                )}
                aria-hidden={(!props.open).to_string()}
            >
                <ul class="menu p-4 gap-1">
                    { for items }
                </ul>
            </aside>
        </>
    }
}
