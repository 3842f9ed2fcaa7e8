use crate::config::SIDEBAR_BREAKPOINT_PX;
use crate::containers::{header::Header, sidebar::Sidebar};
use crate::models::shell_state::{SidebarAction, SidebarState};
use crate::routes::Route;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, TouchEvent, window};
use yew::{
    Callback, Children, Html, Properties, UseReducerHandle, classes, function_component, html,
    use_effect_with, use_reducer,
};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: Route,
}

fn viewport_width() -> f64 {
    window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(SIDEBAR_BREAKPOINT_PX)
}

fn set_body_overflow(value: &str) {
    let Some(body) = window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    if let Err(err) = body.style().set_property("overflow", value) {
        log::warn!("could not set body overflow: {err:?}");
    }
}

fn touch_x(event: &TouchEvent, ended: bool) -> Option<f64> {
    let touches = if ended {
        event.changed_touches()
    } else {
        event.touches()
    };
    touches.get(0).map(|touch| f64::from(touch.client_x()))
}

/// Window listeners feeding the sidebar, dropped when the shell unmounts.
fn shell_listeners(sidebar: &UseReducerHandle<SidebarState>) -> Vec<EventListener> {
    let Some(window) = window() else {
        return Vec::new();
    };

    let resize = EventListener::new(&window, "resize", {
        let sidebar = sidebar.clone();
        move |_event| {
            sidebar.dispatch(SidebarAction::Resized {
                width: viewport_width(),
            });
        }
    });
    let keydown = EventListener::new(&window, "keydown", {
        let sidebar = sidebar.clone();
        move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                sidebar.dispatch(SidebarAction::KeyPressed { key: event.key() });
            }
        }
    });
    let touch_start = EventListener::new(&window, "touchstart", {
        let sidebar = sidebar.clone();
        move |event| {
            if let Some(x) = event
                .dyn_ref::<TouchEvent>()
                .and_then(|event| touch_x(event, false))
            {
                sidebar.dispatch(SidebarAction::TouchStarted { x });
            }
        }
    });
    let touch_end = EventListener::new(&window, "touchend", {
        let sidebar = sidebar.clone();
        move |event| {
            if let Some(x) = event
                .dyn_ref::<TouchEvent>()
                .and_then(|event| touch_x(event, true))
            {
                sidebar.dispatch(SidebarAction::TouchEnded { x });
            }
        }
    });

    vec![resize, keydown, touch_start, touch_end]
}

/// The authenticated shell: header, collapsible sidebar and page content.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let sidebar = use_reducer(|| SidebarState::new(viewport_width()));

    {
        let sidebar = sidebar.clone();
        use_effect_with((), move |_| {
            let listeners = shell_listeners(&sidebar);
            move || drop(listeners)
        });
    }

    {
        let locked = sidebar.scroll_locked();
        use_effect_with(locked, move |locked| {
            set_body_overflow(if *locked { "hidden" } else { "" });
            || set_body_overflow("")
        });
    }

    let on_toggle = {
        let sidebar = sidebar.clone();
        Callback::from(move |()| sidebar.dispatch(SidebarAction::Toggle))
    };
    let on_close = {
        let sidebar = sidebar.clone();
        Callback::from(move |()| sidebar.dispatch(SidebarAction::Close))
    };
    let on_navigate = {
        let sidebar = sidebar.clone();
        Callback::from(move |()| sidebar.dispatch(SidebarAction::Navigated))
    };

    html! {
        <div class="min-h-screen bg-base-100 flex flex-col">
            <Header {on_toggle} sidebar_open={sidebar.open} />
            <div class="flex flex-1">
                <Sidebar
                    open={sidebar.open}
                    current_route={props.current_route.clone()}
                    {on_close}
                    {on_navigate}
                />
                <main class={classes!(
                    "flex-grow",
                    "p-4",
                    "transition-all",
                    "duration-300",
                    sidebar.open.then_some("md:ml-64")
                )}>
                    {props.children.clone()}
                </main>
            </div>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <p>{"© 2025 TechsNetwork"}</p>
            </footer>
        </div>
    }
}
