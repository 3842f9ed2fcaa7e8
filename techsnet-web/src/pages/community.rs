use crate::api::TechsNetClient;
use crate::components::community_card::CommunityCard;
use crate::config::{COMMUNITY_PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use crate::models::community_state::{DirectoryAction, DirectoryState};
use crate::routes::Route;
use gloo_timers::callback::Timeout;
use i18nrs::yew::use_translation;
use shared::models::{Community, RequestCommunityResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::use_visible;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
struct ScrollTriggerProps {
    on_visible: Callback<()>,
    /// Bumped whenever a page lands, so a trigger still in view fires again.
    loaded: usize,
}

/// Sentinel below the last card; asks for the next page while in view.
#[function_component(ScrollTrigger)]
fn scroll_trigger(props: &ScrollTriggerProps) -> Html {
    let node = use_node_ref();
    let visible = use_visible(node.clone(), false);
    {
        let on_visible = props.on_visible.clone();
        use_effect_with((visible, props.loaded), move |(visible, _)| {
            if *visible {
                on_visible.emit(());
            }
            || ()
        });
    }
    html! {
        <div ref={node} class="flex justify-center py-6">
            <span class="loading loading-dots loading-md"></span>
        </div>
    }
}

/// Translation key for an accepted request, or the inline error otherwise.
fn request_message(response: RequestCommunityResponse) -> Result<&'static str, String> {
    if response.exists {
        Ok("community.request.exists")
    } else if response.created {
        Ok("community.request.created")
    } else {
        Err("The community request was not accepted. Please try again.".to_string())
    }
}

#[function_component(RequestCommunityForm)]
fn request_community_form() -> Html {
    let (i18n, ..) = use_translation();
    let name = use_state(String::new);
    let status = use_state(|| None::<Result<&'static str, String>>);
    let busy = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_submit = {
        let name = name.clone();
        let status = status.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let requested = name.trim().to_string();
            if requested.is_empty() || *busy {
                return;
            }
            busy.set(true);
            let name = name.clone();
            let status = status.clone();
            let busy = busy.clone();
            spawn_local(async move {
                match TechsNetClient::shared().request_community(&requested).await {
                    Ok(response) => {
                        let outcome = request_message(response);
                        if outcome.is_ok() {
                            name.set(String::new());
                        } else {
                            log::warn!("community request for {requested} neither existed nor was created");
                        }
                        status.set(Some(outcome));
                    }
                    Err(err) => {
                        log::error!("community request failed: {err}");
                        status.set(Some(Err(err.to_string())));
                    }
                }
                busy.set(false);
            });
        })
    };

    html! {
        <form class="card bg-base-200 shadow-sm" onsubmit={on_submit}>
            <div class="card-body gap-3">
                <h3 class="card-title text-base">{i18n.t("community.request.title")}</h3>
                <div class="join w-full">
                    <input
                        class="input input-bordered join-item flex-1"
                        placeholder={i18n.t("community.request.placeholder")}
                        value={(*name).clone()}
                        oninput={on_name}
                    />
                    <button class="btn btn-secondary join-item" type="submit" disabled={*busy}>
                        {i18n.t("community.request.submit")}
                    </button>
                </div>
                {
                    match &*status {
                        Some(Ok(key)) => html! { <div class="alert alert-success"><span>{i18n.t(key)}</span></div> },
                        Some(Err(message)) => html! { <div class="alert alert-error"><span>{message.clone()}</span></div> },
                        None => html! {},
                    }
                }
            </div>
        </form>
    }
}

#[function_component(CommunityPage)]
pub fn community_page() -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let directory = use_reducer(DirectoryState::default);
    let search = use_state(String::new);
    let debounce = use_mut_ref(|| None::<Timeout>);

    {
        let directory = directory.clone();
        use_effect_with((), move |_| {
            directory.dispatch(DirectoryAction::Search(String::new()));
            || ()
        });
    }

    {
        let directory = directory.clone();
        use_effect_with(directory.pending.clone(), move |pending| {
            if let Some(request) = pending.clone() {
                spawn_local(async move {
                    let result = TechsNetClient::shared()
                        .communities(&request.search, request.page, COMMUNITY_PAGE_SIZE)
                        .await
                        .map_err(|err| {
                            log::error!("community directory request failed: {err}");
                            err.to_string()
                        });
                    directory.dispatch(DirectoryAction::Loaded { request, result });
                });
            }
            || ()
        });
    }

    let on_search = {
        let search = search.clone();
        let directory = directory.clone();
        let debounce = debounce.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let term = input.value();
            search.set(term.clone());
            let directory = directory.clone();
            // Replacing the handle cancels the previous timer.
            *debounce.borrow_mut() = Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                directory.dispatch(DirectoryAction::Search(term));
            }));
        })
    };

    let on_select = Callback::from(move |community: Community| {
        let Some(navigator) = &navigator else {
            return;
        };
        if let Err(err) =
            navigator.push_with_query(&Route::Query, &[("community", community.name.as_str())])
        {
            log::error!("could not open query form for {}: {err:?}", community.name);
        }
    });

    let on_visible = {
        let directory = directory.clone();
        Callback::from(move |()| directory.dispatch(DirectoryAction::LoadMore))
    };

    let cards = directory.communities.iter().map(|community| {
        html! {
            <CommunityCard community={community.clone()} on_select={on_select.clone()} />
        }
    });

    let empty = !directory.loading() && directory.communities.is_empty() && directory.error.is_none();

    html! {
        <div class="flex flex-col gap-6">
            <div class="flex flex-col gap-2">
                <h1 class="text-2xl font-bold">{i18n.t("community.title")}</h1>
                <input
                    class="input input-bordered w-full"
                    type="search"
                    placeholder={i18n.t("community.search")}
                    value={(*search).clone()}
                    oninput={on_search}
                />
            </div>
            if let Some(message) = &directory.error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }
            if empty {
                <p class="text-base-content/70">{i18n.t("community.empty")}</p>
            }
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                { for cards }
            </div>
            if directory.show_scroll_trigger() {
                <ScrollTrigger {on_visible} loaded={directory.communities.len()} />
            }
            <RequestCommunityForm />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_outcome_messages() {
        let exists = RequestCommunityResponse {
            exists: true,
            created: false,
        };
        let created = RequestCommunityResponse {
            exists: false,
            created: true,
        };
        assert_eq!(request_message(exists), Ok("community.request.exists"));
        assert_eq!(request_message(created), Ok("community.request.created"));
    }

    #[test]
    fn unaccepted_request_is_an_error() {
        let neither = RequestCommunityResponse {
            exists: false,
            created: false,
        };
        assert!(request_message(neither).is_err());
    }
}
