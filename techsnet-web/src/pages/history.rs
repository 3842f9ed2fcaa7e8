use crate::{api::TechsNetClient, auth::use_auth, components::workaround_card::WorkaroundList};
use i18nrs::yew::use_translation;
use shared::models::{HistoryEntry, HistoryResponse};
use shared::workaround;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum HistoryLoad {
    Loading,
    Loaded(HistoryResponse),
    Failed(String),
}

#[derive(Properties, PartialEq)]
struct HistoryRowProps {
    entry: HistoryEntry,
    on_open: Callback<HistoryEntry>,
}

#[function_component(HistoryRow)]
fn history_row(props: &HistoryRowProps) -> Html {
    let (i18n, ..) = use_translation();
    let entry = &props.entry;
    let onclick = {
        let entry = entry.clone();
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(entry.clone()))
    };

    html! {
        <li>
            <button class="card bg-base-200 shadow-sm w-full text-left hover:shadow-md" {onclick}>
                <div class="card-body gap-2">
                    <div class="flex flex-wrap items-center gap-2 text-sm">
                        <span class="badge badge-primary">{entry.community.clone()}</span>
                        <span class="text-base-content/60">{entry.display_date()}</span>
                        if let Some(label) = entry.images_label() {
                            <span class="badge badge-outline">{label}</span>
                        }
                        if entry.is_answered() {
                            <span class="badge badge-success">{i18n.t("history.answered")}</span>
                        }
                    </div>
                    <p>{entry.preview()}</p>
                </div>
            </button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct HistoryDetailProps {
    entry: HistoryEntry,
    on_back: Callback<()>,
}

#[function_component(HistoryDetail)]
fn history_detail(props: &HistoryDetailProps) -> Html {
    let (i18n, ..) = use_translation();
    let entry = &props.entry;
    let onclick = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };
    let parsed = entry.response.as_deref().map(workaround::parse);

    html! {
        <div class="flex flex-col gap-4">
            <button class="btn btn-ghost self-start" {onclick}>{i18n.t("history.back")}</button>
            <div class="card bg-base-200">
                <div class="card-body gap-2">
                    <div class="flex gap-2 text-sm">
                        <span class="badge badge-primary">{entry.community.clone()}</span>
                        <span class="text-base-content/60">{entry.display_date()}</span>
                    </div>
                    <p class="whitespace-pre-line">{entry.query.clone()}</p>
                </div>
            </div>
            {
                match parsed {
                    Some(parsed) => html! { <WorkaroundList {parsed} /> },
                    None => html! { <p class="text-base-content/70">{i18n.t("history.unanswered")}</p> },
                }
            }
        </div>
    }
}

#[function_component(HistoryPage)]
pub fn history_page() -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_auth();
    let load = use_state(|| HistoryLoad::Loading);
    let selected = use_state(|| None::<HistoryEntry>);

    {
        let load = load.clone();
        let token = auth.token();
        use_effect_with(token, move |token| {
            match token.clone() {
                None => load.set(HistoryLoad::Failed("User not authenticated".to_string())),
                Some(token) => {
                    load.set(HistoryLoad::Loading);
                    spawn_local(async move {
                        match TechsNetClient::shared().history(&token).await {
                            Ok(history) => load.set(HistoryLoad::Loaded(history)),
                            Err(err) => {
                                log::error!("history request failed: {err}");
                                load.set(HistoryLoad::Failed(err.to_string()));
                            }
                        }
                    });
                }
            }
            || ()
        });
    }

    if let Some(entry) = (*selected).clone() {
        let on_back = {
            let selected = selected.clone();
            Callback::from(move |()| selected.set(None))
        };
        return html! { <HistoryDetail {entry} {on_back} /> };
    }

    let on_open = {
        let selected = selected.clone();
        Callback::from(move |entry: HistoryEntry| selected.set(Some(entry)))
    };

    let body = match &*load {
        HistoryLoad::Loading => html! {
            <div class="flex justify-center py-8"><span class="loading loading-spinner loading-lg"></span></div>
        },
        HistoryLoad::Failed(message) => html! {
            <div class="alert alert-error"><span>{message.clone()}</span></div>
        },
        HistoryLoad::Loaded(history) => html! {
            <>
                <p class="text-base-content/70">{history.summary()}</p>
                <ul class="flex flex-col gap-3">
                    { for history.queries.iter().map(|entry| html! {
                        <HistoryRow entry={entry.clone()} on_open={on_open.clone()} />
                    }) }
                </ul>
            </>
        },
    };

    html! {
        <div class="flex flex-col gap-4 max-w-3xl mx-auto">
            <h1 class="text-2xl font-bold">{i18n.t("history.title")}</h1>
            {body}
        </div>
    }
}
