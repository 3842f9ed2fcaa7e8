use crate::api::{ImageUpload, QuestionSubmission, TechsNetClient};
use crate::auth::use_auth;
use crate::components::{upgrade_prompt::UpgradePrompt, workaround_card::WorkaroundList};
use crate::models::query_state::{
    QueryPhase, check_attachment, community_options, preselected_value, validate_question,
};
use i18nrs::yew::use_translation;
use serde::Deserialize;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollToOptions,
};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Navigation parameters accepted by `/query`.
#[derive(Debug, Default, Deserialize)]
struct QueryParams {
    community: Option<String>,
}

async fn read_upload(file: File) -> Result<ImageUpload, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let mime_type = match file.type_() {
        kind if kind.is_empty() => "application/octet-stream".to_string(),
        kind => kind,
    };
    Ok(ImageUpload {
        file_name: file.name(),
        mime_type,
        bytes,
    })
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(QueryPage)]
pub fn query_page() -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_auth();
    let preselected = use_location()
        .and_then(|location| location.query::<QueryParams>().ok())
        .and_then(|params| params.community)
        .unwrap_or_default();

    let community = use_state(|| preselected_value(&preselected));
    let question = use_state(String::new);
    let attachments = use_state(Vec::<File>::new);
    let notice = use_state(|| None::<String>);
    let phase = use_state(QueryPhase::default);

    {
        let community = community.clone();
        use_effect_with(preselected.clone(), move |preselected| {
            if !preselected.is_empty() {
                community.set(preselected_value(preselected));
            }
            || ()
        });
    }

    let on_community = {
        let community = community.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                community.set(select.value());
            }
        })
    };

    let on_question = {
        let question = question.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                question.set(area.value());
            }
        })
    };

    let on_files = {
        let attachments = attachments.clone();
        let notice = notice.clone();
        Callback::from(move |event: Event| {
            let Some(files) = event
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
            else {
                return;
            };
            let mut accepted = (*attachments).clone();
            let mut rejected = None;
            for file in (0..files.length()).filter_map(|index| files.get(index)) {
                match check_attachment(&file.name(), file.size()) {
                    Ok(()) => accepted.push(file),
                    Err(err) => rejected = Some(err.to_string()),
                }
            }
            attachments.set(accepted);
            notice.set(rejected);
        })
    };

    let remove_attachment = |index: usize| {
        let attachments = attachments.clone();
        Callback::from(move |_: MouseEvent| {
            let mut remaining = (*attachments).clone();
            if index < remaining.len() {
                remaining.remove(index);
            }
            attachments.set(remaining);
        })
    };

    let on_submit = {
        let community = community.clone();
        let question = question.clone();
        let attachments = attachments.clone();
        let notice = notice.clone();
        let phase = phase.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if phase.is_submitting() {
                return;
            }
            let query = match validate_question(&question) {
                Ok(query) => query,
                Err(message) => {
                    notice.set(Some(message.to_string()));
                    return;
                }
            };
            notice.set(None);
            phase.set(QueryPhase::Submitting);

            let token = auth.token();
            let community = (*community).clone();
            let files = (*attachments).clone();
            let phase = phase.clone();
            spawn_local(async move {
                let mut images = Vec::with_capacity(files.len());
                for file in files {
                    match read_upload(file).await {
                        Ok(image) => images.push(image),
                        Err(err) => log::warn!("skipping unreadable attachment: {err:?}"),
                    }
                }
                let submission = QuestionSubmission {
                    query,
                    community,
                    images,
                };
                let result = TechsNetClient::shared()
                    .ask(token.as_deref(), submission)
                    .await;
                phase.set(QueryPhase::from_result(result));
            });
        })
    };

    let on_reset = {
        let community = community.clone();
        let question = question.clone();
        let attachments = attachments.clone();
        let notice = notice.clone();
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| {
            community.set(String::new());
            question.set(String::new());
            attachments.set(Vec::new());
            notice.set(None);
            phase.set(QueryPhase::Idle);
            scroll_to_top();
        })
    };

    let options = community_options(&community).into_iter().map(|(value, label)| {
        let selected = value == *community;
        html! { <option {value} {selected}>{label}</option> }
    });

    let attachment_list = attachments.iter().enumerate().map(|(index, file)| {
        html! {
            <li class="flex items-center gap-2">
                <span class="truncate">{file.name()}</span>
                <button type="button" class="btn btn-ghost btn-xs" onclick={remove_attachment(index)}>
                    {i18n.t("query.remove_image")}
                </button>
            </li>
        }
    });

    let submitting = phase.is_submitting();
    let outcome = match &*phase {
        QueryPhase::Answered(parsed) => html! {
            <>
                <WorkaroundList parsed={parsed.clone()} />
                <button class="btn btn-outline self-start" onclick={on_reset}>
                    {i18n.t("query.ask_another")}
                </button>
            </>
        },
        QueryPhase::QuotaExceeded => html! { <UpgradePrompt /> },
        QueryPhase::Failed(message) => html! {
            <div class="alert alert-error"><span>{message.clone()}</span></div>
        },
        QueryPhase::Idle | QueryPhase::Submitting => html! {},
    };

    html! {
        <div class="flex flex-col gap-6 max-w-3xl mx-auto">
            <form class="flex flex-col gap-4" onsubmit={on_submit}>
                <select class="select select-bordered w-full" onchange={on_community}>
                    <option value="" selected={community.is_empty()}>{i18n.t("query.community_placeholder")}</option>
                    { for options }
                </select>
                <textarea
                    class="textarea textarea-bordered w-full min-h-32"
                    placeholder={i18n.t("query.placeholder")}
                    value={(*question).clone()}
                    oninput={on_question}
                />
                <label class="flex flex-col gap-2">
                    <span class="text-sm">{i18n.t("query.attach")}</span>
                    <input
                        class="file-input file-input-bordered w-full"
                        type="file"
                        accept="image/*"
                        multiple=true
                        onchange={on_files}
                    />
                </label>
                if !attachments.is_empty() {
                    <ul class="flex flex-col gap-1 text-sm">{ for attachment_list }</ul>
                }
                if let Some(message) = &*notice {
                    <div class="alert alert-warning"><span>{message.clone()}</span></div>
                }
                <button class="btn btn-primary" type="submit" disabled={submitting}>
                    if submitting {
                        <span class="loading loading-spinner loading-sm"></span>
                        {i18n.t("query.submitting")}
                    } else {
                        {i18n.t("query.submit")}
                    }
                </button>
            </form>
            {outcome}
        </div>
    }
}
