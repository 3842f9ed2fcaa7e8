use i18nrs::yew::use_translation;
use shared::workaround::{ParsedResponse, Workaround};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WorkaroundCardProps {
    /// 1-based position in the list.
    pub index: usize,
    pub workaround: Workaround,
}

#[function_component(WorkaroundCard)]
pub fn workaround_card(props: &WorkaroundCardProps) -> Html {
    let (i18n, ..) = use_translation();
    let workaround = &props.workaround;

    let section = |key: &str, body: &str| -> Html {
        if body.trim().is_empty() {
            return html! {};
        }
        html! {
            <div class="mb-3">
                <h4 class="font-semibold text-sm uppercase text-base-content/70">{i18n.t(key)}</h4>
                <p class="whitespace-pre-line">{body.to_string()}</p>
            </div>
        }
    };

    html! {
        <div class="card bg-base-200 shadow-sm">
            <div class="card-body">
                <h3 class="card-title">{format!("{} {}", i18n.t("workaround.title"), props.index)}</h3>
                {section("workaround.problem", &workaround.problem_statement)}
                {section("workaround.root_cause", &workaround.root_cause)}
                if !workaround.steps.is_empty() {
                    <div class="mb-3">
                        <h4 class="font-semibold text-sm uppercase text-base-content/70">{i18n.t("workaround.solution")}</h4>
                        <ol class="list-none space-y-1">
                            { for workaround.steps.iter().map(|step| html! { <li>{step.clone()}</li> }) }
                        </ol>
                    </div>
                }
                if !workaround.references.is_empty() {
                    <div>
                        <h4 class="font-semibold text-sm uppercase text-base-content/70">{i18n.t("workaround.references")}</h4>
                        <ul class="list-disc ml-5">
                            { for workaround.references.iter().map(|reference| html! { <li class="break-all">{reference.clone()}</li> }) }
                        </ul>
                    </div>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct WorkaroundListProps {
    pub parsed: ParsedResponse,
}

/// Every record of a parsed answer, including the synthetic error record.
#[function_component(WorkaroundList)]
pub fn workaround_list(props: &WorkaroundListProps) -> Html {
    html! {
        <div class="flex flex-col gap-4">
            { for props.parsed.records().into_iter().enumerate().map(|(position, workaround)| html! {
                <WorkaroundCard index={position + 1} {workaround} />
            }) }
        </div>
    }
}
