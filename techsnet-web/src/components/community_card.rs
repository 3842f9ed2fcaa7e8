use shared::models::Community;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct CommunityCardProps {
    pub community: Community,
    pub on_select: Callback<Community>,
}

#[function_component(CommunityCard)]
pub fn community_card(props: &CommunityCardProps) -> Html {
    let onclick = {
        let community = props.community.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(community.clone()))
    };
    let community = &props.community;

    html! {
        <button class="card bg-base-200 shadow-sm hover:shadow-md text-left transition" {onclick}>
            <div class="card-body">
                <h3 class="card-title">
                    <Icon icon_id={IconId::HeroiconsOutlineUserGroup} class="w-5 h-5" />
                    {community.name.clone()}
                </h3>
                if let Some(description) = &community.description {
                    <p class="text-sm text-base-content/70">{description.clone()}</p>
                }
                if let Some(members) = community.members {
                    <p class="text-xs text-base-content/60">{format!("{members} members")}</p>
                }
            </div>
        </button>
    }
}
