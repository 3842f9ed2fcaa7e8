use yew::{Html, function_component, html};

/// Neutral placeholder shown while the session is being resolved.
#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen animate-fadeIn" role="status">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <div class="text-xl font-medium">{"TechsNetwork"}</div>
                <div class="mt-3 flex items-center gap-2">
                    <span class="loading loading-dots loading-md"></span>
                </div>
            </div>
        </div>
    }
}
