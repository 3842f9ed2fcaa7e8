use crate::auth::guards::{RequireAuth, RequireGuest, UnmatchedRoute};
use crate::containers::layout::Layout;
use crate::pages::*;
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_icons::IconId;
use yew_router::prelude::*;

/// The portal routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/auth-success")]
    AuthSuccess,
    #[at("/home")]
    Home,
    #[at("/wallet")]
    Wallet,
    #[at("/query")]
    Query,
    #[at("/community")]
    Community,
    #[at("/history")]
    History,
    #[at("/subscription")]
    Subscription,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Who may see a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone; the view decides where to go next.
    Public,
    /// Only visitors without a session.
    Guest,
    /// Only signed-in users, rendered inside the shell.
    Member,
}

impl Route {
    pub fn access(&self) -> Access {
        match self {
            Self::Login => Access::Guest,
            Self::AuthSuccess | Self::NotFound => Access::Public,
            _ => Access::Member,
        }
    }

    /// Shell pages in sidebar order.
    pub fn nav_items() -> Vec<Route> {
        Self::iter()
            .filter(|route| route.access() == Access::Member)
            .collect()
    }

    /// Translation key of the sidebar label.
    pub fn nav_key(&self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::Wallet => "nav.wallet",
            Self::Query => "nav.query",
            Self::Community => "nav.community",
            Self::History => "nav.history",
            Self::Subscription => "nav.subscription",
            Self::Login | Self::AuthSuccess | Self::NotFound => "nav.home",
        }
    }

    pub fn icon(&self) -> IconId {
        match self {
            Self::Wallet => IconId::HeroiconsOutlineBanknotes,
            Self::Query => IconId::HeroiconsOutlineChatBubbleLeftRight,
            Self::Community => IconId::HeroiconsOutlineUserGroup,
            Self::History => IconId::HeroiconsOutlineClock,
            Self::Subscription => IconId::HeroiconsOutlineCreditCard,
            _ => IconId::HeroiconsOutlineHome,
        }
    }
}

fn member_page(route: &Route) -> Html {
    match route {
        Route::Wallet => html! { <WalletPage /> },
        Route::Query => html! { <QueryPage /> },
        Route::Community => html! { <CommunityPage /> },
        Route::History => html! { <HistoryPage /> },
        Route::Subscription => html! { <SubscriptionPage /> },
        _ => html! { <HomePage /> },
    }
}

/// Switch function for the portal routes.
pub fn switch(route: Route) -> Html {
    log::debug!("switching to route {route:?}");
    match route.access() {
        Access::Guest => html! {
            <RequireGuest>
                <LoginPage />
            </RequireGuest>
        },
        Access::Public if route == Route::AuthSuccess => html! { <AuthSuccessPage /> },
        Access::Public => html! { <UnmatchedRoute /> },
        Access::Member => {
            let page = member_page(&route);
            html! {
                <RequireAuth>
                    <Layout current_route={route}>
                        {page}
                    </Layout>
                </RequireAuth>
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_to_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Login));
        assert_eq!(Route::recognize("/auth-success"), Some(Route::AuthSuccess));
        assert_eq!(Route::recognize("/wallet"), Some(Route::Wallet));
        assert_eq!(Route::recognize("/subscription"), Some(Route::Subscription));
        assert_eq!(Route::recognize("/no/such/page"), Some(Route::NotFound));
    }

    #[test]
    fn routes_render_their_paths() {
        assert_eq!(Route::Home.to_path(), "/home");
        assert_eq!(Route::Query.to_path(), "/query");
    }

    #[test]
    fn sidebar_lists_member_pages_in_order() {
        assert_eq!(
            Route::nav_items(),
            vec![
                Route::Home,
                Route::Wallet,
                Route::Query,
                Route::Community,
                Route::History,
                Route::Subscription,
            ]
        );
    }

    #[test]
    fn access_levels() {
        assert_eq!(Route::Login.access(), Access::Guest);
        assert_eq!(Route::AuthSuccess.access(), Access::Public);
        assert_eq!(Route::NotFound.access(), Access::Public);
        assert_eq!(Route::History.access(), Access::Member);
    }
}
