use super::context::use_auth;
use crate::components::loading::Loading;
use crate::routes::Route;
use shared::session::AuthState;
use yew::prelude::*;
use yew_router::prelude::Redirect;

/// Precondition a guard enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// A signed-in user.
    Authenticated,
    /// No signed-in user.
    Guest,
}

/// What a guard does with its children for a given session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not resolved yet: show the placeholder, decide nothing.
    Pending,
    Render,
    Redirect(Route),
}

pub fn decide(requirement: Requirement, state: &AuthState) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    match (requirement, state.is_authenticated()) {
        (Requirement::Authenticated, true) | (Requirement::Guest, false) => GuardDecision::Render,
        (Requirement::Authenticated, false) => GuardDecision::Redirect(Route::Login),
        (Requirement::Guest, true) => GuardDecision::Redirect(Route::Home),
    }
}

/// Where an unmatched path goes: home with a session, the login entry without.
pub fn unmatched_target(state: &AuthState) -> Option<Route> {
    if state.loading {
        None
    } else if state.is_authenticated() {
        Some(Route::Home)
    } else {
        Some(Route::Login)
    }
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    #[prop_or_default]
    pub children: Children,
}

fn guarded(requirement: Requirement, state: &AuthState, children: &Children) -> Html {
    match decide(requirement, state) {
        GuardDecision::Pending => html! { <Loading /> },
        GuardDecision::Render => html! { <>{children.clone()}</> },
        GuardDecision::Redirect(to) => html! { <Redirect<Route> {to} /> },
    }
}

/// Renders its children only for a signed-in user.
#[function_component(RequireAuth)]
pub fn require_auth(props: &GuardProps) -> Html {
    let auth = use_auth();
    guarded(Requirement::Authenticated, auth.state(), &props.children)
}

/// Renders its children only when nobody is signed in.
#[function_component(RequireGuest)]
pub fn require_guest(props: &GuardProps) -> Html {
    let auth = use_auth();
    guarded(Requirement::Guest, auth.state(), &props.children)
}

#[function_component(UnmatchedRoute)]
pub fn unmatched_route() -> Html {
    let auth = use_auth();
    match unmatched_target(auth.state()) {
        Some(to) => html! { <Redirect<Route> {to} /> },
        None => html! { <Loading /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::UserProfile;

    fn loading() -> AuthState {
        AuthState::default()
    }

    fn signed_out() -> AuthState {
        AuthState {
            user: None,
            loading: false,
        }
    }

    fn signed_in() -> AuthState {
        AuthState {
            user: Some(UserProfile::new("a@b.com", None)),
            loading: false,
        }
    }

    #[test]
    fn both_guards_wait_while_loading() {
        assert_eq!(
            decide(Requirement::Authenticated, &loading()),
            GuardDecision::Pending
        );
        assert_eq!(decide(Requirement::Guest, &loading()), GuardDecision::Pending);
    }

    #[test]
    fn loading_wins_even_with_a_user() {
        let state = AuthState {
            loading: true,
            ..signed_in()
        };
        assert_eq!(
            decide(Requirement::Authenticated, &state),
            GuardDecision::Pending
        );
    }

    #[test]
    fn require_auth_redirects_signed_out_to_login() {
        assert_eq!(
            decide(Requirement::Authenticated, &signed_out()),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(
            decide(Requirement::Authenticated, &signed_in()),
            GuardDecision::Render
        );
    }

    #[test]
    fn require_guest_redirects_signed_in_home() {
        assert_eq!(
            decide(Requirement::Guest, &signed_in()),
            GuardDecision::Redirect(Route::Home)
        );
        assert_eq!(decide(Requirement::Guest, &signed_out()), GuardDecision::Render);
    }

    #[test]
    fn unmatched_paths_follow_the_session() {
        assert_eq!(unmatched_target(&loading()), None);
        assert_eq!(unmatched_target(&signed_in()), Some(Route::Home));
        assert_eq!(unmatched_target(&signed_out()), Some(Route::Login));
    }
}
