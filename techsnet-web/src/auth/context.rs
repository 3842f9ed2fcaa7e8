use crate::api::TechsNetClient;
use crate::storage::BrowserStorage;
use shared::models::UserProfile;
use shared::session::{AuthState, Session, now_secs};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Handle on the single session instance, provided at the root of the app.
///
/// Views never touch storage directly: reads go through [`AuthContext::user`]
/// and [`AuthContext::token`], writes through [`AuthContext::login`] and
/// [`AuthContext::logout`].
#[derive(Debug, Clone)]
pub struct AuthContext {
    session: Rc<RefCell<Session<BrowserStorage>>>,
    state: UseStateHandle<AuthState>,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session) && *self.state == *other.state
    }
}

impl AuthContext {
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.state.user.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn login(&self, token: &str, profile: UserProfile) {
        self.session.borrow_mut().login(token, profile);
        self.publish();
    }

    pub fn logout(&self) {
        self.session.borrow_mut().logout();
        self.publish();
    }

    /// Bearer token for a view's own backend calls.
    pub fn token(&self) -> Option<String> {
        self.session.borrow().token()
    }

    fn publish(&self) {
        self.state.set(self.session.borrow().state().clone());
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Restores the stored session before the first render, then asks the
/// backend to confirm it without blocking the UI.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let session = use_mut_ref(|| Session::new(BrowserStorage));
    let unverified = use_mut_ref(|| session.borrow_mut().restore(now_secs()));
    let state = use_state(|| session.borrow().state().clone());

    {
        let session = session.clone();
        let state = state.clone();
        use_effect_with((), move |_| {
            if let Some(token) = unverified.borrow_mut().take() {
                spawn_local(async move {
                    let verdict = TechsNetClient::shared().verify_session(&token).await;
                    log::debug!("session verification: {verdict:?}");
                    let changed = session.borrow_mut().apply_verification(&token, verdict);
                    if changed {
                        state.set(session.borrow().state().clone());
                    }
                });
            }
            || ()
        });
    }

    let context = AuthContext { session, state };

    html! {
        <ContextProvider<AuthContext> {context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// The session context. Must be used below [`AuthProvider`].
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider is mounted at the application root")
}
