use shared::models::{Community, CommunityPage};
use std::rc::Rc;
use yew::Reducible;

/// A directory request the page should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Issue order; only the most recent request may update the directory.
    pub seq: u64,
    pub search: String,
    /// 1-based page number.
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryAction {
    /// Start over with a new search term.
    Search(String),
    /// Fetch the page after the last one loaded.
    LoadMore,
    /// A request finished.
    Loaded {
        request: PageRequest,
        result: Result<CommunityPage, String>,
    },
}

/// State of the community directory.
///
/// Responses are matched against the request that produced them: a response
/// for anything but the latest request is discarded, so a slow answer for an
/// old search term cannot overwrite a newer one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectoryState {
    pub search: String,
    pub communities: Vec<Community>,
    pub has_more: bool,
    pub error: Option<String>,
    /// Request waiting to be sent, or in flight.
    pub pending: Option<PageRequest>,
    last_page: u32,
    issued: u64,
}

impl DirectoryState {
    pub fn loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The infinite-scroll sentinel is only rendered while more pages exist.
    pub fn show_scroll_trigger(&self) -> bool {
        self.has_more && self.error.is_none()
    }

    fn issue(&mut self, page: u32) {
        self.issued += 1;
        self.pending = Some(PageRequest {
            seq: self.issued,
            search: self.search.clone(),
            page,
        });
    }

    pub fn apply(&self, action: DirectoryAction) -> Self {
        let mut next = self.clone();
        match action {
            DirectoryAction::Search(search) => {
                next.search = search.trim().to_string();
                next.communities.clear();
                next.has_more = false;
                next.error = None;
                next.last_page = 0;
                next.issue(1);
            }
            DirectoryAction::LoadMore => {
                if self.has_more && !self.loading() {
                    next.issue(self.last_page + 1);
                }
            }
            DirectoryAction::Loaded { request, result } => {
                if self.pending.as_ref() != Some(&request) {
                    log::debug!("discarding superseded directory response #{}", request.seq);
                    return next;
                }
                next.pending = None;
                match result {
                    Ok(page) => {
                        next.communities.extend(page.communities);
                        next.has_more = page.has_more;
                        next.last_page = request.page;
                        next.error = None;
                    }
                    Err(message) => {
                        next.error = Some(message);
                    }
                }
            }
        }
        next
    }
}

impl Reducible for DirectoryState {
    type Action = DirectoryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(names: &[&str], has_more: bool) -> CommunityPage {
        CommunityPage {
            communities: names
                .iter()
                .map(|name| Community {
                    name: (*name).to_string(),
                    description: None,
                    members: None,
                })
                .collect(),
            has_more,
        }
    }

    impl DirectoryState {
        fn card_labels(&self) -> Vec<&str> {
            self.communities
                .iter()
                .map(|community| community.name.as_str())
                .collect()
        }
    }

    fn loaded(state: &DirectoryState, result: Result<CommunityPage, String>) -> DirectoryState {
        let request = state.pending.clone().expect("a request is pending");
        state.apply(DirectoryAction::Loaded { request, result })
    }

    #[test]
    fn search_for_java_renders_one_card_without_trigger() {
        let state = DirectoryState::default().apply(DirectoryAction::Search("java".into()));
        let request = state.pending.clone().unwrap();
        assert_eq!(request.search, "java");
        assert_eq!(request.page, 1);

        let state = loaded(&state, Ok(page(&["Java"], false)));
        assert_eq!(state.card_labels(), vec!["Java"]);
        assert!(!state.show_scroll_trigger());
        assert!(!state.loading());
    }

    #[test]
    fn load_more_appends_next_page() {
        let state = DirectoryState::default().apply(DirectoryAction::Search(String::new()));
        let state = loaded(&state, Ok(page(&["Java", "Python"], true)));
        assert!(state.show_scroll_trigger());

        let state = state.apply(DirectoryAction::LoadMore);
        assert_eq!(state.pending.as_ref().unwrap().page, 2);
        let state = loaded(&state, Ok(page(&["SQL"], false)));
        assert_eq!(state.card_labels(), vec!["Java", "Python", "SQL"]);
        assert!(!state.show_scroll_trigger());
    }

    #[test]
    fn load_more_is_ignored_while_loading_or_exhausted() {
        let state = DirectoryState::default().apply(DirectoryAction::Search(String::new()));
        let before = state.pending.clone();
        let state = state.apply(DirectoryAction::LoadMore);
        assert_eq!(state.pending, before);

        let state = loaded(&state, Ok(page(&["Java"], false)));
        let state = state.apply(DirectoryAction::LoadMore);
        assert!(state.pending.is_none());
    }

    #[test]
    fn stale_response_is_discarded() {
        let first = DirectoryState::default().apply(DirectoryAction::Search("ja".into()));
        let stale_request = first.pending.clone().unwrap();
        let second = first.apply(DirectoryAction::Search("java".into()));

        let after_stale = second.apply(DirectoryAction::Loaded {
            request: stale_request,
            result: Ok(page(&["JavaScript", "Jakarta"], true)),
        });
        assert!(after_stale.communities.is_empty());
        assert!(after_stale.loading());

        let done = loaded(&after_stale, Ok(page(&["Java"], false)));
        assert_eq!(done.card_labels(), vec!["Java"]);
    }

    #[test]
    fn failure_keeps_loaded_cards_and_hides_trigger() {
        let state = DirectoryState::default().apply(DirectoryAction::Search(String::new()));
        let state = loaded(&state, Ok(page(&["Java"], true)));
        let state = state.apply(DirectoryAction::LoadMore);
        let state = loaded(&state, Err("Unable to connect to server".into()));
        assert_eq!(state.card_labels(), vec!["Java"]);
        assert_eq!(state.error.as_deref(), Some("Unable to connect to server"));
        assert!(!state.show_scroll_trigger());
    }

    #[test]
    fn new_search_resets_results() {
        let state = DirectoryState::default().apply(DirectoryAction::Search("java".into()));
        let state = loaded(&state, Ok(page(&["Java"], true)));
        let state = state.apply(DirectoryAction::Search("  sql ".into()));
        assert!(state.communities.is_empty());
        assert_eq!(state.search, "sql");
        assert_eq!(state.pending.as_ref().unwrap().page, 1);
    }
}
