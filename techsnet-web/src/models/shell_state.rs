use crate::config::{SIDEBAR_BREAKPOINT_PX, SWIPE_CLOSE_THRESHOLD_PX};
use std::rc::Rc;
use yew::Reducible;

/// Events the shell feeds into the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarAction {
    /// Header menu button.
    Toggle,
    Close,
    /// A navigation entry was chosen.
    Navigated,
    /// The window was resized to `width` logical pixels.
    Resized { width: f64 },
    /// A key was pressed anywhere in the document.
    KeyPressed { key: String },
    TouchStarted { x: f64 },
    TouchEnded { x: f64 },
}

/// Open/closed state of the sidebar for the current page lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarState {
    pub open: bool,
    /// Whether the viewport is at or above the breakpoint.
    pub wide: bool,
    swipe_start: Option<f64>,
}

impl SidebarState {
    pub fn new(width: f64) -> Self {
        Self {
            open: false,
            wide: width >= SIDEBAR_BREAKPOINT_PX,
            swipe_start: None,
        }
    }

    /// Document scrolling is locked while the sidebar covers a narrow viewport.
    pub fn scroll_locked(&self) -> bool {
        self.open && !self.wide
    }

    pub fn apply(&self, action: SidebarAction) -> Self {
        let mut next = self.clone();
        match action {
            SidebarAction::Toggle => next.open = !self.open,
            SidebarAction::Close => next.open = false,
            SidebarAction::Navigated => {
                if !self.wide {
                    next.open = false;
                }
            }
            SidebarAction::Resized { width } => {
                next.wide = width >= SIDEBAR_BREAKPOINT_PX;
                if !self.wide && next.wide {
                    next.open = false;
                }
            }
            SidebarAction::KeyPressed { key } => {
                if key == "Escape" {
                    next.open = false;
                }
            }
            SidebarAction::TouchStarted { x } => next.swipe_start = Some(x),
            SidebarAction::TouchEnded { x } => {
                if let Some(start) = self.swipe_start
                    && start - x > SWIPE_CLOSE_THRESHOLD_PX
                {
                    next.open = false;
                }
                next.swipe_start = None;
            }
        }
        next
    }
}

impl Reducible for SidebarState {
    type Action = SidebarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}
