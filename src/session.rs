//! Session state: one state container with a reducer-style transition
//! function per user action, plus a routing table deriving the active view.

use crate::registry::find_metric;

/// Top-level navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Analytics,
    Reports,
}

/// The view derived from the current session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Overview,
    Analytics,
    Reports,
    /// Drill-down for a dashboard metric
    MetricDetail { metric_id: String },
    /// Fallback detail for items without a dedicated drill-down
    GenericDetail { item_id: String },
    /// Deep-dive charts reached from the analytics tab
    AdvancedAnalytics { metric_id: String },
    /// Placeholder page reached only through footer navigation
    Construction { page_title: String },
}

/// User actions the reducer understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LogIn { username: String },
    LogOut,
    SelectTab(Tab),
    SelectTile { item_id: String },
    OpenConstruction { page_title: String },
    Back,
}

/// Single-writer session state. All mutation goes through `apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    authenticated: bool,
    username: Option<String>,
    tab: Tab,
    selected_item: Option<String>,
    construction_title: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            authenticated: false,
            username: None,
            tab: Tab::Overview,
            selected_item: None,
            construction_title: None,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected_item.as_deref()
    }

    /// Apply one user action
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::LogIn { username } => {
                self.authenticated = true;
                self.username = Some(username);
                self.tab = Tab::Overview;
                self.selected_item = None;
                self.construction_title = None;
            }
            Action::LogOut => *self = Self::default(),
            Action::SelectTab(tab) => {
                self.tab = tab;
                // tab changes always drop the drill-down selection; callers
                // also reset scroll position here
                self.selected_item = None;
                self.construction_title = None;
            }
            Action::SelectTile { item_id } => {
                self.selected_item = Some(item_id);
            }
            Action::OpenConstruction { page_title } => {
                self.construction_title = Some(page_title);
            }
            Action::Back => {
                if self.construction_title.take().is_some() {
                    self.tab = Tab::Overview;
                }
                self.selected_item = None;
            }
        }
    }

    /// Derive the active view. Detail routing is a decision table over
    /// `(tab, selected item)`: the analytics tab always deep-dives, the
    /// overview tab drills down only for registered dashboard metrics.
    pub fn current_view(&self) -> View {
        if !self.authenticated {
            return View::Login;
        }
        if let Some(ref title) = self.construction_title {
            return View::Construction {
                page_title: title.clone(),
            };
        }
        match (self.tab, &self.selected_item) {
            (Tab::Analytics, Some(id)) => View::AdvancedAnalytics {
                metric_id: id.clone(),
            },
            (Tab::Overview, Some(id)) if find_metric(id).is_some() => View::MetricDetail {
                metric_id: id.clone(),
            },
            (_, Some(id)) => View::GenericDetail {
                item_id: id.clone(),
            },
            (Tab::Overview, None) => View::Overview,
            (Tab::Analytics, None) => View::Analytics,
            (Tab::Reports, None) => View::Reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> SessionState {
        let mut state = SessionState::new();
        state.apply(Action::LogIn {
            username: "test".to_string(),
        });
        state
    }

    #[test]
    fn unauthenticated_session_shows_login() {
        let state = SessionState::new();
        assert_eq!(state.current_view(), View::Login);
        assert!(!state.is_authenticated());
    }

    #[test]
    fn login_lands_on_overview_with_username() {
        let state = logged_in();
        assert_eq!(state.current_view(), View::Overview);
        assert_eq!(state.username(), Some("test"));
    }

    #[test]
    fn analytics_tab_routes_any_tile_to_deep_dive() {
        let mut state = logged_in();
        state.apply(Action::SelectTab(Tab::Analytics));
        state.apply(Action::SelectTile {
            item_id: "overtime".to_string(),
        });
        assert_eq!(
            state.current_view(),
            View::AdvancedAnalytics {
                metric_id: "overtime".to_string()
            }
        );
    }

    #[test]
    fn overview_tab_routes_known_metric_to_detail() {
        let mut state = logged_in();
        state.apply(Action::SelectTile {
            item_id: "overtime".to_string(),
        });
        assert_eq!(
            state.current_view(),
            View::MetricDetail {
                metric_id: "overtime".to_string()
            }
        );
    }

    #[test]
    fn overview_tab_routes_unknown_item_to_generic_detail() {
        let mut state = logged_in();
        state.apply(Action::SelectTile {
            item_id: "announcements".to_string(),
        });
        assert_eq!(
            state.current_view(),
            View::GenericDetail {
                item_id: "announcements".to_string()
            }
        );
    }

    #[test]
    fn changing_tabs_clears_the_selection() {
        let mut state = logged_in();
        state.apply(Action::SelectTile {
            item_id: "vacancy".to_string(),
        });
        assert!(state.selected_item().is_some());
        state.apply(Action::SelectTab(Tab::Reports));
        assert!(state.selected_item().is_none());
        assert_eq!(state.current_view(), View::Reports);
    }

    #[test]
    fn construction_is_reached_only_by_footer_and_backs_out_to_overview() {
        let mut state = logged_in();
        state.apply(Action::SelectTab(Tab::Reports));
        state.apply(Action::OpenConstruction {
            page_title: "Careers".to_string(),
        });
        assert_eq!(
            state.current_view(),
            View::Construction {
                page_title: "Careers".to_string()
            }
        );
        state.apply(Action::Back);
        assert_eq!(state.current_view(), View::Overview);
    }

    #[test]
    fn back_from_detail_returns_to_the_tab_root() {
        let mut state = logged_in();
        state.apply(Action::SelectTab(Tab::Analytics));
        state.apply(Action::SelectTile {
            item_id: "sick-hours".to_string(),
        });
        state.apply(Action::Back);
        assert_eq!(state.current_view(), View::Analytics);
    }

    #[test]
    fn logout_resets_everything() {
        let mut state = logged_in();
        state.apply(Action::SelectTab(Tab::Analytics));
        state.apply(Action::SelectTile {
            item_id: "overtime".to_string(),
        });
        state.apply(Action::LogOut);
        assert_eq!(state, SessionState::default());
        assert_eq!(state.current_view(), View::Login);
    }
}
