/// Screen navigation state machine
///
/// Home, Map and Profile are peer tabs reached through the bottom
/// navigation. Detail and Review stack on top of whichever tab the user
/// came from, and Filter is a full-screen overlay over Home.

use log::debug;

/// Every screen the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    Filter,
    Detail,
    Review,
    Profile,
    Map,
}

impl Screen {
    /// Bottom navigation tabs, in display order
    pub const TABS: [Screen; 3] = [Screen::Home, Screen::Map, Screen::Profile];

    /// Top-level screens that show the bottom navigation
    pub fn is_tab(&self) -> bool {
        matches!(self, Screen::Home | Screen::Map | Screen::Profile)
    }

    /// Label used in the bottom navigation
    pub fn tab_label(&self) -> &'static str {
        match self {
            Screen::Home => "Discover",
            Screen::Map => "Map",
            Screen::Profile => "Profile",
            Screen::Filter => "Filters",
            Screen::Detail => "Details",
            Screen::Review => "Review",
        }
    }
}

/// Tracks the active screen, where Detail returns to, and the spot under
/// inspection.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Screen,
    /// Screen to return to when leaving Detail
    detail_parent: Option<Screen>,
    selected_place_id: Option<String>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn detail_parent(&self) -> Option<Screen> {
        self.detail_parent
    }

    pub fn selected_place_id(&self) -> Option<&str> {
        self.selected_place_id.as_deref()
    }

    /// Switch to `screen`, optionally selecting a spot.
    ///
    /// Entering Detail records the current screen as its parent, except when
    /// coming back up from Review (or re-entering from Detail itself), so
    /// that the parent keeps pointing at the originating tab.
    pub fn navigate_to(&mut self, screen: Screen, place_id: Option<&str>) {
        if screen == Screen::Detail && !matches!(self.current, Screen::Review | Screen::Detail) {
            self.detail_parent = Some(self.current);
        }
        if let Some(id) = place_id {
            self.selected_place_id = Some(id.to_string());
        }

        debug!("🧭 {:?} -> {:?} (selected: {:?})", self.current, screen, self.selected_place_id);
        self.current = screen;
    }

    /// Context-sensitive back action.
    ///
    /// Review goes to Detail, Detail goes to its parent tab (Home when unset
    /// or not a tab), Filter goes to Home. Tabs have no back action; returns
    /// false when nothing happened.
    pub fn go_back(&mut self) -> bool {
        let target = match self.current {
            Screen::Review => Screen::Detail,
            Screen::Detail => self
                .detail_parent
                .filter(Screen::is_tab)
                .unwrap_or(Screen::Home),
            Screen::Filter => Screen::Home,
            Screen::Home | Screen::Profile | Screen::Map => return false,
        };

        debug!("🔙 {:?} -> {:?}", self.current, target);
        self.current = target;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Home);
        assert_eq!(nav.detail_parent(), None);
        assert_eq!(nav.selected_place_id(), None);
    }

    #[test]
    fn test_detail_back_to_home() {
        let mut nav = Navigator::new();
        nav.navigate_to(Screen::Detail, Some("X"));
        assert_eq!(nav.selected_place_id(), Some("X"));

        assert!(nav.go_back());
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_detail_back_to_profile() {
        let mut nav = Navigator::new();
        nav.navigate_to(Screen::Profile, None);
        nav.navigate_to(Screen::Detail, Some("2"));

        assert!(nav.go_back());
        assert_eq!(nav.current(), Screen::Profile);
    }

    #[test]
    fn test_review_back_to_detail_keeps_parent() {
        let mut nav = Navigator::new();
        nav.navigate_to(Screen::Map, None);
        nav.navigate_to(Screen::Detail, Some("3"));
        nav.navigate_to(Screen::Review, None);

        assert!(nav.go_back());
        assert_eq!(nav.current(), Screen::Detail);
        assert_eq!(nav.detail_parent(), Some(Screen::Map));

        assert!(nav.go_back());
        assert_eq!(nav.current(), Screen::Map);
    }

    #[test]
    fn test_detail_from_review_does_not_overwrite_parent() {
        let mut nav = Navigator::new();
        nav.navigate_to(Screen::Profile, None);
        nav.navigate_to(Screen::Detail, Some("1"));
        nav.navigate_to(Screen::Review, None);
        nav.navigate_to(Screen::Detail, None);

        assert_eq!(nav.detail_parent(), Some(Screen::Profile));
        assert_eq!(nav.selected_place_id(), Some("1"));
    }

    #[test]
    fn test_reentering_detail_updates_parent() {
        let mut nav = Navigator::new();
        nav.navigate_to(Screen::Detail, Some("1"));
        nav.go_back();
        nav.navigate_to(Screen::Profile, None);
        nav.navigate_to(Screen::Detail, Some("2"));

        assert_eq!(nav.detail_parent(), Some(Screen::Profile));
        assert_eq!(nav.selected_place_id(), Some("2"));
    }

    #[test]
    fn test_detail_from_filter_returns_home() {
        let mut nav = Navigator::new();
        nav.navigate_to(Screen::Filter, None);
        nav.navigate_to(Screen::Detail, Some("4"));
        assert_eq!(nav.detail_parent(), Some(Screen::Filter));

        nav.go_back();
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_filter_back_to_home() {
        let mut nav = Navigator::new();
        nav.navigate_to(Screen::Filter, None);
        assert!(nav.go_back());
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_tabs_have_no_back() {
        let mut nav = Navigator::new();
        for tab in Screen::TABS {
            nav.navigate_to(tab, None);
            assert!(!nav.go_back());
            assert_eq!(nav.current(), tab);
        }
    }

    #[test]
    fn test_selection_survives_navigation_without_id() {
        let mut nav = Navigator::new();
        nav.navigate_to(Screen::Detail, Some("5"));
        nav.navigate_to(Screen::Review, None);
        assert_eq!(nav.selected_place_id(), Some("5"));
    }
}
