//! Transient UI state of the dashboard shell

/// Where a pointer press landed, relative to the sidebar chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Sidebar,
    ToggleButton,
    Outside,
}

/// Sidebar visibility and the single open dropdown group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    open_dropdown: Option<String>,
    sidebar_open: bool,
}

impl ShellState {
    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn open_dropdown(&self) -> Option<&str> {
        self.open_dropdown.as_deref()
    }

    pub fn is_dropdown_open(&self, key: &str) -> bool {
        self.open_dropdown.as_deref() == Some(key)
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Opens `key`, closing any other group, or closes it if already open
    pub fn toggle_dropdown(&mut self, key: &str) {
        if self.is_dropdown_open(key) {
            self.open_dropdown = None;
        } else {
            self.open_dropdown = Some(key.to_string());
        }
    }

    /// Whether a press on `target` would change the state
    pub fn closes_on(&self, target: PointerTarget) -> bool {
        self.sidebar_open && target == PointerTarget::Outside
    }

    /// Closes the sidebar for presses outside it. Presses on the sidebar or
    /// on its toggle button are left to their own click handlers.
    ///
    /// Returns `true` when the state changed.
    pub fn handle_pointer_down(&mut self, target: PointerTarget) -> bool {
        if !self.closes_on(target) {
            return false;
        }
        self.close_sidebar();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        let state = ShellState::default();
        assert!(!state.is_sidebar_open());
        assert_eq!(state.open_dropdown(), None);
    }

    #[test]
    fn test_toggle_sidebar_flips() {
        let mut state = ShellState::default();
        state.toggle_sidebar();
        assert!(state.is_sidebar_open());
        state.toggle_sidebar();
        assert!(!state.is_sidebar_open());
    }

    #[test]
    fn test_toggle_dropdown_twice_closes() {
        let mut state = ShellState::default();
        state.toggle_dropdown("analytics");
        assert!(state.is_dropdown_open("analytics"));
        state.toggle_dropdown("analytics");
        assert!(!state.is_dropdown_open("analytics"));
        assert_eq!(state.open_dropdown(), None);
    }

    #[test]
    fn test_opening_other_dropdown_closes_previous() {
        let mut state = ShellState::default();
        state.toggle_dropdown("analytics");
        state.toggle_dropdown("management");
        assert!(!state.is_dropdown_open("analytics"));
        assert!(state.is_dropdown_open("management"));
    }

    #[test]
    fn test_at_most_one_dropdown_for_any_sequence() {
        let keys = ["analytics", "management", "analytics", "analytics", "management", "management", "analytics"];
        let mut state = ShellState::default();
        let mut expected: Option<&str> = None;

        for key in keys {
            state.toggle_dropdown(key);
            expected = if expected == Some(key) { None } else { Some(key) };

            assert_eq!(state.open_dropdown(), expected);
            let open_count = ["analytics", "management"]
                .iter()
                .filter(|k| state.is_dropdown_open(k))
                .count();
            assert!(open_count <= 1);
        }
    }

    #[test]
    fn test_dropdown_and_sidebar_are_independent() {
        let mut state = ShellState::default();
        state.toggle_dropdown("analytics");
        state.toggle_sidebar();
        state.close_sidebar();
        assert!(state.is_dropdown_open("analytics"));
    }

    #[test]
    fn test_pointer_down_outside_closes_open_sidebar() {
        let mut state = ShellState::default();
        state.toggle_sidebar();
        assert!(state.handle_pointer_down(PointerTarget::Outside));
        assert!(!state.is_sidebar_open());
    }

    #[test]
    fn test_pointer_down_inside_keeps_sidebar_open() {
        let mut state = ShellState::default();
        state.toggle_sidebar();
        assert!(!state.handle_pointer_down(PointerTarget::Sidebar));
        assert!(state.is_sidebar_open());
    }

    #[test]
    fn test_pointer_down_on_toggle_is_left_to_click_handler() {
        let mut state = ShellState::default();
        state.toggle_sidebar();

        assert!(!state.handle_pointer_down(PointerTarget::ToggleButton));
        assert!(state.is_sidebar_open());

        // The button's click then closes it exactly once
        state.toggle_sidebar();
        assert!(!state.is_sidebar_open());
    }

    #[test]
    fn test_pointer_down_outside_when_closed_is_noop() {
        let mut state = ShellState::default();
        assert!(!state.handle_pointer_down(PointerTarget::Outside));
        assert_eq!(state, ShellState::default());
    }
}
