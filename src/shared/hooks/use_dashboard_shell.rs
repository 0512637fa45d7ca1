use dioxus::prelude::*;

use crate::shared::logging::log_outside_click_close;
use crate::shared::state::{PointerTarget, ShellState};

/// Sidebar + dropdown state of the dashboard layout
#[derive(Clone, Copy, PartialEq)]
pub struct DashboardShell {
    state: Signal<ShellState>,
}

impl DashboardShell {
    pub fn is_sidebar_open(&self) -> bool {
        self.state.read().is_sidebar_open()
    }

    pub fn is_dropdown_open(&self, key: &str) -> bool {
        self.state.read().is_dropdown_open(key)
    }

    pub fn toggle_sidebar(&mut self) {
        self.state.write().toggle_sidebar();
    }

    pub fn close_sidebar(&mut self) {
        if self.state.peek().is_sidebar_open() {
            self.state.write().close_sidebar();
        }
    }

    pub fn toggle_dropdown(&mut self, key: &str) {
        self.state.write().toggle_dropdown(key);
    }

    /// Outside-click entry point; only writes the signal when the press closes the sidebar
    pub fn handle_pointer_down(&mut self, target: PointerTarget) {
        if !self.state.peek().closes_on(target) {
            return;
        }
        if self.state.write().handle_pointer_down(target) {
            log_outside_click_close();
        }
    }
}

impl From<Signal<ShellState>> for DashboardShell {
    fn from(state: Signal<ShellState>) -> Self {
        Self { state }
    }
}

/// Hook to manage the dashboard shell state
pub fn use_dashboard_shell() -> DashboardShell {
    use_signal(ShellState::default).into()
}
