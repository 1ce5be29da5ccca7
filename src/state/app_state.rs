//! Global application state and view routing

use crate::state::forms::RegistrationForm;

/// Top-level views of the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Welcome,
    Register,
    Confirmation,
    Browse,
}

impl View {
    /// Views that are only reachable once the platform has confirmed the
    /// account. The signal itself comes from outside; the form core never
    /// reads it.
    pub fn requires_auth(&self) -> bool {
        matches!(self, View::Browse)
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view being displayed
    pub current_view: View,
    /// History of views for back navigation
    pub view_history: Vec<View>,
    /// Externally supplied authentication signal, consumed only by the
    /// routing guard
    pub is_authenticated: bool,
    /// The active registration session
    pub registration: RegistrationForm,
    /// Transient status line message
    pub status_message: Option<String>,
}

impl AppState {
    /// Apply the routing guard: a guarded view requested while
    /// unauthenticated redirects to the registration flow.
    pub fn resolve_view(&self, requested: View) -> View {
        if requested.requires_auth() && !self.is_authenticated {
            View::Register
        } else {
            requested
        }
    }

    /// Start a fresh registration session, discarding the old one
    pub fn reset_registration(&mut self) {
        self.registration = RegistrationForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_welcome() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Welcome);
    }

    #[test]
    fn test_guard_redirects_unauthenticated_browse() {
        let state = AppState::default();
        assert_eq!(state.resolve_view(View::Browse), View::Register);
    }

    #[test]
    fn test_guard_passes_authenticated_browse() {
        let state = AppState {
            is_authenticated: true,
            ..Default::default()
        };
        assert_eq!(state.resolve_view(View::Browse), View::Browse);
    }

    #[test]
    fn test_guard_leaves_open_views_alone() {
        let state = AppState::default();
        assert_eq!(state.resolve_view(View::Welcome), View::Welcome);
        assert_eq!(state.resolve_view(View::Register), View::Register);
        assert_eq!(state.resolve_view(View::Confirmation), View::Confirmation);
    }

    #[test]
    fn test_reset_registration_clears_reveal_gate() {
        let mut state = AppState::default();
        state.registration.reveal();
        state.reset_registration();
        assert!(!state.registration.errors_revealed());
    }
}
