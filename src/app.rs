//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AppState, FocusTarget, Role, View, BUTTON_CANCEL, BUTTON_SUBMIT,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::str::FromStr;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance.
    ///
    /// An unknown `default_role` in the config is a configuration error
    /// and aborts startup instead of silently validating an empty schema.
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let mut state = AppState::default();

        if let Some(role_name) = &config.default_role {
            let role = Role::from_str(role_name)?;
            state.registration.set_role(role);
            tracing::debug!(%role, "applied default role from config");
        }

        Ok(Self { state, quit: false })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Navigate to a new view, passing it through the routing guard
    pub fn navigate(&mut self, view: View) {
        let resolved = self.state.resolve_view(view);
        if resolved != view {
            tracing::debug!(?view, ?resolved, "routing guard redirected navigation");
            self.state.status_message = Some("Please register first.".to_string());
        }
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = resolved;
    }

    /// Go back to the previous view
    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            self.state.current_view = view;
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear transient status on any key press
        self.state.status_message = None;

        match self.state.current_view {
            View::Welcome => self.handle_welcome_key(key),
            View::Register => self.handle_register_key(key),
            View::Confirmation => self.handle_confirmation_key(key),
            View::Browse => self.handle_browse_key(key),
        }

        Ok(())
    }

    /// Handle keys in Welcome view
    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => self.navigate(View::Register),
            KeyCode::Char('b') => self.navigate(View::Browse),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in the registration form
    fn handle_register_key(&mut self, key: KeyEvent) {
        // Form-wide shortcuts first
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit_registration();
                    return;
                }
                KeyCode::Char('n') => {
                    if self.state.registration.role == Role::Veterinarian {
                        self.state.registration.add_education_entry();
                    }
                    return;
                }
                KeyCode::Char('d') => {
                    self.state.registration.remove_focused_education_entry();
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => {
                self.go_back();
            }
            KeyCode::Tab | KeyCode::Down => self.state.registration.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.registration.prev_field(),
            KeyCode::Left | KeyCode::Right => self.handle_horizontal_key(key.code),
            KeyCode::Enter => self.handle_enter(),
            KeyCode::Backspace => self.state.registration.handle_backspace(),
            KeyCode::Char(c) => self.state.registration.handle_char(c),
            _ => {}
        }
    }

    /// Left/Right cycles the role on the selector row and the selected
    /// button on the action row; elsewhere it is ignored.
    fn handle_horizontal_key(&mut self, code: KeyCode) {
        let form = &mut self.state.registration;
        match form.focus_target() {
            FocusTarget::RoleSelector => {
                let role = if code == KeyCode::Right {
                    form.role.next()
                } else {
                    form.role.prev()
                };
                form.set_role(role);
                tracing::debug!(%role, "switched registration role");
            }
            FocusTarget::Buttons => {
                form.selected_button = if form.selected_button == BUTTON_CANCEL {
                    BUTTON_SUBMIT
                } else {
                    BUTTON_CANCEL
                };
            }
            _ => {}
        }
    }

    /// Enter activates the focused control
    fn handle_enter(&mut self) {
        match self.state.registration.focus_target() {
            FocusTarget::AddEntry => self.state.registration.add_education_entry(),
            FocusTarget::Buttons => {
                if self.state.registration.selected_button == BUTTON_SUBMIT {
                    self.submit_registration();
                } else {
                    self.state.reset_registration();
                    self.go_back();
                }
            }
            // Enter elsewhere advances focus, like Tab
            _ => self.state.registration.next_field(),
        }
    }

    /// Attempt to submit: open the visibility gate, then either complete
    /// the registration or leave the form with its errors showing.
    fn submit_registration(&mut self) {
        let form = &mut self.state.registration;
        form.reveal();

        if form.is_submit_ready() {
            tracing::info!(
                session_id = %form.session_id,
                role = %form.role,
                started_at = %form.started_at,
                "registration submitted"
            );
            self.state.is_authenticated = true;
            self.state.status_message = Some("Registration submitted.".to_string());
            self.navigate(View::Confirmation);
        } else {
            let count = form.compute_errors().len();
            tracing::debug!(error_count = count, "submit blocked by validation");
            self.state.status_message =
                Some("Please fix the highlighted fields before submitting.".to_string());
        }
    }

    /// Handle keys in Confirmation view
    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('b') => self.navigate(View::Browse),
            KeyCode::Esc => {
                self.state.current_view = View::Welcome;
                self.state.view_history.clear();
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in Browse view
    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }
}
