//! Application module
//!
//! Contains the form controller: it turns key presses into engine commands,
//! keeps the per-field cursors in sync with the engine, and runs the event
//! loop.
//!
//! # Module Structure
//! - `state` - Form state types (AppState, FormField, StatusKind)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppState, FormField, StatusKind};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::engine::{CommandOutcome, EstimationEngine, FormCommand};
use crate::error::Result;
use crate::types::SizeClass;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Frame, Terminal};
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{debug, error, info, warn};

/// Main application struct
pub struct App {
    engine: EstimationEngine<'static>,
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for key resolution and navigation hints
    keybinding_context: KeybindingContext,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance over the built-in catalog
    pub fn new() -> Self {
        Self::with_engine(EstimationEngine::with_builtin_catalog())
    }

    /// Create an application driving the given engine
    pub fn with_engine(engine: EstimationEngine<'static>) -> Self {
        info!("Creating new App instance");
        Self {
            engine,
            state: AppState::default(),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn engine(&self) -> &EstimationEngine<'static> {
        &self.engine
    }

    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Run the main loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        while !self.state.should_quit {
            terminal.draw(|f| self.draw(f))?;

            if crossterm::event::poll(Duration::from_millis(250))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        self.handle_key_event(key_event);
                    }
                    Event::Resize(width, height) => {
                        debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }
        }

        info!("Main loop finished");
        Ok(())
    }

    /// Render the whole form into a frame
    pub fn draw(&self, f: &mut Frame) {
        self.ui_renderer
            .render(f, &self.state, &self.engine.snapshot(), &self.keybinding_context);
    }

    /// Handle one key press. Returns true when the user asked to quit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return self.state.should_quit;
        }

        let action = self.keybinding_context.resolve(
            &key_event,
            self.state.focus,
            self.state.help_visible,
        );
        if let Some(action) = action {
            debug!("Key {:?} -> {:?}", key_event.code, action);
            self.perform(action);
        }
        self.state.should_quit
    }

    /// Execute a resolved key action
    pub fn perform(&mut self, action: KeyAction) {
        match action {
            KeyAction::NavigateUp => self.move_cursor(-1),
            KeyAction::NavigateDown => self.move_cursor(1),
            KeyAction::Home => self.move_cursor(isize::MIN),
            KeyAction::End => self.move_cursor(isize::MAX),
            KeyAction::Select => self.commit_focused(),
            KeyAction::ClearCategory => self.clear_category(),
            KeyAction::NextField => self.focus_next(),
            KeyAction::PreviousField => self.focus_previous(),
            KeyAction::Estimate => self.request_estimate(),
            KeyAction::Reset => self.reset(),
            KeyAction::Help => self.state.help_visible = !self.state.help_visible,
            KeyAction::Dismiss => self.state.help_visible = false,
            KeyAction::Quit => {
                info!("Quit requested");
                self.state.should_quit = true;
            }
        }
    }

    /// Whether a field can currently take focus
    pub fn is_enabled(&self, field: FormField) -> bool {
        match field {
            FormField::Category | FormField::Size => true,
            FormField::Task => self.engine.selection().category_id.is_some(),
            FormField::Estimate => self.engine.can_estimate(),
        }
    }

    fn focus_next(&mut self) {
        let mut field = self.state.focus.next();
        while !self.is_enabled(field) {
            field = field.next();
        }
        self.state.focus = field;
    }

    fn focus_previous(&mut self) {
        let mut field = self.state.focus.previous();
        while !self.is_enabled(field) {
            field = field.previous();
        }
        self.state.focus = field;
    }

    fn list_len(&self, field: FormField) -> usize {
        match field {
            FormField::Category => self.engine.catalog().list_categories().len(),
            FormField::Task => self.engine.available_tasks().len(),
            FormField::Size => SizeClass::iter().count(),
            FormField::Estimate => 0,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.list_len(self.state.focus);
        let Some(cursor) = self.state.cursor_mut() else {
            return;
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        let target = (*cursor as isize).saturating_add(delta);
        *cursor = target.clamp(0, len as isize - 1) as usize;
    }

    /// Commit the highlighted row of the focused picker, or press the button
    fn commit_focused(&mut self) {
        let command = match self.state.focus {
            FormField::Category => self
                .engine
                .catalog()
                .list_categories()
                .get(self.state.category_cursor)
                .map(|c| FormCommand::SelectCategory(c.id.to_string())),
            FormField::Task => self
                .engine
                .available_tasks()
                .get(self.state.task_cursor)
                .map(|t| FormCommand::SelectTask(t.id.to_string())),
            FormField::Size => SizeClass::iter()
                .nth(self.state.size_cursor)
                .map(FormCommand::SelectSize),
            FormField::Estimate => Some(FormCommand::RequestEstimate),
        };

        if let Some(command) = command {
            if self.dispatch(command) && self.state.focus != FormField::Estimate {
                self.focus_next();
            }
        }
    }

    fn clear_category(&mut self) {
        if self.engine.selection().category_id.is_none() {
            return;
        }
        self.engine.clear_category();
        self.state.task_cursor = 0;
        self.state.set_status(StatusKind::Info, "Category cleared");
    }

    fn request_estimate(&mut self) {
        self.dispatch(FormCommand::RequestEstimate);
    }

    /// Send a command to the engine and reflect the outcome. Returns true on success.
    pub fn dispatch(&mut self, command: FormCommand) -> bool {
        let status = match &command {
            FormCommand::SelectCategory(id) => {
                let name = self
                    .engine
                    .catalog()
                    .category(id)
                    .map(|c| c.display_name.clone())
                    .unwrap_or_else(|_| id.clone());
                format!("Category: {}", name)
            }
            FormCommand::SelectTask(id) => {
                let name = self
                    .engine
                    .available_tasks()
                    .iter()
                    .find(|t| t.id == id.as_str())
                    .map(|t| t.display_name.to_string())
                    .unwrap_or_else(|| id.clone());
                format!("Task: {}", name)
            }
            FormCommand::SelectSize(size) => format!("Project size: {}", size.label()),
            FormCommand::RequestEstimate => String::new(),
        };

        match self.engine.apply(command.clone()) {
            Ok(CommandOutcome::Updated) => {
                self.sync_cursors(&command);
                self.state.set_status(StatusKind::Info, status);
                true
            }
            Ok(CommandOutcome::Estimated(estimate)) => {
                self.state.set_status(
                    StatusKind::Success,
                    format!(
                        "Estimated {} hours for {}",
                        estimate.hours, estimate.task_name
                    ),
                );
                self.state.last_estimate = Some(estimate);
                true
            }
            Err(e) => {
                if e.is_selection_error() {
                    warn!("Rejected {:?}: {}", command, e);
                } else {
                    error!("Command {:?} failed: {}", command, e);
                }
                self.state.set_status(StatusKind::Error, e.to_string());
                false
            }
        }
    }

    /// Keep picker cursors pointing at the committed values
    fn sync_cursors(&mut self, command: &FormCommand) {
        match command {
            FormCommand::SelectCategory(id) => {
                if let Some(index) = self.engine.catalog().category_index(id) {
                    self.state.category_cursor = index;
                }
                self.state.task_cursor = 0;
            }
            FormCommand::SelectSize(size) => self.state.size_cursor = size.index(),
            FormCommand::SelectTask(_) | FormCommand::RequestEstimate => {}
        }
    }

    /// Start a fresh estimation session
    fn reset(&mut self) {
        self.engine.reset();
        self.state = AppState {
            status_message: "Started a new estimate".to_string(),
            ..AppState::default()
        };
        info!("Session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_task_field_skipped_until_category() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().focus, FormField::Size);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().focus, FormField::Category);
    }

    #[test]
    fn test_commit_category_advances_to_task() {
        let mut app = App::new();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.engine().selection().category_id.as_deref(),
            Some("commercial")
        );
        assert_eq!(app.state().focus, FormField::Task);
        assert_eq!(app.state().status_message, "Category: Commercial Construction");
    }

    #[test]
    fn test_cursor_clamps_at_ends() {
        let mut app = App::new();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.state().category_cursor, 0);
        press(&mut app, KeyCode::End);
        assert_eq!(app.state().category_cursor, 2);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state().category_cursor, 2);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.state().category_cursor, 0);
    }

    #[test]
    fn test_estimate_shortcut_reports_incomplete() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.state().status_kind, StatusKind::Error);
        assert!(app.state().status_message.contains("Incomplete selection"));
        assert!(app.state().last_estimate.is_none());
    }

    #[test]
    fn test_backspace_clears_category_and_task() {
        let mut app = App::new();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(app.engine().can_estimate());

        assert_eq!(app.state().focus, FormField::Size);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.state().focus, FormField::Category);
        press(&mut app, KeyCode::Backspace);

        assert_eq!(app.engine().selection().category_id, None);
        assert_eq!(app.engine().selection().task_id, None);
        assert!(!app.is_enabled(FormField::Task));
        assert_eq!(app.state().status_message, "Category cleared");
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::new();
        let mut event = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert!(!app.handle_key_event(event));
    }
}
