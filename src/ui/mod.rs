//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title, status line, nav bar and help overlay rendering
//! - `form` - The pickers, the estimate button and the result panel
//!
//! Rendering is a pure function of the form state and the engine snapshot;
//! nothing here mutates either.

mod form;
mod header;

pub use form::{breakdown_text, picker_rows, PickerRow};

use crate::app::{AppState, FormField};
use crate::components::keybindings::KeybindingContext;
use crate::engine::FormSnapshot;
use crate::theme::UiConstants;
use crate::types::SizeClass;
use header::HeaderRenderer;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Main UI renderer
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the full form
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        snapshot: &FormSnapshot<'_>,
        keybinding_ctx: &KeybindingContext,
    ) {
        let picker_height = |rows: usize| rows.max(1) as u16 + 2;
        let size_count = SizeClass::all().len();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Length(picker_height(snapshot.categories.len())),
                Constraint::Length(picker_height(snapshot.tasks.len())),
                Constraint::Length(picker_height(size_count)),
                Constraint::Length(UiConstants::BUTTON_HEIGHT),
                Constraint::Length(UiConstants::RESULT_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        self.header.render_title(f, chunks[0]);

        form::render_category_picker(f, chunks[1], state, snapshot);
        form::render_task_picker(f, chunks[2], state, snapshot);
        form::render_size_picker(f, chunks[3], state, snapshot);
        form::render_estimate_button(
            f,
            chunks[4],
            state.focus == FormField::Estimate,
            snapshot.can_estimate,
        );
        form::render_result(f, chunks[5], state.last_estimate.as_ref());

        header::render_status(f, chunks[7], state);
        header::render_nav_bar(f, chunks[8], state, keybinding_ctx);

        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
