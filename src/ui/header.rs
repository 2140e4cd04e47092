//! Header and common widget rendering
//!
//! This module contains the title block, the status line, the navigation
//! bar and the help overlay entry point.

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::{Styles, Theme, UiText};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer for the form title
pub struct HeaderRenderer {
    title: Line<'static>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            title: Line::from(Span::styled(UiText::TITLE, Styles::title())),
        }
    }

    /// Render the bordered title block
    pub fn render_title(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let title_widget = Paragraph::new(self.title.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::border_active()),
            )
            .alignment(Alignment::Center);
        f.render_widget(title_widget, area);
    }
}

/// Render the status line
pub fn render_status(f: &mut Frame, area: Rect, state: &AppState) {
    let status = Paragraph::new(state.status_message.as_str())
        .style(Theme::status_style(state.status_kind))
        .alignment(Alignment::Center);
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    area: Rect,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
) {
    let nav_items = keybinding_ctx.get_nav_items(state.focus, state.help_visible);
    NavBar::new(nav_items).render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(state.focus, keybinding_ctx);
    help_overlay.render(f, f.area());
}
