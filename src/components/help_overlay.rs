//! Help overlay component
//!
//! Displays context-sensitive help in a centered floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::FormField;
use crate::theme::{Colors, UiConstants};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the focused field
    pub fn new(field: FormField, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(field);
        Self {
            content: Self::build_content(&sections, field),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], field: FormField) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Hours Estimator Help  ",
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled("Current: ", Style::default().fg(Colors::FG_MUTED)),
            Span::styled(field.to_string(), Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Style::default().fg(Colors::FG_PRIMARY)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "Estimates scale base hours by project size and task complexity.",
            Style::default().fg(Colors::FG_SECONDARY),
        )]));

        lines
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.content
    }

    /// Render the help overlay centered in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered_rect(parent, UiConstants::DIALOG_WIDTH_PCT, self.content.len() as u16 + 2);
        f.render_widget(Clear, area);
        let help = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Colors::BORDER_ACTIVE))
                    .title(" Help ")
                    .title_bottom(" Press ? or Esc to close "),
            )
            .style(Style::default().bg(Colors::BG_PRIMARY))
            .wrap(Wrap { trim: false });
        f.render_widget(help, area);
    }
}

/// A rectangle of `width_pct` percent width and `height` rows centered in `parent`
pub fn centered_rect(parent: Rect, width_pct: u16, height: u16) -> Rect {
    let width = ((u32::from(parent.width) * u32::from(width_pct) / 100) as u16)
        .max(UiConstants::DIALOG_MIN_WIDTH)
        .min(UiConstants::DIALOG_MAX_WIDTH)
        .min(parent.width);
    let height = height.min(parent.height);
    Rect {
        x: parent.x + (parent.width - width) / 2,
        y: parent.y + (parent.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let area = centered_rect(parent, 60, 20);
        assert_eq!(area.width, 60);
        assert_eq!(area.height, 20);
        assert_eq!(area.x, 20);
        assert_eq!(area.y, 10);
    }

    #[test]
    fn test_centered_rect_clamps_to_small_parent() {
        let parent = Rect::new(0, 0, 30, 8);
        let area = centered_rect(parent, 60, 20);
        assert_eq!(area.width, 30);
        assert_eq!(area.height, 8);
    }

    #[test]
    fn test_content_names_focused_field() {
        let overlay = HelpOverlay::new(FormField::Size, &KeybindingContext::new());
        let text: String = overlay
            .lines()
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect();
        assert!(text.contains("Project Size"));
        assert!(text.contains("Estimate hours"));
    }
}
