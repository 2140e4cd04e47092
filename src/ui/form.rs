//! Form rendering
//!
//! Renders the three pickers, the estimate button and the result panel.
//! A picker shows every option; the committed choice carries a marker and,
//! when the picker has focus, the cursor row is highlighted.

use crate::app::{AppState, FormField};
use crate::catalog::CatalogItem;
use crate::engine::{Estimate, FormSnapshot};
use crate::theme::{Styles, Theme, UiText};
use crate::types::SizeClass;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const CHOSEN_MARKER: &str = "● ";
const OPEN_MARKER: &str = "  ";

/// One row of a picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRow {
    pub label: String,
    pub chosen: bool,
}

/// Rows for a picker, marking the committed id
pub fn picker_rows(items: &[CatalogItem<'_>], chosen_id: Option<&str>) -> Vec<PickerRow> {
    items
        .iter()
        .map(|item| PickerRow {
            label: item.display_name.to_string(),
            chosen: chosen_id == Some(item.id),
        })
        .collect()
}

/// Human-readable arithmetic behind an estimate
pub fn breakdown_text(estimate: &Estimate) -> String {
    format!(
        "{} h base × {} ({}) × {} complexity = {:.1} h",
        estimate.base_hours,
        estimate.size_scale,
        estimate.size_class,
        estimate.complexity_factor,
        estimate.raw_hours
    )
}

fn field_block(field: FormField, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::field_border(focused))
        .title(format!(" {} ", field))
}

fn render_picker(f: &mut Frame, area: Rect, field: FormField, rows: &[PickerRow], cursor: usize, focused: bool) {
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let (marker, style) = if row.chosen {
                (CHOSEN_MARKER, Styles::chosen())
            } else {
                (OPEN_MARKER, Styles::unselected())
            };
            ListItem::new(format!("{}{}", marker, row.label)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(field_block(field, focused))
        .highlight_style(Styles::selected());

    let mut list_state = ListState::default();
    if focused && !rows.is_empty() {
        list_state.select(Some(cursor.min(rows.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_placeholder(f: &mut Frame, area: Rect, field: FormField, text: &str, focused: bool) {
    let placeholder = Paragraph::new(text.to_string())
        .style(Styles::text_muted())
        .block(field_block(field, focused));
    f.render_widget(placeholder, area);
}

pub fn render_category_picker(f: &mut Frame, area: Rect, state: &AppState, snapshot: &FormSnapshot<'_>) {
    let focused = state.focus == FormField::Category;
    if snapshot.categories.is_empty() {
        render_placeholder(f, area, FormField::Category, UiText::CATEGORY_PLACEHOLDER, focused);
        return;
    }
    let rows = picker_rows(&snapshot.categories, snapshot.selection.category_id.as_deref());
    render_picker(f, area, FormField::Category, &rows, state.category_cursor, focused);
}

pub fn render_task_picker(f: &mut Frame, area: Rect, state: &AppState, snapshot: &FormSnapshot<'_>) {
    let focused = state.focus == FormField::Task;
    if snapshot.selection.category_id.is_none() {
        render_placeholder(f, area, FormField::Task, UiText::TASK_DISABLED, false);
        return;
    }
    if snapshot.tasks.is_empty() {
        render_placeholder(f, area, FormField::Task, UiText::TASK_EMPTY, focused);
        return;
    }
    let rows = picker_rows(&snapshot.tasks, snapshot.selection.task_id.as_deref());
    render_picker(f, area, FormField::Task, &rows, state.task_cursor, focused);
}

pub fn render_size_picker(f: &mut Frame, area: Rect, state: &AppState, snapshot: &FormSnapshot<'_>) {
    let rows: Vec<PickerRow> = SizeClass::all()
        .into_iter()
        .map(|size| PickerRow {
            label: size.label().to_string(),
            chosen: size == snapshot.selection.size_class,
        })
        .collect();
    render_picker(
        f,
        area,
        FormField::Size,
        &rows,
        state.size_cursor,
        state.focus == FormField::Size,
    );
}

pub fn render_estimate_button(f: &mut Frame, area: Rect, focused: bool, enabled: bool) {
    let style = match (enabled, focused) {
        (false, _) => Styles::text_muted(),
        (true, true) => Styles::button_active(),
        (true, false) => Styles::button_inactive(),
    };
    let button = Paragraph::new(Line::from(Span::styled(UiText::BTN_ESTIMATE, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::field_border(focused && enabled)),
        );
    f.render_widget(button, area);
}

pub fn render_result(f: &mut Frame, area: Rect, estimate: Option<&Estimate>) {
    let lines = match estimate {
        Some(estimate) => vec![
            Line::from(Span::styled(
                format!(" Estimated Project Hours: {} ", estimate.hours),
                Styles::result(),
            )),
            Line::from(Span::styled(UiText::RESULT_NOTE, Styles::text_secondary())),
            Line::from(Span::styled(breakdown_text(estimate), Styles::text_muted())),
        ],
        None => vec![Line::from(Span::styled(UiText::RESULT_EMPTY, Styles::text_muted()))],
    };

    let result = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive())
                .title(" Result "),
        );
    f.render_widget(result, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_picker_rows_mark_chosen() {
        let items = Catalog::builtin().list_categories();
        let rows = picker_rows(&items, Some("commercial"));
        assert_eq!(rows.len(), 3);
        assert!(!rows[0].chosen);
        assert!(rows[1].chosen);
        assert_eq!(rows[1].label, "Commercial Construction");
    }

    #[test]
    fn test_picker_rows_nothing_chosen() {
        let items = Catalog::builtin().list_tasks("renovation").unwrap();
        assert!(picker_rows(&items, None).iter().all(|r| !r.chosen));
    }

    #[test]
    fn test_breakdown_text() {
        let estimate = Estimate {
            category_id: "residential".into(),
            task_id: "frameWalls".into(),
            task_name: "Framing Walls".into(),
            size_class: SizeClass::Large,
            base_hours: 120.0,
            size_scale: 1.5,
            complexity_factor: 1.2,
            raw_hours: 216.0,
            hours: 216,
        };
        assert_eq!(
            breakdown_text(&estimate),
            "120 h base × 1.5 (large) × 1.2 complexity = 216.0 h"
        );
    }
}
