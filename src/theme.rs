//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used by the form.
//!
//! # Usage
//! ```rust
//! use hours_estimator::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

use crate::app::StatusKind;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Primary dark background - used for the help window
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Result panel background
    pub const BG_SECONDARY: Color = Color::Rgb(30, 30, 40);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for committed choices
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Focused field border
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Unfocused field border
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Highlighted row background
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Highlighted row text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Unhighlighted list item
    pub const UNSELECTED: Color = Color::Gray;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Highlighted row of the focused picker
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Committed choice of a picker
    pub fn chosen() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn unselected() -> Style {
        Style::default().fg(Colors::UNSELECTED)
    }

    /// Enabled button with focus
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Enabled button without focus
    pub fn button_inactive() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    /// Result figure
    pub fn result() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .bg(Colors::BG_SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Style of the status line
    pub fn status_style(kind: StatusKind) -> Style {
        match kind {
            StatusKind::Info => Style::default().fg(Colors::INFO),
            StatusKind::Success => Style::default().fg(Colors::SUCCESS),
            StatusKind::Error => Style::default()
                .fg(Colors::ERROR)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Border style for a field depending on focus
    pub fn field_border(focused: bool) -> Style {
        if focused {
            Styles::border_active()
        } else {
            Styles::border_inactive()
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Default dialog width percentage
    pub const DIALOG_WIDTH_PCT: u16 = 60;

    /// Default dialog max width
    pub const DIALOG_MAX_WIDTH: u16 = 80;

    /// Minimum dialog width
    pub const DIALOG_MIN_WIDTH: u16 = 40;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Title block height
    pub const HEADER_HEIGHT: u16 = 3;

    /// Status line height
    pub const STATUS_BAR_HEIGHT: u16 = 1;

    /// Estimate button height
    pub const BUTTON_HEIGHT: u16 = 3;

    /// Result panel height
    pub const RESULT_HEIGHT: u16 = 5;
}

// =============================================================================
// TEXT CONSTANTS
// =============================================================================

/// Common UI text strings
pub struct UiText;

impl UiText {
    pub const TITLE: &'static str = "Sound Construction Hours Estimator";
    pub const CATEGORY_PLACEHOLDER: &'static str = "Select Project Category";
    pub const TASK_DISABLED: &'static str = "Select a project category first";
    pub const TASK_EMPTY: &'static str = "No tasks in this category";
    pub const BTN_ESTIMATE: &'static str = "[ Estimate Project Hours ]";
    pub const RESULT_NOTE: &'static str = "Estimate based on project complexity and size";
    pub const RESULT_EMPTY: &'static str = "No estimate yet";
}
