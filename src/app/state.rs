//! Application state definitions
//!
//! Contains the form-level state that lives alongside the engine: which
//! field has focus, the highlighted row of each picker, the last result and
//! the status line.

use strum::{Display, EnumIter};

use crate::engine::Estimate;
use crate::types::SizeClass;

/// Form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum FormField {
    #[strum(serialize = "Project Category")]
    Category,
    #[strum(serialize = "Specific Task")]
    Task,
    #[strum(serialize = "Project Size")]
    Size,
    #[strum(serialize = "Estimate Project Hours")]
    Estimate,
}

impl FormField {
    /// Next field in focus order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Category => Self::Task,
            Self::Task => Self::Size,
            Self::Size => Self::Estimate,
            Self::Estimate => Self::Category,
        }
    }

    /// Previous field in focus order, wrapping around
    pub fn previous(&self) -> Self {
        match self {
            Self::Category => Self::Estimate,
            Self::Task => Self::Category,
            Self::Size => Self::Task,
            Self::Estimate => Self::Size,
        }
    }

    /// Whether the field is a picker list
    pub fn is_list(&self) -> bool {
        !matches!(self, Self::Estimate)
    }
}

/// Severity of the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Field receiving list navigation and Enter
    pub focus: FormField,
    /// Highlighted row of the category picker
    pub category_cursor: usize,
    /// Highlighted row of the task picker
    pub task_cursor: usize,
    /// Highlighted row of the size picker
    pub size_cursor: usize,
    /// Last computed estimate, kept until the next estimate or reset
    pub last_estimate: Option<Estimate>,
    /// Status message for user feedback
    pub status_message: String,
    pub status_kind: StatusKind,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Set when the user asked to leave
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            focus: FormField::Category,
            category_cursor: 0,
            task_cursor: 0,
            size_cursor: SizeClass::default().index(),
            last_estimate: None,
            status_message: "Select a project category to begin".to_string(),
            status_kind: StatusKind::Info,
            help_visible: false,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn set_status(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.status_kind = kind;
        self.status_message = message.into();
    }

    /// Cursor of the focused picker, if the focus is on one
    pub fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.focus {
            FormField::Category => Some(&mut self.category_cursor),
            FormField::Task => Some(&mut self.task_cursor),
            FormField::Size => Some(&mut self.size_cursor),
            FormField::Estimate => None,
        }
    }
}
