//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the focused form
//! field. The same registry resolves key presses and feeds the navigation bar
//! and the help overlay, so what is shown is what is bound.

use crate::app::FormField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Home,
    End,
    Select,
    ClearCategory,
    NextField,
    PreviousField,
    Estimate,
    Reset,
    Help,
    Quit,
    Dismiss,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && event.modifiers.contains(self.modifiers)
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Field-specific keybindings
    field_bindings: HashMap<FormField, Vec<Keybinding>>,
    /// Global keybindings (available on every field)
    global_bindings: Vec<Keybinding>,
    /// Bindings while the help overlay is open
    help_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            field_bindings: HashMap::new(),
            global_bindings: Vec::new(),
            help_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all fields
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next field"),
            Keybinding::new(KeyCode::BackTab, KeyAction::PreviousField, "S-Tab", "Previous field"),
            Keybinding::new(KeyCode::Char('e'), KeyAction::Estimate, "E", "Estimate hours"),
            Keybinding::new(KeyCode::Char('r'), KeyAction::Reset, "R", "Start over"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
        ];

        self.help_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Dismiss, "?", "Close help"),
            Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close help"),
            Keybinding::new(KeyCode::Enter, KeyAction::Dismiss, "Enter", "Close help"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ];

        // Picker fields
        let list_bindings = |commit: &str| {
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous option"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next option"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "First option"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Last option"),
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", commit),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Select, "Space", commit),
            ]
        };
        let mut category_bindings = list_bindings("Choose category");
        category_bindings.push(Keybinding::new(
            KeyCode::Backspace,
            KeyAction::ClearCategory,
            "Bksp",
            "Clear category",
        ));
        category_bindings.push(Keybinding::new(
            KeyCode::Delete,
            KeyAction::ClearCategory,
            "Del",
            "Clear category",
        ));
        self.field_bindings
            .insert(FormField::Category, category_bindings);
        self.field_bindings
            .insert(FormField::Task, list_bindings("Choose task"));
        self.field_bindings
            .insert(FormField::Size, list_bindings("Choose size"));

        // Estimate button
        self.field_bindings.insert(
            FormField::Estimate,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Estimate hours"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::Select, "Space", "Estimate hours"),
            ],
        );
    }

    /// Get keybindings for a field (includes global bindings)
    pub fn get_bindings(&self, field: FormField) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(field_bindings) = self.field_bindings.get(&field) {
            bindings.extend(field_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key press to an action.
    ///
    /// Bindings with modifiers are checked first so Ctrl+C is not mistaken
    /// for a plain letter.
    pub fn resolve(&self, event: &KeyEvent, field: FormField, help_visible: bool) -> Option<KeyAction> {
        let bindings: Vec<&Keybinding> = if help_visible {
            self.help_bindings.iter().collect()
        } else {
            self.get_bindings(field)
        };

        bindings
            .iter()
            .filter(|b| !b.modifiers.is_empty())
            .chain(bindings.iter().filter(|b| b.modifiers.is_empty()))
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, field: FormField, help_visible: bool) -> Vec<NavBarItem> {
        if help_visible {
            return vec![NavBarItem {
                key_display: "?/Esc".to_string(),
                action_label: "Close help".to_string(),
            }];
        }

        let bindings = self.get_bindings(field);

        // Select key bindings to show in nav bar (most important ones)
        let priority_actions = if field.is_list() {
            vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::NextField,
                KeyAction::Estimate,
                KeyAction::Help,
                KeyAction::Quit,
            ]
        } else {
            vec![
                KeyAction::Select,
                KeyAction::NextField,
                KeyAction::Reset,
                KeyAction::Help,
                KeyAction::Quit,
            ]
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                // Combine Up/Down navigation
                if action == KeyAction::NavigateUp {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Move".to_string(),
                    });
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }

    /// Get full help content for a field (for help overlay)
    pub fn get_help_content(&self, field: FormField) -> Vec<HelpSection> {
        let sections = [
            (
                "Navigation",
                &[
                    KeyAction::NavigateUp,
                    KeyAction::NavigateDown,
                    KeyAction::Home,
                    KeyAction::End,
                    KeyAction::NextField,
                    KeyAction::PreviousField,
                ][..],
            ),
            (
                "Actions",
                &[
                    KeyAction::Select,
                    KeyAction::ClearCategory,
                    KeyAction::Estimate,
                    KeyAction::Reset,
                ][..],
            ),
            ("General", &[KeyAction::Help, KeyAction::Quit][..]),
        ];

        let bindings = self.get_bindings(field);
        sections
            .iter()
            .filter_map(|(title, actions)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| actions.contains(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
