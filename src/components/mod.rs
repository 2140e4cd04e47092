//! Reusable UI components
//!
//! - `keybindings` - Field-aware keybinding registry
//! - `help_overlay` - Context help window
//! - `nav_bar` - Bottom navigation hint bar

pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
