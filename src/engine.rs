//! Estimation engine
//!
//! Owns the selection state of one estimation session and derives the hour
//! estimate from it.
//!
//! # Invariants
//!
//! - A selected task always belongs to the selected category
//! - Selecting a category (even the current one) clears the task
//! - Size is never unset; it defaults to `standard`
//! - A rejected command leaves the selection untouched

use serde::Serialize;
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogItem, TaskEntry};
use crate::error::{EstimatorError, Result};
use crate::types::SizeClass;

/// In-progress choices of one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub category_id: Option<String>,
    pub task_id: Option<String>,
    pub size_class: SizeClass,
}

/// Commands the form sends to the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    SelectCategory(String),
    SelectTask(String),
    SelectSize(SizeClass),
    RequestEstimate,
}

/// What a successfully applied command produced
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Selection changed; the form should re-render
    Updated,
    /// An estimate was computed
    Estimated(Estimate),
}

/// A computed estimate with the figures that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub category_id: String,
    pub task_id: String,
    pub task_name: String,
    pub size_class: SizeClass,
    pub base_hours: f64,
    pub size_scale: f64,
    pub complexity_factor: f64,
    pub raw_hours: f64,
    pub hours: u32,
}

/// Everything the form needs to re-render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSnapshot<'c> {
    pub categories: Vec<CatalogItem<'c>>,
    pub tasks: Vec<CatalogItem<'c>>,
    pub selection: SelectionState,
    pub can_estimate: bool,
}

/// Computes hours from base hours, size and complexity.
///
/// Ties round away from zero. `Catalog::new` bounds every task so the result
/// fits in `u32` at any size.
pub fn compute_hours(base_hours: f64, size: SizeClass, complexity_factor: f64) -> u32 {
    let raw = base_hours * size.scale() * complexity_factor;
    raw.round() as u32
}

/// Selection state plus the catalog it is validated against
#[derive(Debug, Clone)]
pub struct EstimationEngine<'c> {
    catalog: &'c Catalog,
    selection: SelectionState,
}

impl EstimationEngine<'static> {
    /// Engine over the compiled-in catalog
    pub fn with_builtin_catalog() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl<'c> EstimationEngine<'c> {
    /// Start a session: nothing selected, size `standard`
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            selection: SelectionState::default(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Select a category and clear any task.
    pub fn select_category(&mut self, category_id: &str) -> Result<()> {
        if !self.catalog.contains_category(category_id) {
            return Err(EstimatorError::unknown_category(category_id));
        }
        self.selection.category_id = Some(category_id.to_string());
        self.selection.task_id = None;
        debug!("Category selected: {}", category_id);
        Ok(())
    }

    /// Clear the category, and with it the task
    pub fn clear_category(&mut self) {
        self.selection.category_id = None;
        self.selection.task_id = None;
        debug!("Category cleared");
    }

    /// Select a task of the current category.
    pub fn select_task(&mut self, task_id: &str) -> Result<()> {
        let category_id = self
            .selection
            .category_id
            .as_deref()
            .ok_or(EstimatorError::NoCategorySelected)?;
        self.catalog.lookup_task(category_id, task_id)?;
        self.selection.task_id = Some(task_id.to_string());
        debug!("Task selected: {}/{}", category_id, task_id);
        Ok(())
    }

    pub fn select_size(&mut self, size: SizeClass) {
        self.selection.size_class = size;
        debug!("Size selected: {}", size);
    }

    /// Select a size by its textual name
    pub fn select_size_named(&mut self, name: &str) -> Result<()> {
        let size = SizeClass::parse(name)?;
        self.select_size(size);
        Ok(())
    }

    /// True when both a category and one of its tasks are selected
    pub fn can_estimate(&self) -> bool {
        self.selected_task().is_some()
    }

    /// Compute the estimate with its breakdown.
    pub fn estimate(&self) -> Result<Estimate> {
        let (category_id, task) = match (&self.selection.category_id, self.selected_task()) {
            (Some(category_id), Some(task)) => (category_id, task),
            _ => return Err(EstimatorError::IncompleteSelection),
        };

        let size = self.selection.size_class;
        let raw_hours = task.base_hours * size.scale() * task.complexity_factor;
        let estimate = Estimate {
            category_id: category_id.clone(),
            task_id: task.id.clone(),
            task_name: task.display_name.clone(),
            size_class: size,
            base_hours: task.base_hours,
            size_scale: size.scale(),
            complexity_factor: task.complexity_factor,
            raw_hours,
            hours: compute_hours(task.base_hours, size, task.complexity_factor),
        };
        info!(
            "Estimated {}/{} ({}): {} hours",
            estimate.category_id, estimate.task_id, size, estimate.hours
        );
        Ok(estimate)
    }

    /// Compute the rounded hour estimate.
    pub fn estimate_hours(&self) -> Result<u32> {
        self.estimate().map(|e| e.hours)
    }

    /// Tasks of the selected category; empty when none is selected
    pub fn available_tasks(&self) -> Vec<CatalogItem<'c>> {
        match self.selection.category_id.as_deref() {
            Some(id) => self.catalog.list_tasks(id).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// View of the session for the form
    pub fn snapshot(&self) -> FormSnapshot<'c> {
        FormSnapshot {
            categories: self.catalog.list_categories(),
            tasks: self.available_tasks(),
            selection: self.selection.clone(),
            can_estimate: self.can_estimate(),
        }
    }

    /// Execute one form command.
    pub fn apply(&mut self, command: FormCommand) -> Result<CommandOutcome> {
        match command {
            FormCommand::SelectCategory(id) => self.select_category(&id)?,
            FormCommand::SelectTask(id) => self.select_task(&id)?,
            FormCommand::SelectSize(size) => self.select_size(size),
            FormCommand::RequestEstimate => return self.estimate().map(CommandOutcome::Estimated),
        }
        Ok(CommandOutcome::Updated)
    }

    /// Discard all choices and start a fresh session
    pub fn reset(&mut self) {
        self.selection = SelectionState::default();
        debug!("Selection reset");
    }

    fn selected_task(&self) -> Option<&'c TaskEntry> {
        let category_id = self.selection.category_id.as_deref()?;
        let task_id = self.selection.task_id.as_deref()?;
        self.catalog.lookup_task(category_id, task_id).ok()
    }
}
