//! Estimation catalog
//!
//! The fixed reference table of work categories and their tasks. Each task
//! carries a base-hours figure and a complexity multiplier. The catalog is
//! immutable once built; declaration order is display order.

use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::{EstimatorError, Result};
use crate::types::SizeClass;

/// One selectable task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskEntry {
    pub id: String,
    pub display_name: String,
    pub base_hours: f64,
    pub complexity_factor: f64,
}

impl TaskEntry {
    pub fn new(id: &str, display_name: &str, base_hours: f64, complexity_factor: f64) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            base_hours,
            complexity_factor,
        }
    }
}

/// A work category and its tasks, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEntry {
    pub id: String,
    pub display_name: String,
    pub tasks: Vec<TaskEntry>,
}

impl CategoryEntry {
    pub fn new(id: &str, display_name: &str, tasks: Vec<TaskEntry>) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            tasks,
        }
    }

    /// Find a task of this category by id
    pub fn task(&self, task_id: &str) -> Option<&TaskEntry> {
        self.tasks.iter().find(|t| t.id == task_id)
    }
}

/// An `(id, display name)` pair for populating a picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogItem<'a> {
    pub id: &'a str,
    pub display_name: &'a str,
}

/// Immutable category → task lookup table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    categories: Vec<CategoryEntry>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    categories: vec![
        CategoryEntry::new(
            "residential",
            "Residential Construction",
            vec![
                TaskEntry::new("houseFoundation", "House Foundation", 80.0, 1.0),
                TaskEntry::new("frameWalls", "Framing Walls", 120.0, 1.2),
                TaskEntry::new("roofInstallation", "Roof Installation", 96.0, 1.3),
                TaskEntry::new("interiorFinishing", "Interior Finishing", 160.0, 1.5),
            ],
        ),
        CategoryEntry::new(
            "commercial",
            "Commercial Construction",
            vec![
                TaskEntry::new("officeBuilding", "Office Building Framing", 240.0, 1.4),
                TaskEntry::new("retailSpace", "Retail Space Construction", 200.0, 1.3),
                TaskEntry::new("warehouseStructure", "Warehouse Structure", 280.0, 1.5),
            ],
        ),
        CategoryEntry::new(
            "renovation",
            "Renovation Projects",
            vec![
                TaskEntry::new("kitchenRemodel", "Kitchen Remodel", 100.0, 1.4),
                TaskEntry::new("bathroomUpgrade", "Bathroom Upgrade", 80.0, 1.3),
                TaskEntry::new(
                    "historicPreservation",
                    "Historic Building Restoration",
                    200.0,
                    1.6,
                ),
            ],
        ),
    ],
});

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and non-positive figures.
    pub fn new(categories: Vec<CategoryEntry>) -> Result<Self> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(category.id.as_str()) {
                return Err(EstimatorError::invalid_catalog(format!(
                    "duplicate category id '{}'",
                    category.id
                )));
            }

            let mut task_ids = HashSet::new();
            for task in &category.tasks {
                if !task_ids.insert(task.id.as_str()) {
                    return Err(EstimatorError::invalid_catalog(format!(
                        "duplicate task id '{}' in category '{}'",
                        task.id, category.id
                    )));
                }
                if !(task.base_hours.is_finite() && task.base_hours > 0.0) {
                    return Err(EstimatorError::invalid_catalog(format!(
                        "task '{}' has non-positive base hours {}",
                        task.id, task.base_hours
                    )));
                }
                if !(task.complexity_factor.is_finite() && task.complexity_factor > 0.0) {
                    return Err(EstimatorError::invalid_catalog(format!(
                        "task '{}' has non-positive complexity factor {}",
                        task.id, task.complexity_factor
                    )));
                }
                // Rounded hours must fit in u32 at the largest size
                let largest = task.base_hours * SizeClass::Large.scale() * task.complexity_factor;
                if largest > f64::from(u32::MAX) {
                    return Err(EstimatorError::invalid_catalog(format!(
                        "task '{}' estimates {} hours at large size, above {}",
                        task.id,
                        largest,
                        u32::MAX
                    )));
                }
            }
        }

        Ok(Self { categories })
    }

    /// The compiled-in construction catalog
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Categories in declaration order
    pub fn list_categories(&self) -> Vec<CatalogItem<'_>> {
        self.categories
            .iter()
            .map(|c| CatalogItem {
                id: &c.id,
                display_name: &c.display_name,
            })
            .collect()
    }

    /// Tasks of one category in declaration order
    pub fn list_tasks(&self, category_id: &str) -> Result<Vec<CatalogItem<'_>>> {
        let category = self.category(category_id)?;
        Ok(category
            .tasks
            .iter()
            .map(|t| CatalogItem {
                id: &t.id,
                display_name: &t.display_name,
            })
            .collect())
    }

    /// Look up a task by category and task id
    pub fn lookup_task(&self, category_id: &str, task_id: &str) -> Result<&TaskEntry> {
        self.category(category_id)?
            .task(task_id)
            .ok_or_else(|| EstimatorError::unknown_task(category_id, task_id))
    }

    /// Look up a category by id
    pub fn category(&self, category_id: &str) -> Result<&CategoryEntry> {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| EstimatorError::unknown_category(category_id))
    }

    pub fn contains_category(&self, category_id: &str) -> bool {
        self.categories.iter().any(|c| c.id == category_id)
    }

    /// Position of a category in display order
    pub fn category_index(&self, category_id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == category_id)
    }

    pub fn categories(&self) -> &[CategoryEntry] {
        &self.categories
    }
}
