//! Headless output for the command line
//!
//! Drives the same engine commands as the form and writes listings and
//! estimates as plain text or JSON.

use serde::Serialize;
use std::io::Write;

use crate::catalog::{Catalog, TaskEntry};
use crate::engine::{CommandOutcome, Estimate, EstimationEngine, FormCommand};
use crate::error::{EstimatorError, Result};
use crate::types::SizeClass;

#[derive(Serialize)]
struct TaskListing<'a> {
    category: &'a str,
    tasks: &'a [TaskEntry],
}

/// Write the category list
pub fn write_categories<W: Write>(out: &mut W, catalog: &Catalog, json: bool) -> Result<()> {
    let categories = catalog.list_categories();
    if json {
        serde_json::to_writer_pretty(&mut *out, &categories)?;
        writeln!(out)?;
        return Ok(());
    }

    for item in categories {
        writeln!(out, "{:<14} {}", item.id, item.display_name)?;
    }
    Ok(())
}

/// Write the tasks of one category
pub fn write_tasks<W: Write>(out: &mut W, catalog: &Catalog, category_id: &str, json: bool) -> Result<()> {
    let category = catalog.category(category_id)?;
    if json {
        let listing = TaskListing {
            category: &category.id,
            tasks: &category.tasks,
        };
        serde_json::to_writer_pretty(&mut *out, &listing)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", category.display_name)?;
    for task in &category.tasks {
        writeln!(
            out,
            "  {:<22} {:<32} {:>5} h  x{}",
            task.id, task.display_name, task.base_hours, task.complexity_factor
        )?;
    }
    Ok(())
}

/// Run the four form commands in order and return the estimate
pub fn run_estimate(
    engine: &mut EstimationEngine<'_>,
    category_id: &str,
    task_id: &str,
    size: &str,
) -> Result<Estimate> {
    let size = SizeClass::parse(size)?;
    let commands = [
        FormCommand::SelectCategory(category_id.to_string()),
        FormCommand::SelectTask(task_id.to_string()),
        FormCommand::SelectSize(size),
        FormCommand::RequestEstimate,
    ];

    let mut estimate = None;
    for command in commands {
        if let CommandOutcome::Estimated(e) = engine.apply(command)? {
            estimate = Some(e);
        }
    }
    estimate.ok_or(EstimatorError::IncompleteSelection)
}

/// Write an estimate
pub fn write_estimate<W: Write>(out: &mut W, estimate: &Estimate, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, estimate)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Estimated Project Hours: {}", estimate.hours)?;
    writeln!(out, "Estimate based on project complexity and size")?;
    Ok(())
}
