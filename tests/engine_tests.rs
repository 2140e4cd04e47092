//! Tests for the Estimation Engine
//!
//! These tests verify:
//! - The reference estimates for the built-in catalog
//! - Selection failures and that they leave state untouched
//! - The task reset on every category selection

use hours_estimator::{
    Catalog, CategoryEntry, EstimationEngine, EstimatorError, SelectionState, SizeClass, TaskEntry,
};

fn estimate(category: &str, task: &str, size: SizeClass) -> u32 {
    let mut engine = EstimationEngine::with_builtin_catalog();
    engine.select_category(category).unwrap();
    engine.select_task(task).unwrap();
    engine.select_size(size);
    engine.estimate_hours().unwrap()
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn test_house_foundation_standard() {
    assert_eq!(estimate("residential", "houseFoundation", SizeClass::Standard), 80);
}

#[test]
fn test_frame_walls_large() {
    assert_eq!(estimate("residential", "frameWalls", SizeClass::Large), 216);
}

#[test]
fn test_warehouse_structure_small() {
    assert_eq!(estimate("commercial", "warehouseStructure", SizeClass::Small), 294);
}

#[test]
fn test_historic_preservation_standard() {
    assert_eq!(
        estimate("renovation", "historicPreservation", SizeClass::Standard),
        320
    );
}

#[test]
fn test_every_builtin_task_estimates() {
    let catalog = Catalog::builtin();
    for category in catalog.categories() {
        for task in &category.tasks {
            for size in SizeClass::all() {
                let expected = (task.base_hours * size.scale() * task.complexity_factor).round() as u32;
                assert_eq!(estimate(&category.id, &task.id, size), expected);
            }
        }
    }
}

// =============================================================================
// Failure Cases
// =============================================================================

#[test]
fn test_estimate_with_no_category_is_incomplete() {
    let engine = EstimationEngine::with_builtin_catalog();
    assert!(matches!(
        engine.estimate_hours(),
        Err(EstimatorError::IncompleteSelection)
    ));
}

#[test]
fn test_kitchen_remodel_not_in_commercial() {
    let mut engine = EstimationEngine::with_builtin_catalog();
    engine.select_category("commercial").unwrap();
    let err = engine.select_task("kitchenRemodel").unwrap_err();
    match err {
        EstimatorError::UnknownTask { category, task } => {
            assert_eq!(category, "commercial");
            assert_eq!(task, "kitchenRemodel");
        }
        other => panic!("expected UnknownTask, got {other:?}"),
    }
}

#[test]
fn test_failed_commands_leave_selection_unchanged() {
    let mut engine = EstimationEngine::with_builtin_catalog();
    engine.select_category("renovation").unwrap();
    engine.select_task("bathroomUpgrade").unwrap();
    engine.select_size(SizeClass::Large);
    let before = engine.selection().clone();

    assert!(engine.select_category("Renovation").is_err());
    assert!(engine.select_task("frameWalls").is_err());
    assert!(engine.select_size_named("Large").is_err());

    assert_eq!(engine.selection(), &before);
    assert_eq!(engine.estimate_hours().unwrap(), 156);
}

#[test]
fn test_no_category_selected_error() {
    let mut engine = EstimationEngine::with_builtin_catalog();
    assert!(matches!(
        engine.select_task("houseFoundation"),
        Err(EstimatorError::NoCategorySelected)
    ));
    assert_eq!(engine.selection(), &SelectionState::default());
}

// =============================================================================
// State Transitions
// =============================================================================

#[test]
fn test_switching_category_requires_new_task() {
    let mut engine = EstimationEngine::with_builtin_catalog();
    engine.select_category("residential").unwrap();
    engine.select_task("roofInstallation").unwrap();
    assert!(engine.can_estimate());

    engine.select_category("commercial").unwrap();
    assert!(!engine.can_estimate());
    assert!(matches!(
        engine.estimate_hours(),
        Err(EstimatorError::IncompleteSelection)
    ));

    engine.select_task("officeBuilding").unwrap();
    assert_eq!(engine.estimate_hours().unwrap(), 336);
}

#[test]
fn test_session_is_reenterable() {
    let mut engine = EstimationEngine::with_builtin_catalog();
    engine.select_category("residential").unwrap();
    engine.select_task("interiorFinishing").unwrap();
    assert_eq!(engine.estimate_hours().unwrap(), 240);

    engine.select_size(SizeClass::Small);
    assert_eq!(engine.estimate_hours().unwrap(), 168);

    engine.select_size(SizeClass::Large);
    assert_eq!(engine.estimate_hours().unwrap(), 360);
}

#[test]
fn test_engine_over_custom_catalog() {
    let catalog = Catalog::new(vec![CategoryEntry::new(
        "landscaping",
        "Landscaping",
        vec![TaskEntry::new("deck", "Deck Build", 40.0, 2.5)],
    )])
    .unwrap();
    let mut engine = EstimationEngine::new(&catalog);
    engine.select_category("landscaping").unwrap();
    engine.select_task("deck").unwrap();
    engine.select_size(SizeClass::Small);
    assert_eq!(engine.estimate_hours().unwrap(), 70);
    assert!(engine.select_category("residential").is_err());
}
