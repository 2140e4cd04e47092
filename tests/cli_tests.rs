//! Tests for command line parsing
//!
//! These tests verify the subcommands and their defaults.

use clap::Parser;
use hours_estimator::cli::{Cli, Commands};

#[test]
fn test_form_subcommand() {
    let cli = Cli::try_parse_from(["hours-estimator", "form"]).unwrap();
    assert_eq!(cli.command, Some(Commands::Form));
}

#[test]
fn test_estimate_defaults_to_standard_size() {
    let cli = Cli::try_parse_from([
        "hours-estimator",
        "estimate",
        "--category",
        "residential",
        "--task",
        "houseFoundation",
    ])
    .unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Estimate {
            category: "residential".to_string(),
            task: "houseFoundation".to_string(),
            size: "standard".to_string(),
            json: false,
        })
    );
}

#[test]
fn test_estimate_short_flags_and_json() {
    let cli = Cli::try_parse_from([
        "hours-estimator",
        "estimate",
        "-c",
        "commercial",
        "-t",
        "warehouseStructure",
        "-s",
        "small",
        "--json",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::Estimate { size, json, .. }) => {
            assert_eq!(size, "small");
            assert!(json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_estimate_requires_task() {
    let result = Cli::try_parse_from(["hours-estimator", "estimate", "--category", "residential"]);
    assert!(result.is_err());
}

#[test]
fn test_tasks_takes_positional_category() {
    let cli = Cli::try_parse_from(["hours-estimator", "tasks", "renovation", "--json"]).unwrap();
    assert_eq!(
        cli.command,
        Some(Commands::Tasks {
            category: "renovation".to_string(),
            json: true,
        })
    );
}

#[test]
fn test_verbose_is_global() {
    let cli = Cli::try_parse_from(["hours-estimator", "categories", "-v"]).unwrap();
    assert!(cli.verbose);
    assert_eq!(cli.command, Some(Commands::Categories { json: false }));
}
