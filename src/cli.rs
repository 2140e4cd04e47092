use clap::{Parser, Subcommand};

/// Hours Estimator - construction labor hours from a fixed task catalog
#[derive(Parser, Debug)]
#[command(name = "hours-estimator")]
#[command(about = "Estimate construction labor hours by category, task and project size")]
#[command(version)]
pub struct Cli {
    /// Log at info level instead of warnings only (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive estimator form (default)
    Form,
    /// List work categories in display order
    Categories {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the tasks of one category
    Tasks {
        /// Category id (e.g., residential)
        category: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Compute one estimate without the form
    Estimate {
        /// Category id (e.g., commercial)
        #[arg(short, long)]
        category: String,
        /// Task id within the category (e.g., warehouseStructure)
        #[arg(short, long)]
        task: String,
        /// Project size: small, standard or large
        #[arg(short, long, default_value = "standard")]
        size: String,
        /// Print the full breakdown as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_form() {
        let cli = Cli::try_parse_from(["hours-estimator"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }
}
