//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod blocked;
pub mod lint;
pub mod next;
pub mod progress;
pub mod rules;

/// specgate - spec linting and lifecycle gating
#[derive(Parser)]
#[command(name = "specgate")]
#[command(version, about = "Validate library specs and track lifecycle progress")]
#[command(long_about = r#"
specgate validates a structured library spec (types, functions, features,
modules, principles) for internal consistency and lifecycle progress.

COMMANDS:
  lint      → Run the lint rules over a spec document
  rules     → List the available rules and their configuration
  next      → Show entities ready to advance to their next stage
  blocked   → Show blocked entities with the reasons
  progress  → Summarize maturity across the library

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run lint rules over a spec document
    Lint(lint::LintArgs),

    /// List available rules
    Rules(rules::RulesArgs),

    /// Show entities ready to advance
    Next(next::NextArgs),

    /// Show blocked entities and why
    Blocked(blocked::BlockedArgs),

    /// Summarize lifecycle progress
    Progress(progress::ProgressArgs),
}
