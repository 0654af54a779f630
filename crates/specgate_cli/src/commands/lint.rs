//! Lint command - run the rule engine over a spec document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use tracing::info;

use specgate_lint::{LintRunner, Severity};
use specgate_model::DocumentLoader;

use crate::config::AppConfig;
use crate::output;

#[derive(Args)]
pub struct LintArgs {
    /// Path to the spec document (.json, .yaml, .yml)
    #[arg(short, long)]
    pub spec: Option<PathBuf>,

    /// Comma-separated rule ids to run (default: all enabled)
    #[arg(short, long)]
    pub rules: Option<String>,

    /// Drop issues below this severity (error, warning, info)
    #[arg(long, value_name = "SEVERITY")]
    pub min_severity: Option<Severity>,

    /// Emit the JSON envelope instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: LintArgs) -> Result<()> {
    let config = AppConfig::load()?;
    let spec_path = config.resolve_spec(args.spec)?;

    info!("Linting spec: {}", spec_path.display());
    let doc = DocumentLoader::load(&spec_path)
        .with_context(|| format!("loading {}", spec_path.display()))?;

    let selected: Option<Vec<&str>> = args
        .rules
        .as_deref()
        .map(|r| r.split(',').map(str::trim).filter(|s| !s.is_empty()).collect());

    let runner = LintRunner::new(config.lint);
    let issues = runner.run(&doc.library, selected.as_deref(), args.min_severity);
    let errors = issues.iter().filter(|i| i.severity == Severity::Error).count();

    if args.json {
        let meta = json!({
            "spec": spec_path.display().to_string(),
            "issues": issues.len(),
            "errors": errors,
        });
        output::print_json("lint", doc.library.name.clone(), &issues, meta)?;
    } else if issues.is_empty() {
        println!("✅ {}: no issues", doc.library.name);
    } else {
        for issue in &issues {
            let marker = match issue.severity {
                Severity::Error => "❌",
                Severity::Warning => "⚠️ ",
                Severity::Info => "ℹ️ ",
            };
            println!(
                "{marker} [{}] {} ({})",
                issue.rule, issue.message, issue.path
            );
        }
        println!();
        println!("{} issue(s), {} error(s)", issues.len(), errors);
    }

    if errors > 0 {
        anyhow::bail!("Validation failed with {errors} error(s)");
    }
    Ok(())
}
