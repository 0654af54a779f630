//! Rules command - list the registry with configured enablement.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use specgate_lint::LintRunner;

use crate::config::AppConfig;
use crate::output;

#[derive(Args)]
pub struct RulesArgs {
    /// Restrict to one category (structural, naming, ...)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Emit the JSON envelope instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: RulesArgs) -> Result<()> {
    let config = AppConfig::load()?;
    let runner = LintRunner::new(config.lint);

    let mut rules = runner.available_rules();
    if let Some(category) = &args.category {
        rules.retain(|r| r.category.as_str() == category);
    }

    if args.json {
        let meta = output::count_meta("rules", rules.len());
        output::print_json("rules", "", &rules, meta)?;
        return Ok(());
    }

    for rule in &rules {
        let marker = if rule.enabled { "✅" } else { "⛔" };
        println!(
            "{marker} {}  {:<32} {:<12} {:<8} {}",
            rule.id,
            rule.name,
            rule.category.as_str(),
            rule.default_severity.as_str(),
            rule.description
        );
    }
    println!();
    println!("{} rule(s)", rules.len());
    Ok(())
}
