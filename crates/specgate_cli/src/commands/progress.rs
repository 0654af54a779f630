//! Progress command - maturity summary across the library.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;

use specgate_lifecycle::LifecycleReport;
use specgate_model::{DocumentLoader, Maturity};

use crate::config::AppConfig;
use crate::output;

#[derive(Args)]
pub struct ProgressArgs {
    /// Path to the spec document
    #[arg(short, long)]
    pub spec: Option<PathBuf>,

    /// Emit the JSON envelope instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ProgressArgs) -> Result<()> {
    let config = AppConfig::load()?;
    let spec_path = config.resolve_spec(args.spec)?;
    let doc = DocumentLoader::load(&spec_path)
        .with_context(|| format!("loading {}", spec_path.display()))?;

    let report = LifecycleReport::assess(&doc.library)?;
    let ready = report.ready().count();
    let blocked = report.blocked().count();

    if args.json {
        let data = json!({
            "by_maturity": report.by_maturity,
            "by_kind": report.by_kind,
            "ready": ready,
            "blocked": blocked,
        });
        let meta = output::count_meta("tracked", report.entities.len());
        output::print_json("progress", doc.library.name.clone(), data, meta)?;
        return Ok(());
    }

    println!("📊 {} lifecycle progress", doc.library.name);
    println!();
    println!("By maturity:");
    for stage in Maturity::ORDER {
        let count = report
            .by_maturity
            .get(stage.as_str())
            .copied()
            .unwrap_or_default();
        if count > 0 {
            println!("  {:<12} {count}", stage.as_str());
        }
    }
    println!();
    println!("By kind:");
    for (kind, count) in &report.by_kind {
        println!("  {kind:<12} {count}");
    }
    println!();
    println!(
        "{} tracked, {ready} ready, {blocked} blocked",
        report.entities.len()
    );
    Ok(())
}
