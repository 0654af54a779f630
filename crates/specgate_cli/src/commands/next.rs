//! Next command - entities ready to advance.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use specgate_lifecycle::LifecycleReport;
use specgate_model::DocumentLoader;

use crate::config::AppConfig;
use crate::output;

#[derive(Args)]
pub struct NextArgs {
    /// Path to the spec document
    #[arg(short, long)]
    pub spec: Option<PathBuf>,

    /// Restrict to one entity kind (type, function, feature, method)
    #[arg(short = 't', long = "type", value_name = "KIND")]
    pub kind: Option<String>,

    /// Show at most N entities
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Emit the JSON envelope instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: NextArgs) -> Result<()> {
    let config = AppConfig::load()?;
    let spec_path = config.resolve_spec(args.spec)?;
    let doc = DocumentLoader::load(&spec_path)
        .with_context(|| format!("loading {}", spec_path.display()))?;

    let report = LifecycleReport::assess(&doc.library)?;
    let mut ready: Vec<_> = report
        .ready()
        .filter(|s| match &args.kind {
            Some(kind) => s.entity.kind.as_str() == kind,
            None => true,
        })
        .collect();
    if let Some(limit) = args.limit {
        ready.truncate(limit);
    }

    if args.json {
        let meta = output::count_meta("ready", ready.len());
        output::print_json("next", doc.library.name.clone(), &ready, meta)?;
        return Ok(());
    }

    if ready.is_empty() {
        println!("Nothing is ready to advance.");
        return Ok(());
    }
    for status in &ready {
        let from = status
            .entity
            .maturity
            .map(|m| m.to_string())
            .or_else(|| status.entity.lifecycle_state.clone())
            .unwrap_or_default();
        match status.next_maturity {
            Some(next) => println!(
                "➡️  {} ({}): {} -> {}",
                status.entity.entity_ref,
                status.entity.kind.as_str(),
                from,
                next
            ),
            None => println!(
                "➡️  {} ({}): {}",
                status.entity.entity_ref,
                status.entity.kind.as_str(),
                from
            ),
        }
    }
    Ok(())
}
