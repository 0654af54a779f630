//! Blocked command - entities that cannot advance, with reasons.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use specgate_lifecycle::LifecycleReport;
use specgate_model::DocumentLoader;

use crate::config::AppConfig;
use crate::output;

#[derive(Args)]
pub struct BlockedArgs {
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

pub fn execute(args: BlockedArgs) -> Result<()> {
    let config = AppConfig::load()?;
    let spec_path = config.resolve_spec(args.spec)?;
    let doc = DocumentLoader::load(&spec_path)
        .with_context(|| format!("loading {}", spec_path.display()))?;

    let report = LifecycleReport::assess(&doc.library)?;
    let mut blocked: Vec<_> = report
        .blocked()
        .filter(|s| match &args.kind {
            Some(kind) => s.entity.kind.as_str() == kind,
            None => true,
        })
        .collect();
    if let Some(limit) = args.limit {
        blocked.truncate(limit);
    }

    if args.json {
        let meta = output::count_meta("blocked", blocked.len());
        output::print_json("blocked", doc.library.name.clone(), &blocked, meta)?;
        return Ok(());
    }

    if blocked.is_empty() {
        println!("✅ Nothing is blocked.");
        return Ok(());
    }
    for status in &blocked {
        println!(
            "🚫 {} ({})",
            status.entity.entity_ref,
            status.entity.kind.as_str()
        );
        for reason in &status.blocked_reasons {
            println!("      - {reason}");
        }
    }
    println!();
    println!("{} blocked entity(ies)", blocked.len());
    Ok(())
}
