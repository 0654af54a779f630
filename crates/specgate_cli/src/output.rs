//! JSON envelope output shared by all subcommands.

use anyhow::Result;
use serde::Serialize;
use serde_json::json;

/// The stable envelope every `--json` invocation prints.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub command: &'static str,
    pub library: String,
    pub data: T,
    pub meta: serde_json::Value,
}

pub fn print_json<T: Serialize>(
    command: &'static str,
    library: impl Into<String>,
    data: T,
    meta: serde_json::Value,
) -> Result<()> {
    let envelope = Envelope {
        command,
        library: library.into(),
        data,
        meta,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

/// Meta block with a single count field.
pub fn count_meta(key: &str, value: usize) -> serde_json::Value {
    json!({ key: value })
}
