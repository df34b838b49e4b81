//! Output formatting for CLI results

use serde::Serialize;

pub mod json;

/// Print `data` to stdout as pretty JSON with a metadata envelope
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", json::format_json(data)?);
    Ok(())
}
