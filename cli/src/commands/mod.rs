pub mod background;
pub mod config;
pub mod language;
pub mod status;
pub mod storage;
pub mod theme;

use color_eyre::eyre::Result;
use serde::Serialize;

pub(crate) fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", text);
    Ok(())
}
