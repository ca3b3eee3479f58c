use std::io::Write;

use serde_json::json;
use wordboard_core::config::BoardConfig;
use wordboard_core::errors::BoardError;
use wordboard_core::traits::IWordStore;

use crate::cli::Ctx;
use crate::error::CliResult;
use crate::render;

pub(crate) fn sweep(ctx: &Ctx, out: &mut dyn Write) -> CliResult<()> {
    let report = ctx.store.sweep(ctx.now)?;
    ctx.emit(out, &report, &render::render_sweep(&report))
}

/// Unconditional delete by exact text. A miss is not an error: it prints
/// near matches instead.
pub(crate) fn delete(ctx: &Ctx, text: &str, out: &mut dyn Write) -> CliResult<()> {
    let deleted = ctx.store.delete_by_text(text)?;
    let suggestions = match deleted {
        Some(_) => Vec::new(),
        None => ctx.store.find_similar(text)?,
    };

    let human = match deleted {
        Some(id) => format!("deleted {text:?} (#{id})"),
        None if suggestions.is_empty() => format!("{text:?} not found"),
        None => format!("{text:?} not found. Did you mean: {}?", suggestions.join(", ")),
    };
    ctx.emit(
        out,
        &json!({ "text": text, "deleted": deleted, "suggestions": suggestions }),
        &human,
    )
}

pub(crate) fn config(config: &BoardConfig, json: bool, out: &mut dyn Write) -> CliResult<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(config)?)?;
    } else {
        write!(out, "{}", config.to_toml().map_err(BoardError::from)?)?;
    }
    Ok(())
}
