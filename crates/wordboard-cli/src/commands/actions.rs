use std::io::Write;

use serde_json::json;
use wordboard_core::traits::IWordStore;
use wordboard_core::word::{OwnerDeleteResult, WordId, WordText};

use crate::cli::Ctx;
use crate::error::CliResult;
use crate::render;

pub(crate) fn add(ctx: &Ctx, raw: &str, out: &mut dyn Write) -> CliResult<()> {
    let text = WordText::normalize(raw, ctx.store.config().limits.max_text_length)?;
    let word = ctx.store.create_word(&text, &ctx.identity, ctx.now)?;
    ctx.emit(out, &word, &format!("added #{} {}", word.id, word.text))
}

pub(crate) fn upvote(ctx: &Ctx, id: WordId, out: &mut dyn Write) -> CliResult<()> {
    let word = ctx.store.upvote(id, &ctx.identity, ctx.now)?;
    ctx.emit(
        out,
        &word,
        &format!("upvoted #{} {} (weight {})", word.id, word.text, render::weight(word.weight)),
    )
}

pub(crate) fn unvote(ctx: &Ctx, id: WordId, out: &mut dyn Write) -> CliResult<()> {
    ctx.store.remove_vote(id, &ctx.identity, ctx.now)?;
    ctx.emit(
        out,
        &json!({ "word_id": id, "removed": true }),
        &format!("removed vote from #{id}"),
    )
}

pub(crate) fn disown(ctx: &Ctx, id: WordId, out: &mut dyn Write) -> CliResult<()> {
    let result = ctx.store.delete_owned(id, &ctx.identity, ctx.now)?;
    let human = match &result {
        OwnerDeleteResult::Purged { word_id } => format!("deleted #{word_id}"),
        OwnerDeleteResult::Orphaned { word } => format!(
            "released #{} {} (weight {})",
            word.id,
            word.text,
            render::weight(word.weight)
        ),
    };
    ctx.emit(out, &result, &human)
}

pub(crate) fn describe(ctx: &Ctx, id: WordId, text: &str, out: &mut dyn Write) -> CliResult<()> {
    let stored = ctx.store.set_description(id, &ctx.identity, text)?;
    ctx.emit(
        out,
        &json!({ "word_id": id, "description": stored }),
        &format!("#{id}: {stored}"),
    )
}
