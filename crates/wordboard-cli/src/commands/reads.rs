use std::io::Write;

use wordboard_core::traits::IWordStore;
use wordboard_core::word::Identity;

use crate::cli::Ctx;
use crate::error::CliResult;
use crate::render;

pub(crate) fn list(ctx: &Ctx, out: &mut dyn Write) -> CliResult<()> {
    let words = ctx.store.list_words_for(&ctx.identity, ctx.now)?;
    ctx.emit(out, &words, &render::render_words(&words))
}

pub(crate) fn user(ctx: &Ctx, identity: Option<&str>, out: &mut dyn Write) -> CliResult<()> {
    let identity = identity.map_or_else(|| ctx.identity.clone(), Identity::new);
    let data = ctx.store.user_data(&identity, ctx.now)?;
    ctx.emit(out, &data, &render::render_user_data(&data))
}

pub(crate) fn dump(ctx: &Ctx, out: &mut dyn Write) -> CliResult<()> {
    let records = ctx.store.dump()?;
    ctx.emit(out, &records, &render::render_dump(&records))
}
