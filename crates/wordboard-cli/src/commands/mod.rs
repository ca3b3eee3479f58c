//! One handler per subcommand. Handlers call the store and hand the result
//! to `Ctx::emit`; formatting lives in `render`.

pub(crate) mod actions;
pub(crate) mod maintenance;
pub(crate) mod reads;
