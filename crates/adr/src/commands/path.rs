use anyhow::Result;

use crate::config::{AdrConfig, AppContext};
use crate::utils::log::t;

pub fn run(ctx: &AppContext) -> Result<()> {
  let cfg = AdrConfig::load(&ctx.paths)?;
  anstream::println!("{}", t::path(cfg.directory.display()));
  Ok(())
}
