use crate::config::Config;
use crate::core::context::FieldContext;
use crate::core::repl::SessionShell;
use crate::errors::AppResult;
use std::io;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let ctx = FieldContext::open(cfg)?;
    let mut shell = SessionShell::new(&ctx)?;
    shell.run(io::stdin().lock())
}
