use std::env;

use log::debug;

use super::{Command, CommandContext, CommandError, Flow};
use crate::core::state::ShellState;

#[derive(Clone, Debug, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }

    fn target(args: &[String], ctx: &CommandContext<'_>) -> String {
        match args.get(1) {
            Some(path) => path.clone(),
            None => ctx.env.get("HOME").unwrap_or_else(|| "/".to_string()),
        }
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let target = Self::target(args, ctx);

        env::set_current_dir(&target).map_err(|source| CommandError::Os {
            command: "cd",
            source,
        })?;

        if let Some(dir) = ShellState::query_current_dir() {
            debug!("cd {} -> {}", target, dir);
            ctx.state.current_dir = dir;
        }
        Ok(Flow::Continue)
    }
}
