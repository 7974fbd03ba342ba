use std::io::Write;

use super::{parse_lenient_int, Command, CommandContext, CommandError, Flow};

#[derive(Clone, Debug, Default)]
pub struct HistoryCommand;

impl HistoryCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for HistoryCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let count = args.get(1).map(|n| parse_lenient_int(n));

        for (index, line) in ctx.state.history.numbered(count) {
            writeln!(ctx.out, "{} {}", index, line)?;
        }
        Ok(Flow::Continue)
    }
}
