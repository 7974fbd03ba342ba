use std::io::Write;

use super::{Command, CommandContext, CommandError, Flow};

const HELP_TEXT: &str = "\
Built-in commands:
  help          - Show this help message
  exit [code]   - Exit the shell with optional exit code
  cd [dir]      - Change directory (no argument goes to home)
  pwd           - Print working directory
  echo [args]   - Display arguments
  env           - Display environment variables
  export VAR=val - Set environment variable
  unset VAR     - Remove environment variable
  history [n]   - Show command history (last n entries)

All other commands are executed as external programs.
";

#[derive(Clone, Copy, Debug, Default)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn execute(
        &self,
        _args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        writeln!(ctx.out, "{}", ctx.state.current_dir)?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(
        &self,
        _args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        ctx.out.write_all(HELP_TEXT.as_bytes())?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let words = args.get(1..).unwrap_or_default();
        writeln!(ctx.out, "{}", words.join(" "))?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EnvCommand;

impl Command for EnvCommand {
    fn execute(
        &self,
        _args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        for (name, value) in ctx.env.vars() {
            writeln!(ctx.out, "{}={}", name, value)?;
        }
        Ok(Flow::Continue)
    }
}
