use super::{Command, CommandContext, CommandError, Flow};

const EXPORT_USAGE: &str = "export: usage: export VAR=value";
const UNSET_USAGE: &str = "unset: usage: unset VAR";

#[derive(Clone, Debug, Default)]
pub struct ExportCommand;

impl ExportCommand {
    pub fn new() -> Self {
        Self
    }

    /// Splits `NAME=value` on the first `=`; the value may be empty or hold
    /// further `=` characters.
    fn parse_export(args: &[String]) -> Result<(&str, &str), CommandError> {
        args.get(1)
            .and_then(|assignment| assignment.split_once('='))
            .ok_or(CommandError::Usage(EXPORT_USAGE))
    }
}

impl Command for ExportCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let (name, value) = Self::parse_export(args)?;

        ctx.env
            .set(name, value)
            .map_err(|source| CommandError::Env {
                command: "export",
                source,
            })?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone, Debug, Default)]
pub struct UnsetCommand;

impl UnsetCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for UnsetCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        let name = args.get(1).ok_or(CommandError::Usage(UNSET_USAGE))?;

        ctx.env.unset(name).map_err(|source| CommandError::Env {
            command: "unset",
            source,
        })?;
        Ok(Flow::Continue)
    }
}
