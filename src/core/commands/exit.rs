use std::io::Write;

use log::debug;

use super::{parse_lenient_int, Command, CommandContext, CommandError, Flow};

#[derive(Clone, Debug, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        writeln!(ctx.out, "Goodbye!")?;

        match args.get(1) {
            Some(code) => {
                let code = parse_lenient_int(code) as i32;
                debug!("exit requested with status {}", code);
                Ok(Flow::Terminate(code))
            }
            None => {
                ctx.state.running = false;
                Ok(Flow::Continue)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::Harness;
    use super::*;

    #[test]
    fn test_plain_exit_stops_loop() -> Result<(), CommandError> {
        let mut harness = Harness::new();
        let flow = harness.run(&ExitCommand::new(), &["exit"])?;
        assert_eq!(flow, Flow::Continue);
        assert!(!harness.state.running);
        assert_eq!(harness.out(), "Goodbye!\n");
        Ok(())
    }

    #[test]
    fn test_exit_with_code() -> Result<(), CommandError> {
        let mut harness = Harness::new();
        assert_eq!(
            harness.run(&ExitCommand::new(), &["exit", "3"])?,
            Flow::Terminate(3)
        );
        assert_eq!(harness.out(), "Goodbye!\n");
        Ok(())
    }

    #[test]
    fn test_exit_with_garbage_code_is_zero() -> Result<(), CommandError> {
        let mut harness = Harness::new();
        assert_eq!(
            harness.run(&ExitCommand::new(), &["exit", "soon"])?,
            Flow::Terminate(0)
        );
        assert_eq!(
            harness.run(&ExitCommand::new(), &["exit", "7up"])?,
            Flow::Terminate(7)
        );
        Ok(())
    }
}
