use std::collections::BTreeMap;
use std::io::{self, Write};

use log::debug;

mod builtin;
mod cd;
mod exit;
mod export;
mod history;

pub use builtin::{EchoCommand, EnvCommand, HelpCommand, PwdCommand};
pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use export::{ExportCommand, UnsetCommand};
pub use history::HistoryCommand;

use crate::core::env::{EnvError, Environment};
use crate::core::state::ShellState;
use crate::parser::tokenize;
use crate::process::{ProcessError, ProcessExecutor};

/// Names handled in-process. Anything else is launched as a program.
pub const BUILTINS: [&str; 9] = [
    "exit", "cd", "pwd", "help", "echo", "env", "export", "unset", "history",
];

#[derive(Debug)]
pub enum CommandError {
    Usage(&'static str),
    Os {
        command: &'static str,
        source: io::Error,
    },
    Env {
        command: &'static str,
        source: EnvError,
    },
    IoError(io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Usage(usage) => write!(f, "{}", usage),
            CommandError::Os { command, source } => write!(f, "{}: {}", command, source),
            CommandError::Env { command, source } => write!(f, "{}: {}", command, source),
            CommandError::IoError(err) => write!(f, "write error: {}", err),
            CommandError::ProcessError(err) => write!(f, "shell: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Leave the process right away with this status.
    Terminate(i32),
}

/// Everything a handler may touch during one dispatch.
pub struct CommandContext<'a> {
    pub state: &'a mut ShellState,
    pub env: &'a mut dyn Environment,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

pub trait Command {
    /// `args[0]` is the command name itself.
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>)
        -> Result<Flow, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Cd(CdCommand),
    Pwd(PwdCommand),
    Help(HelpCommand),
    Echo(EchoCommand),
    Env(EnvCommand),
    Export(ExportCommand),
    Unset(UnsetCommand),
    History(HistoryCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<Flow, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args, ctx),
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Pwd(cmd) => cmd.execute(args, ctx),
            CommandType::Help(cmd) => cmd.execute(args, ctx),
            CommandType::Echo(cmd) => cmd.execute(args, ctx),
            CommandType::Env(cmd) => cmd.execute(args, ctx),
            CommandType::Export(cmd) => cmd.execute(args, ctx),
            CommandType::Unset(cmd) => cmd.execute(args, ctx),
            CommandType::History(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// Routes tokenized lines to a built-in handler or the process launcher.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("pwd", CommandType::Pwd(PwdCommand));
        commands.insert("help", CommandType::Help(HelpCommand));
        commands.insert("echo", CommandType::Echo(EchoCommand));
        commands.insert("env", CommandType::Env(EnvCommand));
        commands.insert("export", CommandType::Export(ExportCommand::new()));
        commands.insert("unset", CommandType::Unset(UnsetCommand::new()));
        commands.insert("history", CommandType::History(HistoryCommand::new()));

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    /// Handles one interactive line: tokenize, record it, dispatch.
    pub fn execute_line(&self, line: &str, ctx: &mut CommandContext<'_>) -> Flow {
        let tokens = tokenize(line);
        if tokens.is_empty() {
            return Flow::Continue;
        }

        ctx.state.history.add(line);
        self.dispatch(&tokens, ctx)
    }

    /// Runs an already tokenized command. Failures are reported to the
    /// error stream and never end the loop.
    pub fn dispatch(&self, tokens: &[String], ctx: &mut CommandContext<'_>) -> Flow {
        let Some(name) = tokens.first() else {
            return Flow::Continue;
        };

        let result = match self.commands.get(name.as_str()) {
            Some(cmd) => {
                debug!("builtin {}", name);
                cmd.execute(tokens, ctx)
            }
            None => {
                debug!("external {}", name);
                self.process_executor
                    .run(tokens, ctx.err)
                    .map(|_| Flow::Continue)
                    .map_err(CommandError::from)
            }
        };

        match result {
            Ok(flow) => flow,
            Err(e) => {
                debug!("{} failed: {:?}", name, e);
                let _ = writeln!(ctx.err, "{}", e);
                Flow::Continue
            }
        }
    }
}

/// Integer conversion with C `atoi` leniency: optional leading whitespace and
/// sign, then as many digits as are present. No digits yields 0.
pub fn parse_lenient_int(input: &str) -> i64 {
    let s = input.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
