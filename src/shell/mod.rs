use std::io::{self, Write};

use log::{debug, warn};

use crate::{
    core::{
        commands::{CommandContext, CommandExecutor, Flow},
        config::{Config, ConfigLoader},
        env::ProcessEnv,
        state::ShellState,
    },
    error::ShellError,
    flags::Flags,
    input::{EditorReader, LineReader, ReadOutcome},
    process::InterruptFlag,
};

pub const BANNER: &str = "Simple shell - Type 'help' for commands, 'exit' to quit";
const INTERRUPT_HINT: &str = "Use 'exit' to quit";

/// The interactive read-dispatch loop.
pub struct Shell<R: LineReader = EditorReader> {
    reader: R,
    state: ShellState,
    env: ProcessEnv,
    executor: CommandExecutor,
    config: Config,
    interrupts: InterruptFlag,
    quiet: bool,
}

impl Shell<EditorReader> {
    pub fn new(flags: &Flags) -> Result<Self, ShellError> {
        let reader = EditorReader::new()?;

        let interrupts = InterruptFlag::new();
        interrupts.install()?;

        let config = Config::new(flags).unwrap_or_else(|e| {
            warn!("startup file disabled: {}", e);
            Config::disabled()
        });

        Ok(Shell::with_reader(reader, config, flags.is_set("quiet")).with_interrupts(interrupts))
    }
}

impl<R: LineReader> Shell<R> {
    pub fn with_reader(reader: R, config: Config, quiet: bool) -> Self {
        Shell {
            reader,
            state: ShellState::new(),
            env: ProcessEnv::new(),
            executor: CommandExecutor::new(),
            config,
            interrupts: InterruptFlag::new(),
            quiet,
        }
    }

    pub fn with_state(mut self, state: ShellState) -> Self {
        self.state = state;
        self
    }

    pub fn with_interrupts(mut self, interrupts: InterruptFlag) -> Self {
        self.interrupts = interrupts;
        self
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Runs until `exit` or end-of-input and returns the process exit status.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run_with(&mut stdout.lock(), &mut stderr.lock())
    }

    pub fn run_with(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> Result<i32, ShellError> {
        if !self.quiet {
            writeln!(out, "{}", BANNER)?;
        }

        if let Flow::Terminate(code) = self.load_config(out, err) {
            return Ok(code);
        }

        while self.state.running {
            if self.interrupts.take() {
                debug!("interrupt received, redrawing prompt");
                writeln!(out)?;
            }
            out.flush()?;

            match self.reader.read_line(&self.state.prompt())? {
                ReadOutcome::Line(line) => {
                    let mut ctx = CommandContext {
                        state: &mut self.state,
                        env: &mut self.env,
                        out: &mut *out,
                        err: &mut *err,
                    };
                    if let Flow::Terminate(code) = self.executor.execute_line(&line, &mut ctx) {
                        out.flush()?;
                        return Ok(code);
                    }
                }
                ReadOutcome::Interrupted => {
                    if !self.quiet {
                        writeln!(out, "{}", INTERRUPT_HINT)?;
                    }
                }
                ReadOutcome::Eof => {
                    writeln!(out)?;
                    break;
                }
            }
        }

        out.flush()?;
        Ok(0)
    }

    fn load_config(&mut self, out: &mut dyn Write, err: &mut dyn Write) -> Flow {
        let Some(paths) = self.config.paths() else {
            return Flow::Continue;
        };

        let loader = ConfigLoader::new(paths, &self.executor);
        let mut ctx = CommandContext {
            state: &mut self.state,
            env: &mut self.env,
            out,
            err,
        };
        match loader.load_configs(&mut ctx) {
            Ok(flow) => flow,
            Err(e) => {
                warn!("{}", e);
                if !self.quiet {
                    let _ = writeln!(ctx.err, "shell: {}", e);
                }
                Flow::Continue
            }
        }
    }
}
