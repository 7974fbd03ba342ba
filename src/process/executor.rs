use std::io::{self, Write};
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use super::ProcessError;

/// Status recorded for a program that could not be executed.
pub const NOT_FOUND_STATUS: i32 = 127;

/// How an external command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Exited(i32),
    /// Nothing runnable was found for `argv[0]`; counts as exit status 127.
    NotFound,
    Signaled(i32),
}

impl ProcessStatus {
    pub fn code(&self) -> Option<i32> {
        match self {
            ProcessStatus::Exited(code) => Some(*code),
            ProcessStatus::NotFound => Some(NOT_FOUND_STATUS),
            ProcessStatus::Signaled(_) => None,
        }
    }

    fn from_exit_status(status: ExitStatus) -> Self {
        match (status.code(), status.signal()) {
            (Some(code), _) => ProcessStatus::Exited(code),
            (None, Some(signal)) => ProcessStatus::Signaled(signal),
            // Stopped/continued states are not requested from wait.
            (None, None) => ProcessStatus::Exited(0),
        }
    }
}

/// Runs external programs in the foreground.
#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `argv[0]` from `PATH` with the inherited environment and stdio,
    /// then blocks until it terminates.
    pub fn spawn_process(&self, argv: &[String]) -> Result<ProcessStatus, ProcessError> {
        let Some((program, args)) = argv.split_first() else {
            return Err(ProcessError::Spawn(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty argument vector",
            )));
        };

        debug!("spawning {:?}", argv);
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if is_exec_failure(&e) => {
                debug!("{} could not be executed: {}", program, e);
                return Ok(ProcessStatus::NotFound);
            }
            Err(e) => return Err(ProcessError::Spawn(e)),
        };

        debug!("{} started as pid {}", program, child.id());
        let status = child.wait().map_err(ProcessError::Wait)?;
        let status = ProcessStatus::from_exit_status(status);
        debug!("{} finished: {:?}", program, status);
        Ok(status)
    }

    /// Like [`spawn_process`](Self::spawn_process), writing the user-facing
    /// report for not-found and signal outcomes to `err`. Ordinary exit
    /// statuses are silent whatever their value.
    pub fn run(&self, argv: &[String], err: &mut dyn Write) -> Result<ProcessStatus, ProcessError> {
        let status = self.spawn_process(argv)?;
        match status {
            ProcessStatus::NotFound => {
                let name = argv.first().map(String::as_str).unwrap_or_default();
                let _ = writeln!(err, "shell: {}: command not found", name);
            }
            ProcessStatus::Signaled(signal) => {
                let _ = writeln!(err, "Process terminated by signal {}", signal);
            }
            ProcessStatus::Exited(_) => {}
        }
        Ok(status)
    }
}

// Errors raised by the exec step rather than by process creation itself.
fn is_exec_failure(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied | io::ErrorKind::InvalidInput
    ) || matches!(
        e.raw_os_error(),
        Some(libc::ENOEXEC | libc::ENOTDIR | libc::ELOOP | libc::ENAMETOOLONG | libc::EISDIR)
    )
}
