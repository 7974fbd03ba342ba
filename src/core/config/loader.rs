use std::{fs, io, path::Path};

use log::{debug, info};

use super::{ConfigError, ConfigPaths};
use crate::core::commands::{CommandContext, CommandExecutor, Flow};
use crate::parser::tokenize;

/// Runs the startup file through the dispatcher, one line at a time.
pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
    executor: &'a CommandExecutor,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths, executor: &'a CommandExecutor) -> Self {
        Self { paths, executor }
    }

    pub fn load_configs(&self, ctx: &mut CommandContext<'_>) -> Result<Flow, ConfigError> {
        let path = &self.paths.rc_path;
        match fs::read_to_string(path) {
            Ok(content) => {
                info!("loading {}", path.display());
                Ok(self.source_content(&content, ctx))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if self.paths.explicit {
                    Err(ConfigError::ConfigFileNotFound(display(path)))
                } else {
                    debug!("no startup file at {}", path.display());
                    Ok(Flow::Continue)
                }
            }
            Err(e) => Err(ConfigError::IoError(e)),
        }
    }

    // Lines run like typed input but stay out of the history log.
    fn source_content(&self, content: &str, ctx: &mut CommandContext<'_>) -> Flow {
        for line in content.lines() {
            if line.trim_start().starts_with('#') {
                continue;
            }

            let tokens = tokenize(line);
            if tokens.is_empty() {
                continue;
            }

            debug!("startup: {:?}", tokens);
            let flow = self.executor.dispatch(&tokens, ctx);
            if flow != Flow::Continue || !ctx.state.running {
                return flow;
            }
        }
        Flow::Continue
    }
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::testing::Harness;
    use serial_test::serial;
    use std::env;

    fn load(paths: &ConfigPaths, harness: &mut Harness) -> Result<Flow, ConfigError> {
        let executor = CommandExecutor::new();
        let loader = ConfigLoader::new(paths, &executor);
        let mut ctx = CommandContext {
            state: &mut harness.state,
            env: &mut harness.env,
            out: &mut harness.out,
            err: &mut harness.err,
        };
        loader.load_configs(&mut ctx)
    }

    #[test]
    #[serial]
    fn test_source_runs_lines_without_history() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let rc = dir.path().join("rc");
        fs::write(
            &rc,
            "# comment\n\nexport SIMSH_RC_VAR=\"from rc\"\n   # indented comment\necho loaded\n",
        )?;

        let mut harness = Harness::new();
        let flow = load(&ConfigPaths::with_rc(&rc), &mut harness)?;

        assert_eq!(flow, Flow::Continue);
        assert_eq!(env::var("SIMSH_RC_VAR").as_deref(), Ok("from rc"));
        assert_eq!(harness.out(), "loaded\n");
        assert!(harness.state.history.is_empty());
        env::remove_var("SIMSH_RC_VAR");
        Ok(())
    }

    #[test]
    fn test_exit_in_startup_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let rc = dir.path().join("rc");
        fs::write(&rc, "exit 5\necho unreachable\n")?;

        let mut harness = Harness::new();
        assert_eq!(load(&ConfigPaths::with_rc(&rc), &mut harness)?, Flow::Terminate(5));
        assert_eq!(harness.out(), "Goodbye!\n");
        Ok(())
    }

    #[test]
    fn test_plain_exit_stops_sourcing() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let rc = dir.path().join("rc");
        fs::write(&rc, "exit\necho unreachable\n")?;

        let mut harness = Harness::new();
        assert_eq!(load(&ConfigPaths::with_rc(&rc), &mut harness)?, Flow::Continue);
        assert!(!harness.state.running);
        assert_eq!(harness.out(), "Goodbye!\n");
        Ok(())
    }

    #[test]
    fn test_missing_files() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let missing = dir.path().join("absent");

        let mut harness = Harness::new();
        assert!(matches!(
            load(&ConfigPaths::with_rc(&missing), &mut harness),
            Err(ConfigError::ConfigFileNotFound(_))
        ));

        let implicit = ConfigPaths {
            rc_path: missing,
            explicit: false,
        };
        assert_eq!(load(&implicit, &mut harness)?, Flow::Continue);
        Ok(())
    }

    #[test]
    fn test_errors_do_not_abort_sourcing() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let rc = dir.path().join("rc");
        fs::write(&rc, "unset\necho still here\n")?;

        let mut harness = Harness::new();
        load(&ConfigPaths::with_rc(&rc), &mut harness)?;
        assert_eq!(harness.err(), "unset: usage: unset VAR\n");
        assert_eq!(harness.out(), "still here\n");
        Ok(())
    }
}
