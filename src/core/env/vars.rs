use super::{EnvError, Environment};
use log::debug;
use std::env;

/// The real process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    pub fn new() -> Self {
        Self
    }

    // setenv(3) rejects these with EINVAL; std::env would panic instead.
    fn check_name(name: &str) -> Result<(), EnvError> {
        if name.is_empty() || name.contains('=') || name.contains('\0') {
            return Err(EnvError::InvalidName(name.to_string()));
        }
        Ok(())
    }
}

impl Environment for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        Self::check_name(name)?;
        if value.contains('\0') {
            return Err(EnvError::InvalidValue("value contains a NUL byte"));
        }

        debug!("setting {}={:?}", name, value);
        env::set_var(name, value);
        Ok(())
    }

    fn unset(&mut self, name: &str) -> Result<(), EnvError> {
        Self::check_name(name)?;

        debug!("removing {}", name);
        env::remove_var(name);
        Ok(())
    }

    fn vars(&self) -> Vec<(String, String)> {
        env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }
}
