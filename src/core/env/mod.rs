mod vars;

pub use vars::ProcessEnv;

#[derive(Debug, PartialEq, Eq)]
pub enum EnvError {
    InvalidName(String),
    InvalidValue(&'static str),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::InvalidName(name) => write!(f, "Invalid argument: {:?}", name),
            EnvError::InvalidValue(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for EnvError {}

/// Access to the variables every spawned child inherits.
///
/// The bindings themselves are process-global; handlers reach them only
/// through this trait.
pub trait Environment {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError>;
    fn unset(&mut self, name: &str) -> Result<(), EnvError>;
    /// All bindings in the order the OS reports them.
    fn vars(&self) -> Vec<(String, String)>;
}
