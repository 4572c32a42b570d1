mod vars;

pub use vars::EnvVarManager;

#[derive(Debug)]
pub enum EnvError {
    InvalidName(String),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::InvalidName(name) if name.is_empty() => {
                write!(f, "variable name cannot be empty")
            }
            EnvError::InvalidName(name) => write!(f, "invalid variable name: {}", name),
        }
    }
}

impl std::error::Error for EnvError {}
