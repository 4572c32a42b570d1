use super::EnvError;
use crate::core::entries::{Entry, EntryList};

/// The shell's private copy of the environment.
///
/// Taken once from the hosting process at startup; afterwards the host
/// environment is never read or written again. Child processes receive this
/// list as their complete environment.
#[derive(Clone, Debug, Default)]
pub struct EnvVarManager {
    vars: EntryList,
}

impl EnvVarManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots the current process environment.
    pub fn inherit() -> Self {
        Self::from_vars(
            std::env::vars_os()
                .map(|(k, v)| (k.to_string_lossy().into_owned(), v.to_string_lossy().into_owned())),
        )
    }

    pub fn from_vars<K, V, I>(vars: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            vars: vars.into_iter().collect(),
        }
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if name.is_empty() || name.contains('=') {
            return Err(EnvError::InvalidName(name.to_string()));
        }

        self.vars.set(name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name)
    }

    /// Removes `name`, returning whether it was present.
    pub fn unset(&mut self, name: &str) -> bool {
        self.vars.remove(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
