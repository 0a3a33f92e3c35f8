
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Flag {0} is declared more than once")]
    Duplicate(String),
    #[error("Flag at position {0} has neither a long nor a short name")]
    Unnamed(usize),
}

/// What happens when a flag is matched.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action<V> {
    /// Route the flag to the caller under this identifier.
    Dispatch(char),
    /// Assign `value` to the caller's `variable`.
    Set(V, i32),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FlagSpec<V> {
    pub long: Option<&'static str>,
    pub short: Option<char>,
    pub takes_argument: bool,
    pub action: Action<V>,
}

impl<V> FlagSpec<V> {
    /// A short flag with a long alias, dispatched under its short char.
    pub fn alias(short: char, long: &'static str, takes_argument: bool) -> Self {
        Self {
            long: Some(long),
            short: Some(short),
            takes_argument,
            action: Action::Dispatch(short),
        }
    }

    pub fn short(short: char, takes_argument: bool) -> Self {
        Self {
            long: None,
            short: Some(short),
            takes_argument,
            action: Action::Dispatch(short),
        }
    }

    /// A long flag without argument that assigns `value` to `variable`.
    pub fn set(long: &'static str, variable: V, value: i32) -> Self {
        Self {
            long: Some(long),
            short: None,
            takes_argument: false,
            action: Action::Set(variable, value),
        }
    }
}

/// Validated, immutable table of the flags a parser recognizes.
#[derive(Debug, Clone)]
pub struct FlagSet<V>(Vec<FlagSpec<V>>);

impl<V> FlagSet<V> {
    pub fn new(specs: Vec<FlagSpec<V>>) -> Result<Self, Error> {
        let mut longs = HashSet::new();
        let mut shorts = HashSet::new();

        for (index, spec) in specs.iter().enumerate() {
            if spec.long.is_none() && spec.short.is_none() {
                return Err(Error::Unnamed(index));
            }
            if let Some(long) = spec.long {
                if !longs.insert(long) {
                    return Err(Error::Duplicate(format!("--{long}")));
                }
            }
            if let Some(short) = spec.short {
                if !shorts.insert(short) {
                    return Err(Error::Duplicate(format!("-{short}")));
                }
            }
        }

        Ok(Self(specs))
    }

    pub fn specs(&self) -> &[FlagSpec<V>] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&FlagSpec<V>> {
        self.0.get(index)
    }

    /// Exact match on the long name, no prefix abbreviation.
    pub fn find_long(&self, name: &str) -> Option<(usize, &FlagSpec<V>)> {
        self.0
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.long == Some(name))
    }

    pub fn find_short(&self, short: char) -> Option<&FlagSpec<V>> {
        self.0.iter().find(|spec| spec.short == Some(short))
    }
}
