//! Null-safe evaluation of chains of optional lookups.
//!
//! A chain such as `item -> group -> package -> code -> name` can break at
//! any link. A thunk walks the chain with `?`, using [`OrAbsent::or_absent`]
//! on every optional link and [`OrDefect::or_defect`] on every fallible call.
//! [`evaluate`] then folds a missing link into `None` while defects reach the
//! caller untouched.

use thiserror::Error;

/// Marker raised when a named link of a chain has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("link '{link}' is absent")]
pub struct MissingLink {
    pub link: &'static str,
}

impl MissingLink {
    pub fn new(link: &'static str) -> Self {
        Self { link }
    }
}

/// Fault a chain thunk may raise: expected absence, or a defect of type `E`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError<E> {
    Absent(MissingLink),
    Defect(E),
}

impl<E> ChainError<E> {
    pub fn is_absent(&self) -> bool {
        matches!(self, ChainError::Absent(_))
    }
}

impl<E> From<MissingLink> for ChainError<E> {
    fn from(missing: MissingLink) -> Self {
        ChainError::Absent(missing)
    }
}

pub trait OrAbsent<T> {
    /// Names this link of the chain; `None` becomes [`MissingLink`].
    fn or_absent(self, link: &'static str) -> std::result::Result<T, MissingLink>;
}

impl<T> OrAbsent<T> for Option<T> {
    fn or_absent(self, link: &'static str) -> std::result::Result<T, MissingLink> {
        self.ok_or(MissingLink { link })
    }
}

pub trait OrDefect<T, E> {
    /// Marks the error of a fallible call as a defect, never as absence.
    fn or_defect(self) -> std::result::Result<T, ChainError<E>>;
}

impl<T, E> OrDefect<T, E> for std::result::Result<T, E> {
    fn or_defect(self) -> std::result::Result<T, ChainError<E>> {
        self.map_err(ChainError::Defect)
    }
}

/// Runs `thunk` once. A missing link yields `Ok(None)`; a defect is returned
/// as `Err` exactly as the thunk raised it.
pub fn evaluate<T, E, F>(thunk: F) -> std::result::Result<Option<T>, E>
where
    F: FnOnce() -> std::result::Result<T, ChainError<E>>,
{
    match thunk() {
        Ok(value) => Ok(Some(value)),
        Err(ChainError::Absent(_)) => Ok(None),
        Err(ChainError::Defect(err)) => Err(err),
    }
}

/// Like [`evaluate`], substituting `fallback` when the chain is broken.
pub fn evaluate_or<T, E, F>(thunk: F, fallback: T) -> std::result::Result<T, E>
where
    F: FnOnce() -> std::result::Result<T, ChainError<E>>,
{
    evaluate(thunk).map(|value| value.unwrap_or(fallback))
}

/// Evaluates a thunk that can only fail by absence.
pub fn null_safe<T, F>(thunk: F) -> Option<T>
where
    F: FnOnce() -> std::result::Result<T, MissingLink>,
{
    thunk().ok()
}

/// Outcome of walking a [`Chain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    Present(T),
    /// `depth` counts the links that resolved before `link` came up empty.
    Absent { link: MissingLink, depth: usize },
}

impl<T> Resolution<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Resolution::Present(_))
    }

    pub fn absent_link(&self) -> Option<&'static str> {
        match self {
            Resolution::Present(_) => None,
            Resolution::Absent { link, .. } => Some(link.link),
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Resolution::Present(value) => Some(value),
            Resolution::Absent { .. } => None,
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        self.into_option().unwrap_or(fallback)
    }
}

#[derive(Debug)]
enum ChainState<T> {
    Live(T),
    Broken(MissingLink),
}

/// Explicit and-then composition of optional lookups.
///
/// Once a step produces nothing, every later step is skipped and
/// [`Chain::finish`] reports the link that broke the chain.
#[derive(Debug)]
#[must_use = "a chain does nothing until finished"]
pub struct Chain<T> {
    state: ChainState<T>,
    resolved: usize,
}

impl<T> Chain<T> {
    /// Starts from a value that is known to be present.
    pub fn start(value: T) -> Self {
        Self {
            state: ChainState::Live(value),
            resolved: 0,
        }
    }

    /// Starts from a lookup that may itself be absent; it counts as a link.
    pub fn start_optional(value: Option<T>, link: &'static str) -> Self {
        match value {
            Some(value) => Self {
                state: ChainState::Live(value),
                resolved: 1,
            },
            None => Self {
                state: ChainState::Broken(MissingLink { link }),
                resolved: 0,
            },
        }
    }

    pub fn then<U, F>(self, link: &'static str, step: F) -> Chain<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self.state {
            ChainState::Live(value) => match step(value) {
                Some(next) => Chain {
                    state: ChainState::Live(next),
                    resolved: self.resolved + 1,
                },
                None => Chain {
                    state: ChainState::Broken(MissingLink { link }),
                    resolved: self.resolved,
                },
            },
            ChainState::Broken(missing) => Chain {
                state: ChainState::Broken(missing),
                resolved: self.resolved,
            },
        }
    }

    /// Transforms the current value without adding a link.
    pub fn map<U, F>(self, f: F) -> Chain<U>
    where
        F: FnOnce(T) -> U,
    {
        let state = match self.state {
            ChainState::Live(value) => ChainState::Live(f(value)),
            ChainState::Broken(missing) => ChainState::Broken(missing),
        };
        Chain {
            state,
            resolved: self.resolved,
        }
    }

    pub fn finish(self) -> Resolution<T> {
        match self.state {
            ChainState::Live(value) => Resolution::Present(value),
            ChainState::Broken(link) => Resolution::Absent {
                link,
                depth: self.resolved,
            },
        }
    }
}
