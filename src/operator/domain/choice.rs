//! The four answers accepted between repositories.

use std::fmt;

/// Operator answer to "do you want to act on this repository?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BatchChoice {
    /// Act on this repository and ask again for the next one.
    Proceed,
    /// Act on this and every remaining repository without asking.
    ProceedAll,
    /// Leave this repository alone.
    Skip,
    /// Stop the whole command.
    Abort,
}

impl BatchChoice {
    /// Every choice, in the order they are offered.
    pub const ALL: [Self; 4] = [Self::Proceed, Self::ProceedAll, Self::Skip, Self::Abort];

    /// Returns the single-character key for the choice.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Proceed => 'y',
            Self::ProceedAll => 'a',
            Self::Skip => 's',
            Self::Abort => 'x',
        }
    }

    /// Returns the human-readable description of the choice.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Proceed => "yes",
            Self::ProceedAll => "yes to all remaining",
            Self::Skip => "skip this one",
            Self::Abort => "abort",
        }
    }

    /// Parses a single-character key.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        let lowered = key.to_ascii_lowercase();
        Self::ALL.into_iter().find(|choice| choice.key() == lowered)
    }
}

impl fmt::Display for BatchChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.key(), self.description())
    }
}
