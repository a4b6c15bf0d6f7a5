//! Filter mode selector for task views.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Token for `FilterMode::All`.
pub const FILTER_TOKEN_ALL: &str = "all";
/// Token for `FilterMode::Checked`.
pub const FILTER_TOKEN_CHECKED: &str = "checked";
/// Token for `FilterMode::Unchecked`.
pub const FILTER_TOKEN_UNCHECKED: &str = "unchecked";
/// Token for `FilterMode::Removed`.
pub const FILTER_TOKEN_REMOVED: &str = "removed";

/// Which subset of tasks is currently visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Every task outside the trash.
    #[default]
    All,
    /// Completed tasks outside the trash.
    Checked,
    /// Open tasks outside the trash.
    Unchecked,
    /// The trash.
    Removed,
}

impl FilterMode {
    /// Every mode in sidebar order.
    pub const ALL_MODES: [FilterMode; 4] = [
        FilterMode::All,
        FilterMode::Unchecked,
        FilterMode::Checked,
        FilterMode::Removed,
    ];

    /// Stable token used by callers and serialization.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => FILTER_TOKEN_ALL,
            Self::Checked => FILTER_TOKEN_CHECKED,
            Self::Unchecked => FILTER_TOKEN_UNCHECKED,
            Self::Removed => FILTER_TOKEN_REMOVED,
        }
    }
}

impl Display for FilterMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a filter token is not one of the known modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterModeParseError {
    token: String,
}

impl FilterModeParseError {
    /// The rejected input, after trimming.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Display for FilterModeParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported filter mode `{}`; expected all|checked|unchecked|removed",
            self.token
        )
    }
}

impl Error for FilterModeParseError {}

impl FromStr for FilterMode {
    type Err = FilterModeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            FILTER_TOKEN_ALL => Ok(Self::All),
            FILTER_TOKEN_CHECKED => Ok(Self::Checked),
            FILTER_TOKEN_UNCHECKED => Ok(Self::Unchecked),
            FILTER_TOKEN_REMOVED => Ok(Self::Removed),
            _ => Err(FilterModeParseError { token: normalized }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterMode;

    #[test]
    fn parse_is_case_insensitive_and_trimmed() {
        assert_eq!(" Checked ".parse::<FilterMode>().unwrap(), FilterMode::Checked);
        assert_eq!("REMOVED".parse::<FilterMode>().unwrap(), FilterMode::Removed);
    }

    #[test]
    fn parse_rejects_unknown_token() {
        let err = "archived".parse::<FilterMode>().unwrap_err();
        assert_eq!(err.token(), "archived");
        assert!(err.to_string().contains("unsupported filter mode"));
    }

    #[test]
    fn tokens_round_trip_through_display() {
        for mode in FilterMode::ALL_MODES {
            assert_eq!(mode.to_string().parse::<FilterMode>().unwrap(), mode);
        }
    }

    #[test]
    fn default_is_all() {
        assert_eq!(FilterMode::default(), FilterMode::All);
    }
}
