use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How the keywords of a query combine when matching catalog entries.
///
/// Fixed once per running instance; queries never pick their own strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterStrategy {
    /// Every query keyword must be present (`ALL` / `AND`).
    #[default]
    All,
    /// At least one query keyword must be present (`ANY` / `OR`).
    Any,
}

impl FilterStrategy {
    /// Operator name used in user-facing messages (`AND` / `OR`).
    #[must_use]
    pub fn operator(self) -> &'static str {
        match self {
            Self::All => "AND",
            Self::Any => "OR",
        }
    }

    /// Quantifier used in user-facing messages (`all` / `any`).
    #[must_use]
    pub fn quantifier(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Any => "any",
        }
    }
}

impl FromStr for FilterStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AND" | "ALL" => Ok(Self::All),
            "OR" | "ANY" => Ok(Self::Any),
            _ => Err(Error::invalid_value(
                "filter strategy",
                s,
                "one of AND, ALL, OR, ANY",
            )),
        }
    }
}

impl TryFrom<String> for FilterStrategy {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FilterStrategy> for String {
    fn from(value: FilterStrategy) -> Self {
        value.operator().to_string()
    }
}

impl fmt::Display for FilterStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator())
    }
}
