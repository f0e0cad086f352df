use std::{fmt, path::PathBuf, str::FromStr};

use {
    chrono::NaiveDate,
    serde::{Deserialize, Serialize},
};

use crate::error::{Error, Result};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Folder identifier of the project, e.g. `p20250621a`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Missing titles read as empty.
    #[serde(default)]
    pub title: String,
    /// Tokens explicitly tagged on the project.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Explicit on-disk location, when it differs from `<root>/<id>`.
    #[serde(
        default,
        alias = "folder_path",
        skip_serializing_if = "Option::is_none"
    )]
    pub folder: Option<PathBuf>,
}

impl Project {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            keywords: Vec::new(),
            folder: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}

/// What callers of `find_projects` get back: no keywords, no paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: Option<String>,
    pub title: String,
}

/// Date-coded folder name `p<YYYYMMDD><suffix>` with a single `a`-`z` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FolderIdentifier {
    date: NaiveDate,
    suffix: char,
}

impl FolderIdentifier {
    pub const FIRST_SUFFIX: char = 'a';
    pub const LAST_SUFFIX: char = 'z';

    pub fn new(date: NaiveDate, suffix: char) -> Result<Self> {
        if !suffix.is_ascii_lowercase() {
            return Err(Error::InvalidFolderIdentifier(format!(
                "p{}{suffix}",
                date.format("%Y%m%d")
            )));
        }
        Ok(Self { date, suffix })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn suffix(&self) -> char {
        self.suffix
    }

    /// `YYYYMMDD` portion of the identifier.
    pub fn date_code(&self) -> String {
        self.date.format("%Y%m%d").to_string()
    }
}

impl fmt::Display for FolderIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}{}", self.date.format("%Y%m%d"), self.suffix)
    }
}

impl FromStr for FolderIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidFolderIdentifier(s.to_string());
        let rest = s.strip_prefix('p').ok_or_else(invalid)?;
        if rest.len() != 9 || !rest.is_ascii() {
            return Err(invalid());
        }
        let (digits, suffix) = rest.split_at(8);
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(digits, "%Y%m%d").map_err(|_| invalid())?;
        let suffix = suffix.chars().next().ok_or_else(invalid)?;
        Self::new(date, suffix).map_err(|_| invalid())
    }
}

impl Serialize for FolderIdentifier {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FolderIdentifier {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A folder created by the provisioner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionedFolder {
    pub id: FolderIdentifier,
    pub path: PathBuf,
}
