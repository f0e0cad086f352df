use std::path::PathBuf;

/// Why a catalog file could not be turned into projects.
#[derive(Debug, thiserror::Error)]
pub enum CatalogSource {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported catalog format: .{0}")]
    UnsupportedFormat(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("catalog unavailable at {path}: {source}")]
    CatalogUnavailable {
        path: PathBuf,
        #[source]
        source: CatalogSource,
    },
    #[error("failed to create folder {path}: {source}")]
    FolderCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("all folder suffixes a-z are taken for p{date}")]
    SuffixExhausted { date: String },
    #[error("README.md already exists at {path}")]
    DescriptionAlreadyExists { path: PathBuf },
    #[error("folder does not exist: {path}")]
    FolderNotFound { path: PathBuf },
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
    #[error("failed to write {path}: {source}")]
    DescriptionWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid folder identifier: {0:?}")]
    InvalidFolderIdentifier(String),
}

impl Error {
    #[must_use]
    pub fn catalog_unavailable(path: impl Into<PathBuf>, source: impl Into<CatalogSource>) -> Self {
        Self::CatalogUnavailable {
            path: path.into(),
            source: source.into(),
        }
    }

    #[must_use]
    pub fn folder_creation_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FolderCreationFailed {
            path: path.into(),
            source,
        }
    }

    /// Refusals are expected outcomes the caller reports back, not crashes.
    #[must_use]
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            Self::DescriptionAlreadyExists { .. }
                | Self::FolderNotFound { .. }
                | Self::NotADirectory { .. }
        )
    }

    /// Stable identifier for the error kind, used in tool responses and logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CatalogUnavailable { .. } => "catalog_unavailable",
            Self::FolderCreationFailed { .. } => "folder_creation_failed",
            Self::SuffixExhausted { .. } => "suffix_exhausted",
            Self::DescriptionAlreadyExists { .. } => "description_already_exists",
            Self::FolderNotFound { .. } => "folder_not_found",
            Self::NotADirectory { .. } => "not_a_directory",
            Self::DescriptionWriteFailed { .. } => "description_write_failed",
            Self::InvalidFolderIdentifier(_) => "invalid_folder_identifier",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusals_are_classified() {
        let exists = Error::DescriptionAlreadyExists {
            path: "/tmp/x/README.md".into(),
        };
        let missing = Error::FolderNotFound {
            path: "/tmp/nope".into(),
        };
        let exhausted = Error::SuffixExhausted {
            date: "20250621".into(),
        };
        assert!(exists.is_refusal());
        assert!(missing.is_refusal());
        assert!(!exhausted.is_refusal());
        assert_eq!(exhausted.kind(), "suffix_exhausted");
        assert_eq!(exhausted.to_string(), "all folder suffixes a-z are taken for p20250621");
    }

    #[test]
    fn catalog_error_keeps_path_and_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::catalog_unavailable("/data/projects.json", io);
        assert_eq!(err.kind(), "catalog_unavailable");
        assert!(err.to_string().contains("/data/projects.json"));
        assert!(err.to_string().contains("gone"));
    }
}
