use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{info, warn};

#[cfg(feature = "metrics")]
use projector_metrics::{counter, labels, readme as readme_metrics};

use crate::error::{Error, Result};

pub const README_FILE_NAME: &str = "README.md";

/// Render one keyword as a hashtag: lowercased, no leading `#`, inner
/// whitespace collapsed to `-`. Blank keywords render as `None`.
pub fn render_keyword(keyword: &str) -> Option<String> {
    let bare = keyword.trim().trim_start_matches('#').to_lowercase();
    let tag = bare.split_whitespace().collect::<Vec<_>>().join("-");
    (!tag.is_empty()).then(|| format!("#{tag}"))
}

/// Render keywords as a single line, e.g. `#python #web`.
pub fn render_keywords<S: AsRef<str>>(keywords: &[S]) -> String {
    keywords
        .iter()
        .filter_map(|kw| render_keyword(kw.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full README body for a new project folder.
pub fn render_readme<S: AsRef<str>>(title: &str, keywords: &[S]) -> String {
    let tags = render_keywords(keywords);
    let line = if tags.is_empty() {
        "> **Keywords**:".to_string()
    } else {
        format!("> **Keywords**: {tags}")
    };
    format!("# {}\n\n{line}\n\n", title.trim())
}

/// Write `README.md` into an existing folder, never replacing one that is
/// already there.
///
/// The body goes to a temporary file in the same folder first and is then
/// moved into place with a no-clobber rename, so the README either appears
/// complete or not at all.
pub fn write_readme<S: AsRef<str>>(folder: &Path, title: &str, keywords: &[S]) -> Result<PathBuf> {
    let result = write_readme_inner(folder, title, keywords);
    match &result {
        Ok(path) => {
            info!(path = %path.display(), "created README");
            #[cfg(feature = "metrics")]
            counter!(readme_metrics::WRITTEN_TOTAL).increment(1);
        },
        Err(e) if e.is_refusal() => {
            warn!(folder = %folder.display(), reason = e.kind(), "README write refused");
            #[cfg(feature = "metrics")]
            counter!(readme_metrics::REFUSED_TOTAL, labels::REASON => e.kind()).increment(1);
        },
        Err(_) => {},
    }
    result
}

fn write_readme_inner<S: AsRef<str>>(
    folder: &Path,
    title: &str,
    keywords: &[S],
) -> Result<PathBuf> {
    check_folder(folder)?;

    let readme = folder.join(README_FILE_NAME);
    if fs::symlink_metadata(&readme).is_ok() {
        return Err(Error::DescriptionAlreadyExists { path: readme });
    }

    let write_failed = |source: io::Error| Error::DescriptionWriteFailed {
        path: readme.clone(),
        source,
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".README.")
        .suffix(".tmp")
        .tempfile_in(folder)
        .map_err(write_failed)?;
    tmp.write_all(render_readme(title, keywords).as_bytes())
        .map_err(write_failed)?;
    tmp.as_file().sync_all().map_err(write_failed)?;

    match tmp.persist_noclobber(&readme) {
        Ok(_) => Ok(readme),
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
            Err(Error::DescriptionAlreadyExists { path: readme })
        },
        Err(e) => Err(write_failed(e.error)),
    }
}

fn check_folder(folder: &Path) -> Result<()> {
    if folder.as_os_str().is_empty() {
        return Err(Error::FolderNotFound {
            path: folder.to_path_buf(),
        });
    }
    match fs::metadata(folder) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(Error::NotADirectory {
            path: folder.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::FolderNotFound {
            path: folder.to_path_buf(),
        }),
        Err(source) => Err(Error::DescriptionWriteFailed {
            path: folder.join(README_FILE_NAME),
            source,
        }),
    }
}
