use std::{
    fs, io,
    path::{Path, PathBuf},
};

use {
    chrono::{Local, NaiveDate},
    tracing::{debug, info},
};

#[cfg(feature = "metrics")]
use projector_metrics::{counter, provision as provision_metrics};

use crate::{
    error::{Error, Result},
    types::{FolderIdentifier, ProvisionedFolder},
};

/// Creates date-coded project folders (`p<YYYYMMDD><a-z>`) under a fixed root.
///
/// The root must already exist; it is never created here. Each candidate name
/// is claimed with a single non-recursive `create_dir`, so an existing folder
/// (or file) of that name shows up as `AlreadyExists` and the next suffix is
/// tried. Two concurrent callers therefore never receive the same folder.
#[derive(Debug, Clone)]
pub struct FolderProvisioner {
    root: PathBuf,
}

impl FolderProvisioner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the next free folder for today's date on the host clock.
    pub fn create_next_folder(&self) -> Result<ProvisionedFolder> {
        self.create_next_folder_on(Local::now().date_naive())
    }

    /// Create the next free folder for `date`.
    pub fn create_next_folder_on(&self, date: NaiveDate) -> Result<ProvisionedFolder> {
        let result = self.claim_first_free(date);
        #[cfg(feature = "metrics")]
        match &result {
            Ok(_) => counter!(provision_metrics::FOLDERS_CREATED_TOTAL).increment(1),
            Err(_) => counter!(provision_metrics::ERRORS_TOTAL).increment(1),
        }
        result
    }

    fn claim_first_free(&self, date: NaiveDate) -> Result<ProvisionedFolder> {
        self.ensure_root()?;

        for suffix in FolderIdentifier::FIRST_SUFFIX..=FolderIdentifier::LAST_SUFFIX {
            let id = FolderIdentifier::new(date, suffix)?;
            let path = self.root.join(id.to_string());
            match fs::create_dir(&path) {
                Ok(()) => {
                    info!(folder = %id, path = %path.display(), "created project folder");
                    return Ok(ProvisionedFolder { id, path });
                },
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    debug!(folder = %id, "folder name taken, trying next suffix");
                    #[cfg(feature = "metrics")]
                    counter!(provision_metrics::SUFFIX_COLLISIONS_TOTAL).increment(1);
                },
                Err(e) => return Err(Error::folder_creation_failed(path, e)),
            }
        }

        Err(Error::SuffixExhausted {
            date: date.format("%Y%m%d").to_string(),
        })
    }

    fn ensure_root(&self) -> Result<()> {
        let meta =
            fs::metadata(&self.root).map_err(|e| Error::folder_creation_failed(&self.root, e))?;
        if !meta.is_dir() {
            return Err(Error::folder_creation_failed(
                &self.root,
                io::Error::new(io::ErrorKind::NotADirectory, "project root is not a directory"),
            ));
        }
        Ok(())
    }
}

/// Create the next free folder for today under `root`.
pub fn create_next_folder(root: &Path) -> Result<ProvisionedFolder> {
    FolderProvisioner::new(root).create_next_folder()
}
