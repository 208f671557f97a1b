use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{} not found", .path.display())]
    MissingManifest { path: PathBuf },

    #[error("Invalid source directory: {0}")]
    InvalidSource(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

impl Error {
    /// True when the build was refused because the manifest is absent
    pub fn is_missing_manifest(&self) -> bool {
        matches!(self, Error::MissingManifest { .. })
    }
}
