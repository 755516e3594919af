use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid config: {message}")]
    ConfigInvalid { message: String },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("{source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid anchor pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl PatchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatchError>;
