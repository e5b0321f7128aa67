pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Source path is not a directory: {path}")]
    SourceNotADirectory { path: String },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {path}")]
    InvalidUtf8 { path: String },

    #[error("Failed to process {failed} files")]
    Batch { failed: usize },
}
