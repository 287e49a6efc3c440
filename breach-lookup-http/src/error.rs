use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tenant file '{path}': {source}")]
    TenantFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
