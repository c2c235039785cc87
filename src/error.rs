use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, merging or querying a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("could not parse theme: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not read theme at \"{path}\": {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not find bundled theme \"{0}\"")]
    MissingAsset(String),

    #[error("theme overrides must be a JSON object, got {0}")]
    InvalidOverride(&'static str),

    #[error("unknown size key \"{0}\", expected one of xs, sm, md, lg, xl")]
    UnknownSizeKey(String),
}
