use std::path::PathBuf;

/// Errors raised while loading dashboard input. The aggregation and rendering
/// core never fails; everything here happens before data reaches it.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The response carried a GraphQL `errors` array
    #[error("GraphQL query failed: {0}")]
    GraphQl(String),

    #[error("response contains no user")]
    MissingUser,
}

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Read a file to a string, keeping the path in the error.
pub(crate) fn read_file(path: &std::path::Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| DashboardError::Io {
        path: path.to_path_buf(),
        source,
    })
}
