use std::{error::Error, fmt, io, path::PathBuf};

type BoxedCause = Box<dyn Error + Send + Sync>;

// Failures of the remote sphere query.
#[derive(Debug)]
pub enum QueryError {
    // The request never completed: DNS, connect, timeout.
    Network(BoxedCause),
    // The upstream answered with a non-success HTTP status.
    Status(u16),
    // The body was not a JSON array of named systems.
    Parse(BoxedCause),
}

impl QueryError {
    /// True for failures that happened before a usable body arrived.
    pub fn is_network(&self) -> bool {
        matches!(self, QueryError::Network(_) | QueryError::Status(_))
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Network(err) => write!(f, "EDSM request failed: {err}"),
            QueryError::Status(status) => write!(f, "EDSM responded with status {status}"),
            QueryError::Parse(err) => write!(f, "EDSM response could not be parsed: {err}"),
        }
    }
}

impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            QueryError::Network(err) | QueryError::Parse(err) => Some(err.as_ref()),
            QueryError::Status(_) => None,
        }
    }
}

// The import file could not be written.
#[derive(Debug)]
pub struct ExportError {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to write {}: {}", self.path.display(), self.source)
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
