use std::path::PathBuf;

/// Errors raised while synchronizing a module's generated CMake files.
///
/// A missing `include/`, `src/`, `test/` or `resources/` folder is never an
/// error; it simply contributes zero files.
#[derive(Debug)]
pub enum SyncError {
    /// Creating a directory, reading or writing a file failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The aggregate include file exists but is not valid UTF-8 text
    Encoding { path: PathBuf },
    /// The module root has no usable directory name
    InvalidModule(String),
}

impl SyncError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncError::Io { path, source } => {
                write!(f, "IO error at {}: {}", path.display(), source)
            }
            SyncError::Encoding { path } => {
                write!(f, "{} is not a valid UTF-8 text file", path.display())
            }
            SyncError::InvalidModule(msg) => write!(f, "Invalid module: {}", msg),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyncError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = SyncError::io(
            "lib/foo/.cmake",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("lib/foo/.cmake"));
        assert!(msg.contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_encoding_has_no_source() {
        let err = SyncError::Encoding {
            path: PathBuf::from("sources.cmake"),
        };
        assert!(std::error::Error::source(&err).is_none());
        assert!(err.to_string().contains("UTF-8"));
    }
}
