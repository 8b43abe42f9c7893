use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("missing required argument: parent directory")]
    MissingArgument,
    #[error("failed to create directory {path}", path = path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write report: {0}")]
    Report(std::io::Error),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filesystem_error_names_the_path_once() {
        let error = CoreError::Filesystem {
            path: PathBuf::from("/nowhere/ABCDEFGHIJKLMNO"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();

        assert_eq!(message, "failed to create directory /nowhere/ABCDEFGHIJKLMNO");
        let source = std::error::Error::source(&error).unwrap();
        assert_eq!(source.to_string(), "denied");
    }
}
