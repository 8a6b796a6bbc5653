use thiserror::Error;

/// Error returned by view factories whose configuration is rejected.
///
/// Only construction can fail: once a view exists, stepping its cursors never
/// produces an error. The only failure signal a consumer observes while iterating
/// is reaching the end.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// Returns `true` if this error was raised for the argument `name`.
    pub fn is_invalid_arg(&self, name: &str) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { name: n, .. } if n == name)
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arg_display() {
        let err = Error::invalid_arg("size", "size != 0");
        assert_eq!(err.to_string(), "invalid argument size: size != 0");
        assert!(err.is_invalid_arg("size"));
        assert!(!err.is_invalid_arg("step"));
    }

    #[test]
    fn test_into_kind() {
        let err = Error::invalid_arg("pivot", "pivot <= len_seen");
        match err.into_kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "pivot");
                assert_eq!(message, "pivot <= len_seen");
            }
        }
    }
}
