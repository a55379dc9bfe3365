//! The error taxonomy shared by every fallible entry point in this crate.
//!
//! Deep parsing code reports the most specific variant it can; outer layers
//! add context (via `thiserror`'s `#[source]`/`#[from]`) rather than
//! rewriting the kind. No error is swallowed silently: where the format
//! permits treating a malformed field as simply absent (see
//! [`crate::location::LocationInformation`]), the field is recorded as
//! absent and no error is produced for it.

use thiserror::Error;

/// The error type returned by every fallible operation in this crate.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    /// A caller-supplied parameter is invalid (a zero-sized fill buffer, an
    /// out-of-range data block index, ...).
    #[error("invalid argument: {0}")]
    Argument(String),

    /// The handle was used in a state that doesn't permit the operation
    /// (e.g. an accessor called before `open`, or `open` called twice).
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    /// The byte stream could not be opened, read, or seeked.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes do not parse as a valid (or valid-enough) LNK file.
    #[error("input error: {0}")]
    Input(#[from] InputError),
}

/// Internal state violations (§7 "Runtime").
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// An accessor was called while the handle was not in the `Open` state.
    #[error("no value is available: the handle is not open")]
    ValueMissing,

    /// `open` was called on a handle that is already open.
    #[error("the handle is already open")]
    AlreadyOpen,

    /// The caller's abort flag was observed set at a cooperative checkpoint.
    #[error("parsing was aborted by the caller")]
    AbortRequested,
}

/// Malformed or truncated input bytes (§7 "Input").
#[derive(Debug, Error)]
pub enum InputError {
    /// The header's class identifier (or size) did not match the LNK CLSID.
    #[error("the file is not a shell link (class identifier mismatch)")]
    SignatureMismatch,

    /// A required field, string, or block ran past the end of the stream.
    #[error("truncated record{}", .context.as_ref().map(|c| format!(": {c}")).unwrap_or_default())]
    Truncated {
        /// Optional human-readable detail (which record, what was expected).
        context: Option<String>,
    },

    /// Bytes decoded but violated a format-level constraint (e.g. an
    /// `IS_UNICODE` string with an odd byte count, or a data block whose
    /// payload is shorter than its signature requires).
    #[error("invalid data{}", .context.as_ref().map(|c| format!(": {c}")).unwrap_or_default())]
    InvalidData {
        /// Optional human-readable detail.
        context: Option<String>,
    },
}

impl InputError {
    pub(crate) fn truncated(context: impl Into<String>) -> Self {
        InputError::Truncated {
            context: Some(context.into()),
        }
    }

    pub(crate) fn invalid(context: impl Into<String>) -> Self {
        InputError::InvalidData {
            context: Some(context.into()),
        }
    }
}

impl From<binread::Error> for Error {
    fn from(err: binread::Error) -> Self {
        match err {
            binread::Error::Io(io) => {
                if io.kind() == std::io::ErrorKind::UnexpectedEof {
                    Error::Input(InputError::truncated(io.to_string()))
                } else {
                    Error::Io(io)
                }
            }
            binread::Error::Custom { err, .. } => {
                if let Some(input) = err.downcast_ref::<InputError>() {
                    Error::Input(match input {
                        InputError::SignatureMismatch => InputError::SignatureMismatch,
                        InputError::Truncated { context } => {
                            InputError::Truncated { context: context.clone() }
                        }
                        InputError::InvalidData { context } => {
                            InputError::InvalidData { context: context.clone() }
                        }
                    })
                } else {
                    Error::Input(InputError::invalid(err.to_string()))
                }
            }
            other => Error::Input(InputError::invalid(other.to_string())),
        }
    }
}

/// `Result` specialized to this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
