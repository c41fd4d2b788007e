use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    path: PathBuf,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, path: PathBuf) -> Self {
        Error {
            internal_error: error_impl,
            path,
        }
    }

    /// Maps a failed read of `path` onto the matching error kind. Decoding
    /// happens after the read, so it never shows up here.
    pub fn from_io(error: std::io::Error, path: PathBuf) -> Self {
        let error_impl = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorImpl::FileNotFound,
            _ => ErrorImpl::Io {
                message: error.to_string(),
            },
        };

        Error::new(error_impl, path)
    }

    pub fn get_path(&self) -> &PathBuf {
        &self.path
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::FileNotFound => "FileNotFound",
            ErrorImpl::DecodingError { .. } => "DecodingError",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileNotFound => ErrorTip::None,
            ErrorImpl::DecodingError { line } => ErrorTip::Suggestion(format!(
                "la línea {} no es UTF-8 válido; usa UTF-8 en el archivo de entrada",
                line
            )),
            ErrorImpl::Io { message } => ErrorTip::Suggestion(message.clone()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("no se encontró el archivo")]
    FileNotFound,
    #[error("problema de codificación")]
    DecodingError { line: usize },
    #[error("no se pudo leer el archivo: {message}")]
    Io { message: String },
}
