use std::io;
use thiserror::Error;

/// Application-wide error type for the boundary layers.
///
/// The classification core itself is total and never returns an error;
/// failures only arise around it (configuration, socket setup, serving).
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors (e.g. an unparseable port value).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard input/output errors from binding or serving the socket.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
