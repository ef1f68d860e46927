use thiserror::Error;

/// Failures while bringing a service up.
#[derive(Debug, Error)]
pub enum SupportError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
