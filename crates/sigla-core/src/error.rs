/// Errors that can occur in Sigla operations.
#[derive(Debug, thiserror::Error)]
pub enum SiglaError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for SiglaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
