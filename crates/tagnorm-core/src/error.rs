use thiserror::Error;

pub type Result<T> = std::result::Result<T, TagError>;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("charset error: {0}")]
    CharSet(String),

    #[error("profile format error: {0}")]
    ProfileFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
