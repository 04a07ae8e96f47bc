/// Errors that can occur while delivering commands.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// An I/O error occurred on the underlying stream.
    #[error("link I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream stopped accepting bytes mid-command.
    #[error("stream closed (command partially written)")]
    Closed,
}

pub type Result<T> = std::result::Result<T, LinkError>;
