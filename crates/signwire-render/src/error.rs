/// Errors that can occur while preparing a rendering request.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The size selector is not one of the supported labels.
    #[error("unknown text size {0:?} (expected small, medium, or full)")]
    InvalidSize(String),

    /// The color selector is not one of the supported labels.
    #[error("unknown text color {0:?} (expected red, green, or yellow)")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
