use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Accuracy level outside the labelled range (1 to 5).
    #[error("invalid level: {level}")]
    InvalidLevel { level: u8 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
