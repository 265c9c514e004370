use thiserror::Error;

#[derive(Debug, Error)]
pub enum RatingsError {
    #[error("unknown condition: {0}")]
    UnknownCondition(String),
}
