use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToggleError {
    #[error("trigger element has no `{0}` attribute")]
    MissingAttribute(String),
    #[error("invalid target identifier {0:?}")]
    InvalidIdentifier(String),
    #[error("no element with id `{0}`")]
    TargetNotFound(String),
    #[error("invalid class token {0:?}")]
    InvalidToken(String),
    #[error("host error: {0}")]
    Host(String),
}
