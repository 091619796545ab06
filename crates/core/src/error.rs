#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("referenced {entity} {id} does not exist")]
    DanglingReference { entity: &'static str, id: String },
}

pub type ActionResult<T> = std::result::Result<T, ActionError>;

impl From<meditrack_types::TextError> for ActionError {
    fn from(err: meditrack_types::TextError) -> Self {
        ActionError::InvalidInput(err.to_string())
    }
}
