use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Invalid assignment")]
    invalid_assignment,

    #[error("Invalid identifier")]
    invalid_identifier,

    #[error("Invalid expression")]
    invalid_expression,

    #[error("Invalid token: {0}")]
    invalid_token(String),

    #[error("Unknown variable '{0}'")]
    unknown_variable(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
