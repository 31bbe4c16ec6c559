use thiserror::Error;

/// Errors from parsing identifiers that arrive as strings (URL state, config)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown screen: {0}")]
    UnknownScreen(String),
    #[error("Unknown diet style: {0}")]
    UnknownDietStyle(String),
}
