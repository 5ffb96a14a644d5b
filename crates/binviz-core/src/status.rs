use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BinvizError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Status = Result<(), BinvizError>;

/// Result type for fallible binviz operations.
pub type StatusResult<T> = Result<T, BinvizError>;

impl From<std::io::Error> for BinvizError {
    fn from(err: std::io::Error) -> Self {
        BinvizError::IoError(err.to_string())
    }
}

impl BinvizError {
    /// Returns true for failures that come from the file source rather than
    /// from caller-supplied options.
    pub fn is_io(&self) -> bool {
        matches!(self, BinvizError::IoError(_))
    }
}

pub fn ok_status() -> Status {
    Ok(())
}

pub fn invalid_parameter(msg: impl Into<String>) -> BinvizError {
    BinvizError::InvalidParameter(msg.into())
}
