use std::error::Error;
use std::fmt;

/// Which size gate of the compression pipeline rejected the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeStage {
    Serialized,
    Compressed,
}

impl fmt::Display for SizeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeStage::Serialized => write!(f, "serialized"),
            SizeStage::Compressed => write!(f, "compressed"),
        }
    }
}

#[derive(Debug)]
pub enum SandmaticError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    /// The source schematic could not be read or is not a litematic.
    InvalidInput(String),
    /// One of the compression pipeline size gates rejected the document.
    OutputTooLarge {
        stage: SizeStage,
        length: usize,
        limit: usize,
    },
}

impl fmt::Display for SandmaticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SandmaticError::IoError(err) => write!(f, "IO error: {}", err),
            SandmaticError::JsonError(err) => write!(f, "JSON error: {}", err),
            SandmaticError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            SandmaticError::OutputTooLarge {
                stage,
                length,
                limit,
            } => write!(
                f,
                "The output sandmatic is too large ({} length {} exceeds {}), please try a smaller schematic",
                stage, length, limit
            ),
        }
    }
}

impl Error for SandmaticError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SandmaticError::IoError(err) => Some(err),
            SandmaticError::JsonError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SandmaticError {
    fn from(err: std::io::Error) -> Self {
        SandmaticError::IoError(err)
    }
}

impl From<serde_json::Error> for SandmaticError {
    fn from(err: serde_json::Error) -> Self {
        SandmaticError::JsonError(err)
    }
}
