use thiserror::Error;

use crate::domain::catalog::CatalogError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_ARGUMENTS: i32 = 2;
    pub const INPUT_NOT_READABLE: i32 = 3;
    pub const MALFORMED_INPUT: i32 = 4;
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Catalog(CatalogError::Read { .. }) => exit_code::INPUT_NOT_READABLE,
            Error::Catalog(_) => exit_code::MALFORMED_INPUT,
            Error::InvalidArgument(_) => exit_code::INVALID_ARGUMENTS,
            Error::Serialization(_) => exit_code::GENERAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let missing = Error::from(CatalogError::Read {
            path: "catalog.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(missing.exit_code(), exit_code::INPUT_NOT_READABLE);

        let malformed = Error::from(crate::domain::catalog::Catalog::from_json_str("[]").unwrap_err());
        assert_eq!(malformed.exit_code(), exit_code::MALFORMED_INPUT);

        let invalid = Error::InvalidArgument("--cart with ids".into());
        assert_eq!(invalid.exit_code(), exit_code::INVALID_ARGUMENTS);
    }
}
