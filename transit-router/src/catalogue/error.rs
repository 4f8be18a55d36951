//! Catalogue error types.

/// Errors raised while populating or reading the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A stop with this name is already registered
    #[error("duplicate stop: {0}")]
    DuplicateStop(String),

    /// A line with this name is already registered
    #[error("duplicate line: {0}")]
    DuplicateLine(String),

    /// A stop name was referenced but never registered
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// A road distance was negative or not a number
    #[error("invalid distance between {from} and {to}")]
    InvalidDistance { from: String, to: String },

    /// A stop's latitude or longitude was not a finite number
    #[error("invalid coordinates for stop: {0}")]
    InvalidCoordinates(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogueError::DuplicateStop("Marushkino".into());
        assert_eq!(err.to_string(), "duplicate stop: Marushkino");

        let err = CatalogueError::DuplicateLine("750".into());
        assert_eq!(err.to_string(), "duplicate line: 750");

        let err = CatalogueError::UnknownStop("Nowhere".into());
        assert_eq!(err.to_string(), "unknown stop: Nowhere");

        let err = CatalogueError::InvalidDistance {
            from: "A".into(),
            to: "B".into(),
        };
        assert_eq!(err.to_string(), "invalid distance between A and B");

        let err = CatalogueError::InvalidCoordinates("Biryulyovo".into());
        assert_eq!(err.to_string(), "invalid coordinates for stop: Biryulyovo");
    }
}
