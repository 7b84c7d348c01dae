use thiserror::Error;

/// Error type for reference table lookups
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Emergency protocol key not in the catalogue
    #[error("Unknown emergency protocol: {0}")]
    UnknownProtocol(String),

    /// Severity label not in {critical, high, moderate}
    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),

    /// Fluid key not in the fluid catalogue
    #[error("Unknown fluid type: {0}")]
    UnknownFluid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_key() {
        let err = TableError::UnknownProtocol("stroke".to_string());
        assert_eq!(err.to_string(), "Unknown emergency protocol: stroke");

        let err = TableError::UnknownSeverity("low".to_string());
        assert!(err.to_string().contains("low"));
    }
}
