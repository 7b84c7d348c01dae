use thiserror::Error;
use validator::ValidationErrors;

use anesthesia_guide_data::TableError;

/// Calculation layer errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalculationError {
    /// Patient intake failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Technique key outside tiva / general / spinal
    #[error("Unknown technique: {0}")]
    UnknownTechnique(String),

    /// Blood loss that is negative or not a number
    #[error("Invalid blood loss: {0} mL")]
    InvalidBloodLoss(f64),

    /// Settings that could not be parsed or are out of range
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Reference table lookup error
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Flatten validator errors into one message, fields in name order
pub(crate) fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .iter()
        .map(|(field, errors)| {
            let field: &str = field;
            let error_msgs: Vec<String> = errors
                .iter()
                .map(|err| {
                    if let Some(msg) = &err.message {
                        msg.to_string()
                    } else {
                        format!("Invalid {}", field)
                    }
                })
                .collect();
            let field = if field == "__all__" { "patient" } else { field };
            format!("{}: {}", field, error_msgs.join(", "))
        })
        .collect::<Vec<String>>()
        .join("; ")
}
