//! Reactive layer error types

use thiserror::Error;

use super::ids::{ControlId, OutputId};

/// A recomputation that could not produce a figure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CallbackError {
    /// The control sent a value of the wrong shape or out of range
    #[error("Invalid value for {control}: {message}")]
    InvalidValue { control: ControlId, message: String },

    /// The handler itself failed
    #[error("Callback for {output} failed: {message}")]
    Handler { output: OutputId, message: String },
}

/// Mistakes in callback wiring, detected at startup
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Output {0} already has a callback")]
    DuplicateOutput(OutputId),

    #[error("Callback for {0} has no inputs")]
    NoInputs(OutputId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CallbackError::InvalidValue {
            control: ControlId::PayloadSlider,
            message: "low exceeds high".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for payload-slider: low exceeds high"
        );

        let err = RegistryError::DuplicateOutput(OutputId::SuccessPieChart);
        assert_eq!(
            err.to_string(),
            "Output success-pie-chart already has a callback"
        );
    }
}
