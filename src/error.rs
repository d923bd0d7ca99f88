use thiserror::Error;

/// Errors raised while building a transport plan.
///
/// `InvalidChoice` and `InvalidInput` are recoverable: the prompter reports
/// them and asks again.
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid {field} choice {code}: expected a number from 1 to {max}")]
    InvalidChoice {
        field: &'static str,
        code: i64,
        max: u32,
    },

    #[error("Invalid {field}: {input:?}")]
    InvalidInput { field: &'static str, input: String },

    #[error("Input ended before all students were entered")]
    EndOfInput,

    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed data error: {0}")]
    SeedData(#[from] serde_json::Error),
}

impl PlanError {
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PlanError::InvalidChoice { .. } | PlanError::InvalidInput { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
