use crate::domain::AppError;

/// Blocking question answered by the operator.
pub trait OverwritePrompt {
    /// Ask `question`; returns the raw answer, or `default` when the
    /// operator provides none.
    fn ask(&self, question: &str, default: &str) -> Result<String, AppError>;
}
