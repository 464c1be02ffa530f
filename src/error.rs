//! Board Errors
//!
//! Validation failures raised when committing the draft form.

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors surfaced to the user next to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Description is empty or whitespace
    EmptyDescription,
    /// No due date picked
    MissingDueDate,
    /// Due date draft is not a `YYYY-MM-DD` date
    InvalidDueDate(String),
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::EmptyDescription => write!(f, "Assignment description cannot be empty."),
            BoardError::MissingDueDate => write!(f, "Please select a due date."),
            BoardError::InvalidDueDate(raw) => write!(f, "Invalid due date: {}", raw),
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(BoardError::EmptyDescription.to_string(), "Assignment description cannot be empty.");
        assert_eq!(BoardError::MissingDueDate.to_string(), "Please select a due date.");
        assert_eq!(BoardError::InvalidDueDate("13/45".into()).to_string(), "Invalid due date: 13/45");
    }
}
