use thiserror::Error;

/// Errors raised while building buttons or messages.
///
/// Every builder validates its required fields before producing any output, so a
/// failed call never yields a partially-filled record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ButtonError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ButtonError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ButtonError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ButtonError>;

/// Return `Err(InvalidArgument(msg))` when any value is empty.
pub(crate) fn require(values: &[&str], msg: &str) -> Result<()> {
    if values.iter().any(|v| v.is_empty()) {
        return Err(ButtonError::invalid(msg));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_any_empty_value() {
        assert!(require(&["a", "b"], "a and b are required").is_ok());
        let err =
            require(&["a", ""], "displayText and url are required for urlButton").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: displayText and url are required for urlButton"
        );
    }
}
