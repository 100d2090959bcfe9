/// A player's request for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop a piece into the column with this 1-based label.
    Drop { label: i64 },
    Quit,
}

/// A response that is neither a column label nor a quit request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("malformed input: {0:?}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_display() {
        let err = InputError::Malformed("abc".into());
        assert_eq!(err.to_string(), "malformed input: \"abc\"");
    }
}
