use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("No data provided. Paste tab-delimited data on stdin or pass --input.")]
    EmptyInput,

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("line {line}: expected {expected} fields, saw {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("malformed tab-delimited input: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row} has no field {field:?}")]
    FieldAccess { row: usize, field: String },
}

impl ConvertError {
    /// Empty input is a "nothing to do" condition rather than a failure.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ConvertError::EmptyInput)
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = ConvertError::MissingColumns(vec!["SOURCE".into(), "IDCODE".into()]);
        assert_eq!(e.to_string(), "Missing required columns: SOURCE, IDCODE");

        let e = ConvertError::FieldAccess {
            row: 2,
            field: "LABNO".into(),
        };
        assert_eq!(e.to_string(), "row 2 has no field \"LABNO\"");
        assert!(!e.is_empty_input());
        assert!(ConvertError::EmptyInput.is_empty_input());
    }
}
