use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unclosed '{{' at line {line}, column {column}")]
    UnclosedBrace { line: usize, column: usize },

    #[error("Empty {kind} name at line {line}, column {column}")]
    EmptyName {
        kind: &'static str,
        line: usize,
        column: usize,
    },

    #[error("Invalid metadata at line {line}: expected '>> key: value'")]
    InvalidMetadata { line: usize },

    #[error("Unterminated block comment starting at line {line}")]
    UnterminatedComment { line: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScaleError {
    #[error("Scale must be a positive number, got {0}")]
    NotPositive(f64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?} (expected a positive number)")]
    InvalidValue { name: String, value: String },
}
