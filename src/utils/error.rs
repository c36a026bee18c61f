use thiserror::Error;

/// Everything that can go wrong while turning one pattern into a module.
///
/// Errors are local to a single pattern: a batch reports them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Character outside the run-length grammar. Positions are 1-based.
    #[error("unexpected symbol {symbol:?} at line {line}, column {column}")]
    MalformedToken {
        symbol: char,
        line: usize,
        column: usize,
    },
    #[error("pattern is {width}x{height}, larger than the field")]
    SizeExceeded { width: usize, height: usize },
    #[error("pattern data ends without the '!' terminator")]
    IncompleteDescriptor,
    /// A run or row reaches outside the field; `row`/`column` is the first cell outside.
    #[error("run writes outside the field at row {row}, column {column}")]
    GridOverflow { row: usize, column: usize },
    #[error("header value {key} = {value:?} is not a non-negative integer")]
    MalformedHeader { key: String, value: String },
    #[error("pattern has no `x = .., y = ..` header")]
    MissingHeader,
    #[error("{0:?} is not a legal module name")]
    InvalidName(String),
    #[error("no patterns to select between")]
    EmptyComposite,
}
