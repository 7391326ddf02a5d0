//! Error types for board operations.

use std::fmt;

/// Error type for board construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Board dimension other than 6, 8 or 10
    UnsupportedSize { size: usize },
    /// Size text that is not a number
    InvalidSize { input: String },
    /// Square outside the board being built
    SquareOffBoard { notation: String },
    /// Light square, which pieces never stand on
    UnplayableSquare { notation: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::UnsupportedSize { size } => {
                write!(f, "Unsupported board size {size}, expected 6, 8 or 10")
            }
            BoardError::InvalidSize { input } => {
                write!(f, "Invalid board size '{input}'")
            }
            BoardError::SquareOffBoard { notation } => {
                write!(f, "Square '{notation}' is off the board")
            }
            BoardError::UnplayableSquare { notation } => {
                write!(f, "Square '{notation}' is not a playable square")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for move token parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move token has invalid length (must be 5 characters)
    InvalidLength { len: usize },
    /// The third character is not '>'
    MissingSeparator { notation: String },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 5 characters, found {len}")
            }
            MoveParseError::MissingSeparator { notation } => {
                write!(f, "Missing '>' separator in '{notation}'")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
