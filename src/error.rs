use std::path::PathBuf;

use crate::board::Coord;

/// Errors raised while importing or parsing a board.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("invalid cell id {value} at {pos} (expected 0, 1 or 2)")]
    InvalidCellId { pos: Coord, value: u8 },

    #[error("stone at {pos} floats above an empty cell")]
    GravityViolation { pos: Coord },

    #[error("expected {expected} board rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth { row: usize, expected: usize, found: usize },

    #[error("unknown cell symbol {symbol:?} in row {row}")]
    UnknownSymbol { row: usize, symbol: char },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}
