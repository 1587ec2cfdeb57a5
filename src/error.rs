use thiserror::Error;

/// Errors returned by this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The caller attempted to place a word that violates the placement
    /// contract: out of bounds, conflicting with an existing tile, or
    /// containing a non-alphabetic letter.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A malformed argument was passed to a public entry point (an
    /// unrecognized direction, an empty word during lexicon construction,
    /// a rack that can't be encoded, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A saved game or lexicon file does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Error reading a tile list, layout, word list or saved-game file.
    #[error("could not read \"{path}\"")]
    ReadError { path: String, source: std::io::Error },

    /// Error parsing the board layout JSON.
    #[error("could not parse board layout: {0}")]
    LayoutParseError(#[from] serde_json::Error),

    /// Error encoding or decoding a bincoded lexicon or saved game.
    #[error("could not (de)serialize \"{path}\"")]
    SerializeError {
        path: String,
        source: bincode::Error,
    },
}

impl Error {
    pub(crate) fn illegal_move(msg: impl Into<String>) -> Error {
        Error::IllegalMove(msg.into())
    }

    pub(crate) fn invalid_input(msg: impl Into<String>) -> Error {
        Error::InvalidInput(msg.into())
    }
}
