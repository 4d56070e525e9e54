use thiserror::Error;

/// Errors raised while scanning or parsing a grammar file.
///
/// All positions are 1-based. Scan and parse failures are fatal: the caller
/// must discard any partially built graph and re-invoke with fixed input.
#[derive(Debug, Error)]
pub enum Error {
    /// The scanner hit a character that cannot start or continue any token.
    #[error("invalid character {ch:?} at [{line}:{column}]")]
    InvalidChar { ch: char, line: u32, column: u32 },

    /// Input ended in the middle of a token (`-` with no `>` behind it).
    #[error("unexpected end of input at [{line}:{column}]")]
    UnexpectedEof { line: u32, column: u32 },

    /// A token appeared where the grammar does not permit it.
    #[error("expected {expected}, found {found:?} at [{line}:{column}]")]
    Syntax {
        expected: String,
        found: String,
        line: u32,
        column: u32,
    },

    #[error("failed to read grammar file: {0}")]
    Io(#[from] std::io::Error),
}
