//! Error types for the CesarCrypt library.

use thiserror::Error;

/// Errors produced by the CesarCrypt library.
///
/// Alphabet construction is the only fallible operation; the cipher
/// transformations themselves are total and never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CesarCryptError {
    /// The alphabet contains no symbols.
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    /// The alphabet contains the same symbol more than once.
    #[error("alphabet contains duplicate symbol '{0}'")]
    DuplicateSymbol(char),
}
