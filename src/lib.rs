//! CesarCrypt rotation cipher over the Spanish alphabet.
//!
//! CesarCrypt is a substitution cipher that rotates each character of a text
//! by a fixed offset within a closed, ordered 27-symbol alphabet (a–z plus
//! "ñ"). Characters outside the alphabet pass through unchanged, so the
//! transformation is total over arbitrary input text.
//!
//! This crate provides the cipher engine together with an interactive binary
//! that encrypts one line read from standard input and decrypts the result
//! to demonstrate round-trip correctness.
//!
//! # Architecture
//!
//! ```text
//! Alphabet   (ordered symbol domain — position and char lookups)
//!     ↑ queried per character
//! CesarCrypt (engine — one rotation core shared by encrypt / decrypt)
//!     ↑ driven by
//! main       (prompt → read line → lowercase → encrypt → decrypt → print)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a word with the default shift of 5:
//!
//! ```
//! use cesarcrypt::CesarCrypt;
//!
//! let cipher = CesarCrypt::new();
//!
//! let cifrado = cipher.encrypt("hola");
//! assert_eq!(cifrado, "mtpf");
//!
//! assert_eq!(cipher.decrypt(&cifrado), "hola");
//! ```
//!
//! Use a custom shift:
//!
//! ```
//! use cesarcrypt::CesarCrypt;
//!
//! let cipher = CesarCrypt::with_shift(1);
//! assert_eq!(cipher.encrypt("zzz"), "aaa");
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod cipher;
pub mod error;

pub use alphabet::{Alphabet, SPANISH_SYMBOLS};
pub use cipher::{CesarCrypt, DEFAULT_SHIFT};
pub use error::CesarCryptError;
