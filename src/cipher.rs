//! CesarCrypt: rotation cipher engine.
//!
//! Pairs an [`Alphabet`] with a fixed shift and applies the rotation in both
//! directions through a single shared core: encryption rotates forward by the
//! shift, decryption rotates backward by the same amount. Characters outside
//! the alphabet pass through unchanged in both directions, which makes the
//! transformations total over arbitrary input.

use crate::alphabet::Alphabet;

/// Default rotation offset.
pub const DEFAULT_SHIFT: i64 = 5;

/// Rotation cipher engine over a fixed alphabet and shift.
///
/// Encryption and decryption are exact inverses for any integer shift:
/// `decrypt(encrypt(t)) == t` for every text `t`, including texts containing
/// pass-through characters. Both directions preserve the character length
/// and ordering of the input.
///
/// The engine holds no mutable state; both transformations are deterministic
/// pure functions of the input text.
#[derive(Debug, Clone)]
pub struct CesarCrypt {
    alphabet: Alphabet,
    shift: i64,
}

impl Default for CesarCrypt {
    fn default() -> Self {
        Self::new()
    }
}

impl CesarCrypt {
    /// Creates an engine with the Spanish alphabet and the default shift of 5.
    ///
    /// # Examples
    ///
    /// ```
    /// use cesarcrypt::CesarCrypt;
    ///
    /// let cipher = CesarCrypt::new();
    /// assert_eq!(cipher.encrypt("hola"), "mtpf");
    /// ```
    pub fn new() -> Self {
        Self::with_shift(DEFAULT_SHIFT)
    }

    /// Creates an engine with the Spanish alphabet and a custom shift.
    ///
    /// Any integer shift is valid: negative shifts rotate backward, and
    /// shifts beyond the alphabet length wrap around.
    ///
    /// # Parameters
    /// - `shift`: The rotation offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use cesarcrypt::CesarCrypt;
    ///
    /// let cipher = CesarCrypt::with_shift(32);
    /// // 32 ≡ 5 (mod 27): same ciphertext as the default shift.
    /// assert_eq!(cipher.encrypt("hola"), "mtpf");
    /// ```
    pub fn with_shift(shift: i64) -> Self {
        Self::with_alphabet(Alphabet::spanish(), shift)
    }

    /// Creates an engine with a custom alphabet and shift.
    ///
    /// # Parameters
    /// - `alphabet`: The symbol domain defining the rotation order.
    /// - `shift`: The rotation offset.
    pub fn with_alphabet(alphabet: Alphabet, shift: i64) -> Self {
        CesarCrypt { alphabet, shift }
    }

    /// Returns the engine's alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the engine's shift.
    pub fn shift(&self) -> i64 {
        self.shift
    }

    /// Encrypts a text by rotating each in-alphabet character forward.
    ///
    /// Characters outside the alphabet are emitted unchanged. The output has
    /// the same character length and ordering as the input.
    ///
    /// # Parameters
    /// - `text`: The text to encrypt. The caller is expected to lowercase it
    ///   first; uppercase letters are outside the alphabet and pass through.
    ///
    /// # Examples
    ///
    /// ```
    /// use cesarcrypt::CesarCrypt;
    ///
    /// let cipher = CesarCrypt::new();
    /// assert_eq!(cipher.encrypt("hola, mundo! 123"), "mtpf, qzrit! 123");
    /// ```
    pub fn encrypt(&self, text: &str) -> String {
        self.rotate(text, self.shift)
    }

    /// Decrypts a text by rotating each in-alphabet character backward.
    ///
    /// Exact inverse of [`encrypt`](Self::encrypt) under the same alphabet
    /// and shift. Pass-through rule identical to encryption.
    ///
    /// # Parameters
    /// - `text`: The ciphertext to decrypt.
    ///
    /// # Examples
    ///
    /// ```
    /// use cesarcrypt::CesarCrypt;
    ///
    /// let cipher = CesarCrypt::new();
    /// assert_eq!(cipher.decrypt("mtpf"), "hola");
    /// ```
    pub fn decrypt(&self, text: &str) -> String {
        self.rotate(text, -self.shift)
    }

    /// Shared rotation core for both directions.
    ///
    /// For each character at alphabet position `p`, emits the character at
    /// `(p + offset) mod N`. `rem_euclid` keeps the index in `0..N` for
    /// negative offsets, so backward rotation needs no special case.
    fn rotate(&self, text: &str, offset: i64) -> String {
        let n = self.alphabet.len() as i64;
        let mut output = String::with_capacity(text.len());
        for c in text.chars() {
            match self.alphabet.position(c) {
                Some(p) => {
                    let rotated = (p as i64 + offset).rem_euclid(n) as usize;
                    output.push(self.alphabet.char_at(rotated));
                }
                None => output.push(c),
            }
        }
        output
    }
}
