//! Interactive entry point: encrypt one line from stdin and decrypt it back.
//!
//! Reads exactly one line, lowercases it, prints the ciphertext and the
//! decrypted text. End of input before any byte is treated as an empty
//! line, so the run still completes normally with exit code 0.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use cesarcrypt::CesarCrypt;
use tracing::debug;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cipher = CesarCrypt::new();
    debug!(
        alphabet_len = cipher.alphabet().len(),
        shift = cipher.shift(),
        "engine ready"
    );

    print!("Ingresa el texto a cifrar: ");
    io::stdout().flush().context("failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input line")?;

    let texto = line.trim_end_matches(['\r', '\n']).to_lowercase();
    debug!(chars = texto.chars().count(), "input read");

    let cifrado = cipher.encrypt(&texto);
    println!("Texto cifrado: {cifrado}");

    let descifrado = cipher.decrypt(&cifrado);
    println!("Texto descifrado: {descifrado}");

    Ok(())
}
