use crate::charset::Alphabet;
use crate::error::{Error, Result};
use rand::distr::{Distribution, Uniform};
use rand::CryptoRng;

/// Draw `length` characters from `alphabet` with the thread-local CSPRNG.
pub fn generate(length: usize, alphabet: &Alphabet) -> Result<String> {
    generate_with(&mut rand::rng(), length, alphabet)
}

/// Same as [`generate`] but with a caller-supplied rng. The `CryptoRng`
/// bound keeps non-cryptographic generators out.
///
/// Indices come from `Uniform`, which rejects draws outside the largest
/// multiple of the alphabet size, so every character is equally likely.
pub fn generate_with<R: CryptoRng + ?Sized>(rng: &mut R, length: usize, alphabet: &Alphabet) -> Result<String> {
    if length == 0 {
        return Err(Error::precondition("length must be a positive integer"));
    }
    let chars = alphabet.chars();
    let index = Uniform::new(0, chars.len())
        .map_err(|_| Error::precondition("character set cannot be empty"))?;
    let mut secret = String::new();
    secret
        .try_reserve(length)
        .map_err(|_| Error::precondition(format!("length too large: {length}")))?;
    for _ in 0..length {
        secret.push(chars[index.sample(rng)]);
    }
    Ok(secret)
}
