use rand::{TryRngCore as _, rngs::OsRng};

use super::{AES_KEY_SIZE, Error, HMAC_KEY_SIZE, IV_SIZE, Key, RANDOM_SOURCE};

fn fill(buf: &mut [u8]) -> Result<(), Error> {
	OsRng.try_fill_bytes(buf).map_err(|e| {
		tracing::debug!(source = RANDOM_SOURCE, error = %e, "Random source unavailable");
		Error::generation(e.to_string())
	})
}

fn generate_secret(len: usize) -> Result<Key, Error> {
	let mut k = vec![0u8; len];

	fill(&mut k)?;

	Ok(k.into())
}

/// Create a fresh AES-256 key from the operating system's secure random source.
///
/// # Errors
///
/// Returns [`Error::Generation`] if the random source can't be read.
#[tracing::instrument(level = "debug")]
pub fn generate_aes_key() -> Result<Key, Error> {
	generate_secret(AES_KEY_SIZE)
}

/// Create a fresh HMAC-SHA256 key.  It is drawn independently of any AES key.
///
/// # Errors
///
/// Returns [`Error::Generation`] if the random source can't be read.
#[tracing::instrument(level = "debug")]
pub fn generate_hmac_key() -> Result<Key, Error> {
	generate_secret(HMAC_KEY_SIZE)
}

/// Create a fresh initialization vector.
///
/// An IV must never be reused under the same AES key, which is why [`encrypt`](super::encrypt)
/// makes a new one every time unless you insist otherwise.
///
/// # Errors
///
/// Returns [`Error::Generation`] if the random source can't be read.
#[tracing::instrument(level = "debug")]
pub fn generate_iv() -> Result<[u8; IV_SIZE], Error> {
	let mut iv = [0u8; IV_SIZE];

	fill(&mut iv)?;

	Ok(iv)
}
