use base64::{Engine as _, engine::general_purpose::STANDARD};
use secrecy::{ExposeSecret as _, SecretBox, SecretSlice};
use std::str::FromStr;

use super::{AES_KEY_SIZE, Error, Key, generate_aes_key, generate_hmac_key};

/// The secret half of an encryption: an AES key and an independent HMAC key.
///
/// Whoever holds this can both decrypt and forge ciphertexts, so keep it somewhere safe.  It can
/// be stored as text with [`save_to_string`](Self::save_to_string) and read back with
/// [`from_string`](Self::from_string).
///
/// The text form is just the two keys glued together and base64-encoded, with no record of where
/// one stops and the other starts.  If you use a non-default AES key size, you have to pass it
/// to [`from_string_with_aes_key_size`](Self::from_string_with_aes_key_size) when parsing, or the
/// keys will come out wrong without any error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateData {
	aes_key: Key,
	hmac_key: Key,
}

impl PrivateData {
	pub fn new(aes_key: impl Into<Key>, hmac_key: impl Into<Key>) -> Self {
		Self {
			aes_key: aes_key.into(),
			hmac_key: hmac_key.into(),
		}
	}

	/// Create a brand new pair of keys.
	///
	/// # Errors
	///
	/// Returns [`Error::Generation`] if the system random source is unavailable.
	#[tracing::instrument(level = "debug")]
	pub fn generate() -> Result<Self, Error> {
		Ok(Self {
			aes_key: generate_aes_key()?,
			hmac_key: generate_hmac_key()?,
		})
	}

	pub fn aes_key(&self) -> &Key {
		&self.aes_key
	}

	pub fn hmac_key(&self) -> &Key {
		&self.hmac_key
	}

	/// Encode both keys as `base64(aes_key || hmac_key)`.
	pub fn save_to_string(&self) -> String {
		let mut v = Vec::with_capacity(self.aes_key.len() + self.hmac_key.len());
		v.extend_from_slice(self.aes_key.expose_secret());
		v.extend_from_slice(self.hmac_key.expose_secret());

		let packed: SecretSlice<u8> = SecretBox::new(v.into_boxed_slice());

		STANDARD.encode(packed.expose_secret())
	}

	/// Parse the output of [`save_to_string`](Self::save_to_string), assuming a 32 byte AES key.
	///
	/// # Errors
	///
	/// Returns [`Error::Format`] if the text isn't valid base64, or is too short to hold the AES
	/// key.
	pub fn from_string(s: impl AsRef<str>) -> Result<Self, Error> {
		Self::from_string_with_aes_key_size(s, AES_KEY_SIZE)
	}

	/// Parse the output of [`save_to_string`](Self::save_to_string) when the AES key is
	/// `aes_key_size` bytes long.  Everything after the AES key is the HMAC key.
	///
	/// # Errors
	///
	/// Returns [`Error::Format`] if the text isn't valid base64, or decodes to fewer than
	/// `aes_key_size` bytes.
	#[tracing::instrument(level = "debug", skip(s))]
	pub fn from_string_with_aes_key_size(
		s: impl AsRef<str>,
		aes_key_size: usize,
	) -> Result<Self, Error> {
		let packed: SecretSlice<u8> = SecretBox::new(
			STANDARD
				.decode(s.as_ref())
				.map_err(|e| Error::format("private data", e.to_string()))?
				.into_boxed_slice(),
		);
		let packed = packed.expose_secret();

		if packed.len() < aes_key_size {
			tracing::debug!(
				len = packed.len(),
				aes_key_size,
				"Private data too short for AES key"
			);
			return Err(Error::format(
				"private data",
				format!(
					"{} bytes is too short for a {aes_key_size} byte AES key",
					packed.len()
				),
			));
		}

		let (aes_key, hmac_key) = packed.split_at(aes_key_size);

		Ok(Self::new(aes_key, hmac_key))
	}
}

impl FromStr for PrivateData {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Self::from_string(s)
	}
}
