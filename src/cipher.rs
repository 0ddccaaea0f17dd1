use cbc::cipher::{BlockDecryptMut as _, BlockEncryptMut as _, KeyIvInit as _, block_padding::Pkcs7};

use super::{BLOCK_SIZE, CIPHER_TRANSFORMATION, Error};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Pad `plaintext` (PKCS#7) and encrypt it with AES-256 in CBC mode.
///
/// The result is always a whole number of blocks, and always at least one block long.
///
/// # Errors
///
/// Returns [`Error::Cipher`] if `key` isn't 32 bytes, or `iv` isn't 16 bytes.
#[tracing::instrument(level = "trace", skip(plaintext, key, iv), fields(transformation = CIPHER_TRANSFORMATION))]
pub fn encrypt_cbc(
	plaintext: impl AsRef<[u8]>,
	key: impl AsRef<[u8]>,
	iv: impl AsRef<[u8]>,
) -> Result<Vec<u8>, Error> {
	let cipher = Aes256CbcEnc::new_from_slices(key.as_ref(), iv.as_ref())
		.map_err(|_| Error::cipher("invalid key or IV length"))?;

	Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_ref()))
}

/// Decrypt an AES-256-CBC ciphertext and strip its PKCS#7 padding.
///
/// This does no authentication whatsoever.  Unless the ciphertext's MAC has already been
/// checked, use [`decrypt`](super::decrypt) instead.
///
/// # Errors
///
/// Returns [`Error::Cipher`] if `key` or `iv` are the wrong length, the ciphertext isn't a
/// whole number of blocks, or the padding is malformed.
#[tracing::instrument(level = "trace", skip(ciphertext, key, iv), fields(transformation = CIPHER_TRANSFORMATION))]
pub fn decrypt_cbc(
	ciphertext: impl AsRef<[u8]>,
	key: impl AsRef<[u8]>,
	iv: impl AsRef<[u8]>,
) -> Result<Vec<u8>, Error> {
	let ciphertext = ciphertext.as_ref();

	if ciphertext.len() % BLOCK_SIZE != 0 {
		return Err(Error::cipher(format!(
			"ciphertext length {} is not a multiple of {BLOCK_SIZE}",
			ciphertext.len()
		)));
	}

	let cipher = Aes256CbcDec::new_from_slices(key.as_ref(), iv.as_ref())
		.map_err(|_| Error::cipher("invalid key or IV length"))?;

	cipher
		.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
		.map_err(|_| Error::cipher("decryption failed"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::{init, unhex};

	#[test]
	fn known_answer() {
		init();

		let ciphertext = encrypt_cbc(b"Hello World!", [0u8; 32], [0u8; 16]).unwrap();
		assert_eq!(unhex("c10e6d561c7afaa57f3f44b2f79dbf14"), ciphertext);
	}

	#[test]
	fn round_trip_at_block_boundaries() {
		init();

		let key = [3u8; 32];
		let iv = [9u8; 16];

		for len in [0usize, 1, 15, 16, 17, 31, 32, 33, 100] {
			let plaintext = vec![0xa5u8; len];
			let ciphertext = encrypt_cbc(&plaintext, key, iv).unwrap();

			assert_eq!(0, ciphertext.len() % BLOCK_SIZE);
			assert_eq!((len / BLOCK_SIZE + 1) * BLOCK_SIZE, ciphertext.len());
			assert_eq!(plaintext, decrypt_cbc(&ciphertext, key, iv).unwrap());
		}
	}

	#[test]
	fn bad_key_length() {
		init();

		let result = encrypt_cbc(b"x", [0u8; 16], [0u8; 16]);
		assert!(matches!(result, Err(Error::Cipher(_))));

		let result = decrypt_cbc([0u8; 16], [0u8; 33], [0u8; 16]);
		assert!(matches!(result, Err(Error::Cipher(_))));
	}

	#[test]
	fn bad_iv_length() {
		init();

		let result = encrypt_cbc(b"x", [0u8; 32], [0u8; 12]);
		assert!(matches!(result, Err(Error::Cipher(_))));
	}

	#[test]
	fn unaligned_ciphertext() {
		init();

		let result = decrypt_cbc([0u8; 17], [0u8; 32], [0u8; 16]);
		assert!(matches!(result, Err(Error::Cipher(_))));
	}

	#[test]
	fn empty_ciphertext() {
		init();

		let result = decrypt_cbc([0u8; 0], [0u8; 32], [0u8; 16]);
		assert!(matches!(result, Err(Error::Cipher(_))));
	}

	#[test]
	fn wrong_key_gives_bad_padding() {
		init();

		// With this key, the final block decrypts to something that doesn't end in valid padding
		let ciphertext = unhex("c10e6d561c7afaa57f3f44b2f79dbf14");
		let result = decrypt_cbc(&ciphertext, [1u8; 32], [0u8; 16]);
		assert!(matches!(result, Err(Error::Cipher(_))));
	}
}
