use super::{
	CombinedData, Error, PrivateData, PublicData, compute_mac, decrypt_cbc, encrypt_cbc,
	generate_iv, verify_mac,
};

/// Encrypt `plaintext` with the given keys, under a freshly generated IV.
///
/// # Errors
///
/// Returns [`Error::Generation`] if no IV could be generated, [`Error::Cipher`] if the AES key
/// isn't 32 bytes, or [`Error::Mac`] if the HMAC key is rejected.
#[tracing::instrument(level = "debug", skip(plaintext, private_data))]
pub fn encrypt(
	plaintext: impl AsRef<[u8]>,
	private_data: &PrivateData,
) -> Result<PublicData, Error> {
	let iv = generate_iv()?;

	encrypt_with_iv(plaintext, iv, private_data)
}

/// Encrypt `plaintext` with the given keys and IV.
///
/// Never use the same IV twice with the same AES key.  Unless you have a very particular reason
/// (such as a reproducible test vector), use [`encrypt`] and let it pick.
///
/// # Errors
///
/// Returns [`Error::Cipher`] if the AES key isn't 32 bytes or the IV isn't 16 bytes, or
/// [`Error::Mac`] if the HMAC key is rejected.
#[tracing::instrument(level = "debug", skip(plaintext, iv, private_data))]
pub fn encrypt_with_iv(
	plaintext: impl AsRef<[u8]>,
	iv: impl AsRef<[u8]>,
	private_data: &PrivateData,
) -> Result<PublicData, Error> {
	let iv = iv.as_ref();

	let ciphertext = encrypt_cbc(
		plaintext.as_ref(),
		private_data.aes_key().expose_secret(),
		iv,
	)?;
	// The tag covers the ciphertext only
	let hmac_tag = compute_mac(&ciphertext, private_data.hmac_key().expose_secret())?;

	tracing::debug!(len = ciphertext.len(), "Encrypted");

	Ok(PublicData::new(ciphertext, iv, hmac_tag))
}

/// Encrypt a string under brand new keys.
///
/// This is the only operation that creates keys as a side effect.  Hang on to the
/// [`PrivateData`] in the result; without it, the ciphertext can never be decrypted.
///
/// # Errors
///
/// Returns [`Error::Generation`] if keys or the IV could not be generated.
#[tracing::instrument(level = "debug", skip(text))]
pub fn encrypt_text(text: impl AsRef<str>) -> Result<CombinedData, Error> {
	let private_data = PrivateData::generate()?;
	let public_data = encrypt(text.as_ref().as_bytes(), &private_data)?;

	Ok(CombinedData::new(public_data, private_data))
}

/// Encrypt a string with existing keys.
///
/// # Errors
///
/// As for [`encrypt`].
#[tracing::instrument(level = "debug", skip(text, private_data))]
pub fn encrypt_text_with(
	text: impl AsRef<str>,
	private_data: &PrivateData,
) -> Result<PublicData, Error> {
	encrypt(text.as_ref().as_bytes(), private_data)
}

/// Check the HMAC tag on `public_data`, and if (and only if) it is valid, decrypt the ciphertext.
///
/// # Errors
///
/// Returns [`Error::Authentication`] if the tag doesn't match, which covers tampering, corruption,
/// and the wrong HMAC key alike.  The ciphertext is never touched in that case.
///
/// [`Error::Cipher`] means the tag matched but decryption still failed, which happens with a
/// correct HMAC key paired with the wrong AES key, or a bad IV length.
#[tracing::instrument(level = "debug", skip(public_data, private_data), fields(len = public_data.ciphertext().len()))]
pub fn decrypt(public_data: &PublicData, private_data: &PrivateData) -> Result<Vec<u8>, Error> {
	if !verify_mac(
		public_data.ciphertext(),
		private_data.hmac_key().expose_secret(),
		public_data.hmac_tag(),
	)? {
		tracing::debug!("HMAC verification failed");
		return Err(Error::Authentication);
	}

	decrypt_cbc(
		public_data.ciphertext(),
		private_data.aes_key().expose_secret(),
		public_data.iv(),
	)
}

/// Decrypt the text form of a [`PublicData`] (as produced by
/// [`PublicData::save_to_string`]) back into a string.
///
/// # Errors
///
/// Returns [`Error::Format`] if `encrypted_text` can't be parsed, or the decrypted bytes aren't
/// UTF-8, as well as anything [`decrypt`] can return.
#[tracing::instrument(level = "debug", skip(encrypted_text, private_data))]
pub fn decrypt_text(
	encrypted_text: impl AsRef<str>,
	private_data: &PrivateData,
) -> Result<String, Error> {
	let public_data = PublicData::from_string(encrypted_text)?;

	let plaintext = decrypt(&public_data, private_data)?;

	String::from_utf8(plaintext).map_err(|e| Error::format("plaintext", e.to_string()))
}
