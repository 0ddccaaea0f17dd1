use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::str::FromStr;

use super::{Error, HMAC_TAG_SIZE, IV_SIZE};

/// The shareable half of an encryption: the ciphertext, the IV it was encrypted with, and the
/// HMAC tag over the ciphertext.
///
/// None of this is secret, and it is what you'd store or send somewhere.  The text form is
/// `base64(ciphertext || hmac_tag || iv)`.  As with [`PrivateData`](super::PrivateData), the
/// text form does not record field sizes, so if you use a non-default IV or tag size you need
/// [`from_string_with_sizes`](Self::from_string_with_sizes) to read it back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicData {
	ciphertext: Vec<u8>,
	iv: Vec<u8>,
	hmac_tag: Vec<u8>,
}

impl PublicData {
	pub fn new(
		ciphertext: impl Into<Vec<u8>>,
		iv: impl Into<Vec<u8>>,
		hmac_tag: impl Into<Vec<u8>>,
	) -> Self {
		Self {
			ciphertext: ciphertext.into(),
			iv: iv.into(),
			hmac_tag: hmac_tag.into(),
		}
	}

	pub fn ciphertext(&self) -> &[u8] {
		&self.ciphertext
	}

	pub fn iv(&self) -> &[u8] {
		&self.iv
	}

	pub fn hmac_tag(&self) -> &[u8] {
		&self.hmac_tag
	}

	/// Encode as `base64(ciphertext || hmac_tag || iv)`.
	pub fn save_to_string(&self) -> String {
		let mut v =
			Vec::with_capacity(self.ciphertext.len() + self.hmac_tag.len() + self.iv.len());
		v.extend_from_slice(&self.ciphertext);
		v.extend_from_slice(&self.hmac_tag);
		v.extend_from_slice(&self.iv);

		STANDARD.encode(v)
	}

	/// Parse the output of [`save_to_string`](Self::save_to_string), assuming a 16 byte IV and a
	/// 32 byte tag.
	///
	/// # Errors
	///
	/// Returns [`Error::Format`] if the text isn't valid base64, or is too short to hold the IV
	/// and tag.
	pub fn from_string(s: impl AsRef<str>) -> Result<Self, Error> {
		Self::from_string_with_sizes(s, IV_SIZE, HMAC_TAG_SIZE)
	}

	/// Parse the output of [`save_to_string`](Self::save_to_string) with the given IV and tag
	/// sizes.  Whatever precedes the tag is the ciphertext.
	///
	/// # Errors
	///
	/// Returns [`Error::Format`] if the text isn't valid base64, or decodes to fewer than
	/// `iv_size + hmac_tag_size` bytes.
	#[tracing::instrument(level = "debug", skip(s))]
	pub fn from_string_with_sizes(
		s: impl AsRef<str>,
		iv_size: usize,
		hmac_tag_size: usize,
	) -> Result<Self, Error> {
		let packed = STANDARD
			.decode(s.as_ref())
			.map_err(|e| Error::format("public data", e.to_string()))?;

		let fixed = iv_size
			.checked_add(hmac_tag_size)
			.ok_or_else(|| Error::format("public data", "field sizes overflow"))?;

		let Some(ciphertext_len) = packed.len().checked_sub(fixed) else {
			tracing::debug!(len = packed.len(), iv_size, hmac_tag_size, "Public data too short");
			return Err(Error::format(
				"public data",
				format!(
					"{} bytes is too short for a {iv_size} byte IV and {hmac_tag_size} byte tag",
					packed.len()
				),
			));
		};

		let (ciphertext, rest) = packed.split_at(ciphertext_len);
		let (hmac_tag, iv) = rest.split_at(hmac_tag_size);

		Ok(Self::new(ciphertext, iv, hmac_tag))
	}
}

impl FromStr for PublicData {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		Self::from_string(s)
	}
}

impl std::fmt::Display for PublicData {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.save_to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::init;

	#[test]
	fn save_and_parse_custom_sizes() {
		init();

		let expected = PublicData::new(vec![1u8, 2, 3], vec![4u8, 5], b"ab".to_vec());
		let text = expected.save_to_string();
		assert_eq!("AQIDYWIEBQ==", text);

		let actual = PublicData::from_string_with_sizes(&text, 2, 2).unwrap();
		assert_eq!(&[1u8, 2, 3][..], actual.ciphertext());
		assert_eq!(&[4u8, 5][..], actual.iv());
		assert_eq!(&b"ab"[..], actual.hmac_tag());
	}

	#[test]
	fn save_and_parse_default_sizes() {
		init();

		let expected = PublicData::new(vec![0xeeu8; 48], vec![0x11u8; IV_SIZE], vec![0x22u8; HMAC_TAG_SIZE]);

		let actual: PublicData = expected.to_string().parse().unwrap();
		assert_eq!(expected, actual);
	}

	#[test]
	fn empty_ciphertext_is_fine_for_parsing() {
		init();

		let expected = PublicData::new(Vec::<u8>::new(), vec![1u8; IV_SIZE], vec![2u8; HMAC_TAG_SIZE]);

		let actual = PublicData::from_string(expected.save_to_string()).unwrap();
		assert!(actual.ciphertext().is_empty());
		assert_eq!(expected, actual);
	}

	#[test]
	fn too_short() {
		init();

		let text = STANDARD.encode([0u8; IV_SIZE + HMAC_TAG_SIZE - 1]);
		let result = PublicData::from_string(text);
		assert!(matches!(result, Err(Error::Format { .. })));
	}

	#[test]
	fn not_base64() {
		init();

		let result = PublicData::from_string("%%%");
		assert!(matches!(result, Err(Error::Format { .. })));
	}

	#[test]
	fn absurd_sizes() {
		init();

		let result = PublicData::from_string_with_sizes("AQIDYWIEBQ==", usize::MAX, 2);
		assert!(matches!(result, Err(Error::Format { .. })));
	}
}
