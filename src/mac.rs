use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::{Error, HMAC_TAG_SIZE, MAC_ALGORITHM};

type HmacSha256 = Hmac<Sha256>;

/// Compute the HMAC-SHA256 tag of `data` under `key`.
///
/// # Errors
///
/// Returns [`Error::Mac`] if the MAC primitive rejects the key.  HMAC accepts keys of any
/// length, so in practice this doesn't happen.
#[tracing::instrument(level = "trace", skip(data, key), fields(algorithm = MAC_ALGORITHM, len = data.as_ref().len()))]
pub fn compute_mac(data: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> Result<[u8; HMAC_TAG_SIZE], Error> {
	let mut mac = HmacSha256::new_from_slice(key.as_ref())
		.map_err(|e| Error::mac(format!("{MAC_ALGORITHM} rejected key: {e}")))?;
	mac.update(data.as_ref());

	let mut tag = [0u8; HMAC_TAG_SIZE];
	tag.copy_from_slice(&mac.finalize().into_bytes());

	Ok(tag)
}

/// Check that `expected_tag` is the HMAC-SHA256 tag of `data` under `key`.
///
/// The comparison takes the same time wherever the first differing byte is.  A tag of the wrong
/// length simply doesn't match.
///
/// # Errors
///
/// Returns [`Error::Mac`] under the same conditions as [`compute_mac`].  A mismatch is *not* an
/// error; it is `Ok(false)`.
#[tracing::instrument(level = "trace", skip(data, key, expected_tag))]
pub fn verify_mac(
	data: impl AsRef<[u8]>,
	key: impl AsRef<[u8]>,
	expected_tag: impl AsRef<[u8]>,
) -> Result<bool, Error> {
	let observed = compute_mac(data, key)?;

	Ok(constant_time_eq::constant_time_eq(
		&observed,
		expected_tag.as_ref(),
	))
}
