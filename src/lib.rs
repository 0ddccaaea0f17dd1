//! AES-256-CBC encryption, authenticated with HMAC-SHA256, in an Encrypt-then-MAC construction.
//!
//! CBC on its own gives you confidentiality but no integrity: anyone can fiddle with a
//! ciphertext, and worse, if you tell them whether the padding was valid when you decrypted
//! it, they can recover the plaintext one byte at a time (the "padding oracle").  The cure is
//! to compute a MAC over the *ciphertext* after encrypting, and to check that MAC *before*
//! decrypting anything.  If the MAC doesn't match, nothing gets decrypted, and the only thing
//! anyone learns is [`Error::Authentication`].
//!
//! An encryption is split into two parts:
//!
//! * [`PrivateData`], the AES key and the (separate, independent) HMAC key.  Keep this secret.
//! * [`PublicData`], the ciphertext, the IV, and the HMAC tag.  This can go anywhere.
//!
//! Both can be turned into base64 text and back again.  The text formats don't record the sizes
//! of their fields, so the defaults in this crate (see [`AES_KEY_SIZE`], [`IV_SIZE`] and
//! [`HMAC_TAG_SIZE`]) have to be agreed upon by whoever writes and whoever reads them.
//!
//! # Example
//!
//! ```rust
//! use cbc_hmac_box::{Error, PrivateData};
//! # fn main() -> Result<(), Error> {
//!
//! // Encrypt some text under brand-new keys
//! let encrypted = cbc_hmac_box::encrypt_text("Hello World!")?;
//!
//! // The public part can be sent wherever
//! let message = encrypted.public_data().save_to_string();
//!
//! // The private part needs to be kept somewhere safe
//! let keys = encrypted.private_data().save_to_string();
//!
//! // ... and later on ...
//! let keys = PrivateData::from_string(&keys)?;
//! assert_eq!("Hello World!", cbc_hmac_box::decrypt_text(&message, &keys)?);
//!
//! // Someone else's keys won't get you anywhere
//! let other_keys = PrivateData::generate()?;
//! let result = cbc_hmac_box::decrypt_text(&message, &other_keys);
//! assert!(matches!(result, Err(Error::Authentication)));
//! # Ok(())
//! # }
//! ```
//!
//! If you already have keys, use [`encrypt`] or [`encrypt_text_with`] to reuse them; every call
//! still gets its own IV.
mod cipher;
mod combined_data;
mod error;
mod key;
mod mac;
mod params;
mod private_data;
mod protocol;
mod public_data;
mod random;

pub use cipher::{decrypt_cbc, encrypt_cbc};
pub use combined_data::CombinedData;
pub use error::Error;
pub use key::Key;
pub use mac::{compute_mac, verify_mac};
pub use params::{
	AES_KEY_SIZE, BLOCK_SIZE, CIPHER_TRANSFORMATION, HMAC_KEY_SIZE, HMAC_TAG_SIZE, IV_SIZE,
	MAC_ALGORITHM, RANDOM_SOURCE,
};
pub use private_data::PrivateData;
pub use protocol::{decrypt, decrypt_text, encrypt, encrypt_text, encrypt_text_with, encrypt_with_iv};
pub use public_data::PublicData;
pub use random::{generate_aes_key, generate_hmac_key, generate_iv};

#[cfg(test)]
mod testing {
	use std::sync::Once;
	use tracing_subscriber::{layer::SubscriberExt as _, registry::Registry};

	static INIT: Once = Once::new();

	pub(crate) fn init() {
		INIT.call_once(|| {
			let layer = tracing_tree::HierarchicalLayer::default()
				.with_writer(tracing_subscriber::fmt::TestWriter::new())
				.with_indent_lines(true)
				.with_indent_amount(2)
				.with_targets(true);

			let sub = Registry::default().with(layer);
			tracing::subscriber::set_global_default(sub).unwrap();
		});
	}

	pub(crate) fn unhex(s: &str) -> Vec<u8> {
		(0..s.len())
			.step_by(2)
			.map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
			.collect()
	}
}
