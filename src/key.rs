use secrecy::{ExposeSecret as _, SecretBox, SecretSlice};

/// A secret key held by [`PrivateData`](super::PrivateData).
///
/// The bytes are zeroed when the key is dropped, and never show up in `Debug` output.  The
/// length isn't fixed here; the cipher and MAC engines are the ones that care about it.
#[derive(Debug)]
pub struct Key(SecretSlice<u8>);

impl Key {
	pub fn expose_secret(&self) -> &[u8] {
		self.0.expose_secret()
	}

	pub fn len(&self) -> usize {
		self.expose_secret().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Clone for Key {
	fn clone(&self) -> Self {
		self.expose_secret().into()
	}
}

impl PartialEq for Key {
	fn eq(&self, other: &Self) -> bool {
		constant_time_eq::constant_time_eq(self.expose_secret(), other.expose_secret())
	}
}

impl Eq for Key {}

impl From<Vec<u8>> for Key {
	fn from(k: Vec<u8>) -> Self {
		Key(SecretBox::new(k.into_boxed_slice()))
	}
}

impl From<&[u8]> for Key {
	fn from(k: &[u8]) -> Self {
		k.to_vec().into()
	}
}

impl<const N: usize> From<[u8; N]> for Key {
	fn from(k: [u8; N]) -> Self {
		k[..].into()
	}
}

impl<const N: usize> From<&[u8; N]> for Key {
	fn from(k: &[u8; N]) -> Self {
		k[..].into()
	}
}
