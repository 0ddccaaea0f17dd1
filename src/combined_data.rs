use super::{PrivateData, PublicData};

/// What [`encrypt_text`](super::encrypt_text) hands back: the encrypted data, and the freshly
/// generated keys needed to decrypt it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombinedData {
	public_data: PublicData,
	private_data: PrivateData,
}

impl CombinedData {
	pub fn new(public_data: PublicData, private_data: PrivateData) -> Self {
		Self {
			public_data,
			private_data,
		}
	}

	pub fn public_data(&self) -> &PublicData {
		&self.public_data
	}

	pub fn private_data(&self) -> &PrivateData {
		&self.private_data
	}

	pub fn into_parts(self) -> (PublicData, PrivateData) {
		(self.public_data, self.private_data)
	}
}
