#[derive(Debug, thiserror::Error, thiserror_ext::Construct)]
#[non_exhaustive]
pub enum Error {
	#[error("failed to generate random material: {0}")]
	Generation(String),

	#[error("failed to compute MAC: {0}")]
	Mac(String),

	#[error("authentication failed")]
	Authentication,

	#[error("cipher failure: {0}")]
	Cipher(String),

	#[error("invalid {element}: {reason}")]
	Format { element: String, reason: String },
}
