//! Fixed sizes and algorithm names.
//!
//! The serialized forms carry no length information, so both ends of an exchange have to agree
//! on these values.  The defaults below are what every function without an explicit size
//! argument assumes.

/// AES-256 key length, in bytes.
pub const AES_KEY_SIZE: usize = 32;

/// CBC initialization vector length, in bytes.
pub const IV_SIZE: usize = 16;

/// HMAC-SHA256 key length, in bytes.
pub const HMAC_KEY_SIZE: usize = 32;

/// HMAC-SHA256 tag length, in bytes.
pub const HMAC_TAG_SIZE: usize = 32;

/// AES block length, in bytes.  Every ciphertext is a multiple of this.
pub const BLOCK_SIZE: usize = 16;

pub const CIPHER_TRANSFORMATION: &str = "AES/CBC/PKCS7Padding";
pub const MAC_ALGORITHM: &str = "HmacSHA256";
pub const RANDOM_SOURCE: &str = "OsRng";
