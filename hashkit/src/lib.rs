//! Streaming hash engines behind one interface.
//!
//! Every engine implements [`StreamingHasher`]: feed it bytes with
//! [`update`](StreamingHasher::update), then consume it with
//! [`finish`](StreamingHasher::finish) to get the digest as raw bytes or
//! lowercase hex. [`Algorithm`] selects an engine by name at runtime.
//!
//! ```rust
//! use hashkit::{Algorithm, DigestFormat, StreamingHasher};
//!
//! let algorithm: Algorithm = "ripemd160".parse()?;
//! let digest = algorithm
//!     .hasher()
//!     .update("The quick brown fox ")
//!     .update("jumps over the lazy dog")
//!     .finish(DigestFormat::Hex);
//! assert_eq!(digest.as_hex(), Some("37f332f68db77bd9d7edd4969571ad671cf9dd3b"));
//! # Ok::<(), hashkit::HashError>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

pub use blake2::{self, Blake2b, Blake2b256, Blake2b512};
pub use hashkit_traits::{DigestFormat, DigestOutput, HashError, Result, StreamingHasher};
pub use md5::{self, Md5};
pub use ripemd160::{self, Ripemd160};
pub use sha3::{
    self, Keccak, Keccak224, Keccak256, Keccak384, Keccak512, Sha3, Sha3_224, Sha3_256, Sha3_384,
    Sha3_512,
};

mod algorithm;

pub use algorithm::{AnyHasher, Algorithm};

/// Hash `data` in one shot with `algorithm`.
pub fn hash(algorithm: Algorithm, data: impl AsRef<[u8]>, format: DigestFormat) -> DigestOutput {
    let data = data.as_ref();
    log::trace!("hashing {} bytes with {}", data.len(), algorithm);
    algorithm.hasher().update(data).finish(format)
}

/// Hash the UTF-8 text `text` with the algorithm called `name`.
///
/// # Errors
///
/// [`HashError::UnsupportedParameter`] if `name` is not a known algorithm.
///
/// ```rust
/// let digest = hashkit::hash_str("md5", "hello world", hashkit::DigestFormat::Hex)?;
/// assert_eq!(digest.to_string(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
/// # Ok::<(), hashkit::HashError>(())
/// ```
pub fn hash_str(name: &str, text: &str, format: DigestFormat) -> Result<DigestOutput> {
    Ok(hash(name.parse()?, text, format))
}
