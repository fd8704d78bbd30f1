//! Streaming hasher contract shared by the `hashkit` engines.
//!
//! Every engine absorbs input through chained [`StreamingHasher::update`]
//! calls and is consumed by [`StreamingHasher::finish`], which renders the
//! digest as raw bytes or lowercase hex according to a [`DigestFormat`].
//!
//! # Usage
//!
//! ```rust
//! use hashkit_traits::{DigestFormat, StreamingHasher};
//! # use hashkit_traits::DigestOutput;
//!
//! fn fingerprint<H: StreamingHasher + Default>(parts: &[&str]) -> DigestOutput {
//!     parts
//!         .iter()
//!         .fold(H::default(), |hasher, part| hasher.update(part))
//!         .finish(DigestFormat::Hex)
//! }
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

pub use digest;

mod error;
mod format;
mod hasher;

pub use error::{HashError, Result};
pub use format::{DigestFormat, DigestOutput};
pub use hasher::StreamingHasher;
