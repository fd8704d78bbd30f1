//! An implementation of the [SHA-3][1] hash functions and of the original
//! Keccak submission they were derived from.
//!
//! Both families share the Keccak-f\[1600\] sponge and differ only in the
//! domain bits placed in front of the final padding: Keccak uses `0x01`,
//! the FIPS 202 SHA-3 functions use `0x06`. The digest sizes are 224, 256,
//! 384 and 512 bits with a capacity of twice the digest size.
//!
//! # Usage
//!
//! ```rust
//! use sha3::{DigestFormat, Keccak256, StreamingHasher};
//!
//! let result = Keccak256::default().update(b"abc").finish(DigestFormat::Hex);
//! assert_eq!(
//!     result.as_hex(),
//!     Some("4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"),
//! );
//! ```
//!
//! When the digest size is only known at runtime:
//!
//! ```rust
//! use sha3::{DigestFormat, Sha3, StreamingHasher};
//!
//! let hasher = Sha3::new(256)?;
//! assert_eq!(hasher.rate(), 136);
//! let result = hasher.finish(DigestFormat::Hex);
//! assert_eq!(
//!     result.as_hex(),
//!     Some("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"),
//! );
//! # Ok::<(), sha3::HashError>(())
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-3

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;

pub use digest::{self, Digest};
pub use hashkit_traits::{DigestFormat, DigestOutput, HashError, StreamingHasher};

use alloc::vec::Vec;
use core::fmt;
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
        OutputSizeUser, Reset, UpdateCore,
    },
    typenum::{U104, U136, U144, U28, U32, U48, U64, U72},
    HashMarker, Output,
};

#[macro_use]
mod macros;
pub mod keccak;
mod state;

use state::Sha3State;

/// Width of the Keccak-f\[1600\] state in bytes.
pub const STATE_LEN: usize = 200;

const KECCAK: u8 = 0x01;
const SHA3: u8 = 0x06;

impl_sha3!(Keccak224Core, Keccak224, U28, U144, KECCAK, "Keccak-224");
impl_sha3!(Keccak256Core, Keccak256, U32, U136, KECCAK, "Keccak-256");
impl_sha3!(Keccak384Core, Keccak384, U48, U104, KECCAK, "Keccak-384");
impl_sha3!(Keccak512Core, Keccak512, U64, U72, KECCAK, "Keccak-512");

impl_sha3!(Sha3_224Core, Sha3_224, U28, U144, SHA3, "SHA3-224");
impl_sha3!(Sha3_256Core, Sha3_256, U32, U136, SHA3, "SHA3-256");
impl_sha3!(Sha3_384Core, Sha3_384, U48, U104, SHA3, "SHA3-384");
impl_sha3!(Sha3_512Core, Sha3_512, U64, U72, SHA3, "SHA3-512");

impl_selector!(Keccak, "Keccak", Keccak224, Keccak256, Keccak384, Keccak512);
impl_selector!(Sha3, "SHA-3", Sha3_224, Sha3_256, Sha3_384, Sha3_512);
