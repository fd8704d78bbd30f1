//! An implementation of the unkeyed [BLAKE2b][1] hash function.
//!
//! The digest length is fixed when the hasher is created and may be any
//! value from 1 to 64 bytes. It is folded into the parameter block, so a
//! 32-byte BLAKE2b digest is not a prefix of the 64-byte one.
//!
//! # Usage
//!
//! Runtime-selected output length:
//!
//! ```rust
//! use blake2::{DigestFormat, StreamingHasher};
//!
//! let hasher = blake2::with_output_len(32)?;
//! let result = hasher.update(b"abc").finish(DigestFormat::Hex);
//! assert_eq!(
//!     result.as_hex(),
//!     Some("bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319"),
//! );
//! # Ok::<(), blake2::HashError>(())
//! ```
//!
//! Fixed output length through the RustCrypto [`Digest`] trait:
//!
//! ```rust
//! use blake2::{Blake2b512, Digest};
//! use hex_literal::hex;
//!
//! let mut hasher = Blake2b512::new();
//! hasher.update(b"abc");
//! let result = hasher.finalize();
//! assert_eq!(result[..], hex!("
//!     ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1
//!     7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923
//! ")[..]);
//! ```
//!
//! [1]: https://www.rfc-editor.org/rfc/rfc7693

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest, VariableOutput};
pub use hashkit_traits::{DigestFormat, DigestOutput, HashError, StreamingHasher};

use core::fmt;
use digest::{
    block_buffer::Lazy,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper,
        CtVariableCoreWrapper, OutputSizeUser, RtVariableCoreWrapper, TruncSide, UpdateCore,
        VariableOutputCore,
    },
    typenum::{Unsigned, U128, U32, U64},
    HashMarker, InvalidOutputSize, Output,
};

mod compress;
mod consts;

use compress::compress;

/// Largest supported digest length in bytes.
pub const MAX_OUTPUT_LEN: usize = 64;

/// Core BLAKE2b hasher state.
#[derive(Clone)]
pub struct Blake2bVarCore {
    h: [u64; 8],
    t: u128,
}

impl Blake2bVarCore {
    fn with_output_size(output_size: usize) -> Self {
        let mut h = consts::IV;
        // digest length, key length 0, fanout 1, depth 1
        h[0] ^= 0x0101_0000 ^ output_size as u64;
        Self { h, t: 0 }
    }
}

impl HashMarker for Blake2bVarCore {}

impl BlockSizeUser for Blake2bVarCore {
    type BlockSize = U128;
}

impl BufferKindUser for Blake2bVarCore {
    type BufferKind = Lazy;
}

impl OutputSizeUser for Blake2bVarCore {
    type OutputSize = U64;
}

impl UpdateCore for Blake2bVarCore {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for block in blocks {
            self.t = self.t.wrapping_add(block.len() as u128);
            compress(&mut self.h, block, self.t, false);
        }
    }
}

impl VariableOutputCore for Blake2bVarCore {
    const TRUNC_SIDE: TruncSide = TruncSide::Left;

    #[inline]
    fn new(output_size: usize) -> Result<Self, InvalidOutputSize> {
        if output_size == 0 || output_size > Self::OutputSize::USIZE {
            return Err(InvalidOutputSize);
        }
        Ok(Self::with_output_size(output_size))
    }

    #[inline]
    fn finalize_variable_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        self.t = self.t.wrapping_add(buffer.get_pos() as u128);
        let block = buffer.pad_with_zeros();
        let mut h = self.h;
        compress(&mut h, block, self.t, true);
        for (chunk, v) in out.chunks_exact_mut(8).zip(h.iter()) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
    }
}

impl AlgorithmName for Blake2bVarCore {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Blake2b")
    }
}

opaque_debug::implement!(Blake2bVarCore);

/// BLAKE2b hasher with the digest length chosen at runtime.
pub type Blake2b = RtVariableCoreWrapper<Blake2bVarCore>;
/// BLAKE2b-512 hasher state.
pub type Blake2b512 = CoreWrapper<CtVariableCoreWrapper<Blake2bVarCore, U64>>;
/// BLAKE2b-256 hasher state.
pub type Blake2b256 = CoreWrapper<CtVariableCoreWrapper<Blake2bVarCore, U32>>;

/// Create a BLAKE2b hasher producing `output_len` bytes.
///
/// # Errors
///
/// [`HashError::UnsupportedParameter`] unless `1 <= output_len <= 64`.
pub fn with_output_len(output_len: usize) -> Result<Blake2b, HashError> {
    <Blake2b as VariableOutput>::new(output_len)
        .map_err(|_| HashError::unsupported("BLAKE2b output length", output_len))
}
