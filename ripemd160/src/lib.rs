//! An implementation of the [RIPEMD-160][1] cryptographic hash.
//!
//! # Usage
//!
//! ```rust
//! use ripemd160::{DigestFormat, Ripemd160, StreamingHasher};
//!
//! // create a RIPEMD-160 hasher, feed it and read the digest as hex
//! let result = Ripemd160::default()
//!     .update(b"Hello ")
//!     .update(b"world!")
//!     .finish(DigestFormat::Hex);
//! assert_eq!(result.as_hex(), Some("7f772647d88750add82d8e1a7a3e5c0902a346a3"));
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/RIPEMD

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use digest::{self, Digest};
pub use hashkit_traits::{DigestFormat, DigestOutput, HashError, StreamingHasher};

use core::fmt;
use digest::{
    block_buffer::Eager,
    core_api::{
        AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
        OutputSizeUser, Reset, UpdateCore,
    },
    typenum::{Unsigned, U20, U64},
    HashMarker, Output,
};

mod block;
use block::{compress, DIGEST_BUF_LEN, H0};

/// Core RIPEMD-160 hasher state.
#[derive(Clone)]
pub struct Ripemd160Core {
    h: [u32; DIGEST_BUF_LEN],
    block_len: u64,
}

impl HashMarker for Ripemd160Core {}

impl BlockSizeUser for Ripemd160Core {
    type BlockSize = U64;
}

impl BufferKindUser for Ripemd160Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Ripemd160Core {
    type OutputSize = U20;
}

impl UpdateCore for Ripemd160Core {
    #[inline]
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        self.block_len = self.block_len.wrapping_add(blocks.len() as u64);
        for block in blocks {
            compress(&mut self.h, block);
        }
    }
}

impl FixedOutputCore for Ripemd160Core {
    #[inline]
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        // message length in bits, mod 2^64
        let bs = Self::BlockSize::U64;
        let bit_len = self
            .block_len
            .wrapping_mul(bs)
            .wrapping_add(buffer.get_pos() as u64)
            .wrapping_mul(8);
        let mut h = self.h;
        buffer.len64_padding_le(bit_len, |block| compress(&mut h, block));

        for (chunk, v) in out.chunks_exact_mut(4).zip(h.iter()) {
            chunk.copy_from_slice(&v.to_le_bytes());
        }
    }
}

impl Default for Ripemd160Core {
    #[inline]
    fn default() -> Self {
        Self {
            h: H0,
            block_len: 0,
        }
    }
}

impl Reset for Ripemd160Core {
    #[inline]
    fn reset(&mut self) {
        *self = Default::default();
    }
}

impl AlgorithmName for Ripemd160Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ripemd160")
    }
}

impl fmt::Debug for Ripemd160Core {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Ripemd160Core { ... }")
    }
}

/// RIPEMD-160 hasher state.
pub type Ripemd160 = CoreWrapper<Ripemd160Core>;
