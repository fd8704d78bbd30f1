macro_rules! impl_sha3 {
    (
        $name:ident, $full_name:ident, $output_size:ident,
        $rate:ident, $pad:expr, $alg_name:expr $(,)?
    ) => {
        #[doc = "Core "]
        #[doc = $alg_name]
        #[doc = " hasher state."]
        #[derive(Clone)]
        pub struct $name {
            state: Sha3State,
        }

        impl HashMarker for $name {}

        impl BlockSizeUser for $name {
            type BlockSize = $rate;
        }

        impl BufferKindUser for $name {
            type BufferKind = Eager;
        }

        impl OutputSizeUser for $name {
            type OutputSize = $output_size;
        }

        impl UpdateCore for $name {
            #[inline]
            fn update_blocks(&mut self, blocks: &[Block<Self>]) {
                for block in blocks {
                    self.state.absorb_block(block)
                }
            }
        }

        impl FixedOutputCore for $name {
            #[inline]
            fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
                // pad10*1 with the domain bits in front; both may land in one byte
                let pos = buffer.get_pos();
                let block = buffer.pad_with_zeros();
                block[pos] = $pad;
                let n = block.len();
                block[n - 1] |= 0x80;

                self.state.absorb_block(block);
                self.state.squeeze(out);
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self {
                    state: Default::default(),
                }
            }
        }

        impl Reset for $name {
            #[inline]
            fn reset(&mut self) {
                *self = Default::default();
            }
        }

        impl AlgorithmName for $name {
            fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($alg_name)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), " { ... }"))
            }
        }

        #[doc = $alg_name]
        #[doc = " hasher state."]
        pub type $full_name = CoreWrapper<$name>;
    };
}

/// Runtime selection between the four digest sizes of one sponge family.
macro_rules! impl_selector {
    (
        $name:ident, $family:expr,
        $v224:ident, $v256:ident, $v384:ident, $v512:ident $(,)?
    ) => {
        #[doc = $family]
        #[doc = " sponge with the digest size chosen at runtime."]
        #[derive(Clone)]
        pub enum $name {
            /// 224-bit digest, 144-byte rate.
            Bits224($v224),
            /// 256-bit digest, 136-byte rate.
            Bits256($v256),
            /// 384-bit digest, 104-byte rate.
            Bits384($v384),
            /// 512-bit digest, 72-byte rate.
            Bits512($v512),
        }

        impl $name {
            /// Create a hasher producing a `bits`-bit digest.
            ///
            /// # Errors
            ///
            /// [`HashError::UnsupportedParameter`] unless `bits` is 224, 256, 384 or 512.
            pub fn new(bits: usize) -> Result<Self, HashError> {
                match bits {
                    224 => Ok(Self::Bits224(Default::default())),
                    256 => Ok(Self::Bits256(Default::default())),
                    384 => Ok(Self::Bits384(Default::default())),
                    512 => Ok(Self::Bits512(Default::default())),
                    _ => Err(HashError::unsupported(
                        concat!($family, " digest size in bits"),
                        bits,
                    )),
                }
            }

            /// Digest size in bits.
            pub fn bits(&self) -> usize {
                self.output_len() * 8
            }

            /// Bytes absorbed per permutation call.
            pub fn rate(&self) -> usize {
                STATE_LEN - 2 * self.output_len()
            }
        }

        impl StreamingHasher for $name {
            fn output_len(&self) -> usize {
                match self {
                    Self::Bits224(h) => h.output_len(),
                    Self::Bits256(h) => h.output_len(),
                    Self::Bits384(h) => h.output_len(),
                    Self::Bits512(h) => h.output_len(),
                }
            }

            fn absorb(&mut self, data: &[u8]) {
                match self {
                    Self::Bits224(h) => h.absorb(data),
                    Self::Bits256(h) => h.absorb(data),
                    Self::Bits384(h) => h.absorb(data),
                    Self::Bits512(h) => h.absorb(data),
                }
            }

            fn finalize_bytes(self) -> Vec<u8> {
                match self {
                    Self::Bits224(h) => h.finalize_bytes(),
                    Self::Bits256(h) => h.finalize_bytes(),
                    Self::Bits384(h) => h.finalize_bytes(),
                    Self::Bits512(h) => h.finalize_bytes(),
                }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("bits", &self.bits())
                    .finish_non_exhaustive()
            }
        }
    };
}
