use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use digest::{
    core_api::{
        AlgorithmName, CoreWrapper, FixedOutputCore, RtVariableCoreWrapper, UpdateCore,
        VariableOutputCore,
    },
    typenum::{IsLess, Le, NonZero, Unsigned, U256},
    FixedOutput, Update, VariableOutput,
};

use crate::{DigestFormat, DigestOutput, Result};

/// Incremental hash computation over an arbitrary byte stream.
///
/// An engine is created per digest, fed through any number of
/// [`update`](Self::update) calls and consumed by [`finish`](Self::finish).
/// Because finishing takes the engine by value, an engine can never be
/// updated or finalized again once its padding has been processed.
pub trait StreamingHasher: Sized {
    /// Digest length in bytes.
    fn output_len(&self) -> usize;

    /// Absorb `data` into the running state.
    fn absorb(&mut self, data: &[u8]);

    /// Pad, run the final compression and return the raw digest.
    fn finalize_bytes(self) -> Vec<u8>;

    /// Absorb `data` and hand the engine back for chaining.
    #[must_use]
    fn update(mut self, data: impl AsRef<[u8]>) -> Self {
        self.absorb(data.as_ref());
        self
    }

    /// Absorb `text` after checking that it is valid UTF-8.
    fn update_text(self, text: &[u8]) -> Result<Self> {
        let text = core::str::from_utf8(text)?;
        Ok(self.update(text))
    }

    /// Finalize and render the digest in `format`.
    fn finish(self, format: DigestFormat) -> DigestOutput {
        DigestOutput::new(self.finalize_bytes(), format)
    }

    /// Hash `data` in one shot with a default-constructed engine.
    fn digest(data: impl AsRef<[u8]>, format: DigestFormat) -> DigestOutput
    where
        Self: Default,
    {
        Self::default().update(data).finish(format)
    }
}

impl<T> StreamingHasher for CoreWrapper<T>
where
    T: FixedOutputCore + AlgorithmName,
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    #[inline]
    fn output_len(&self) -> usize {
        T::OutputSize::USIZE
    }

    #[inline]
    fn absorb(&mut self, data: &[u8]) {
        Update::update(self, data);
    }

    fn finalize_bytes(self) -> Vec<u8> {
        let out = FixedOutput::finalize_fixed(self).to_vec();
        log::trace!("{} finalized, {} byte digest", Name::<T>::new(), out.len());
        out
    }
}

impl<T> StreamingHasher for RtVariableCoreWrapper<T>
where
    T: VariableOutputCore + UpdateCore + AlgorithmName,
    T::BlockSize: IsLess<U256>,
    Le<T::BlockSize, U256>: NonZero,
{
    #[inline]
    fn output_len(&self) -> usize {
        VariableOutput::output_size(self)
    }

    #[inline]
    fn absorb(&mut self, data: &[u8]) {
        Update::update(self, data);
    }

    fn finalize_bytes(self) -> Vec<u8> {
        let out = VariableOutput::finalize_boxed(self).into_vec();
        log::trace!("{} finalized, {} byte digest", Name::<T>::new(), out.len());
        out
    }
}

/// Displays the algorithm name of a core type.
struct Name<T>(PhantomData<T>);

impl<T> Name<T> {
    fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: AlgorithmName> fmt::Display for Name<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        T::write_alg_name(f)
    }
}
