use crate::keccak::f1600;

const PLEN: usize = 25;

/// The 1600-bit sponge state.
#[derive(Clone, Default)]
pub(crate) struct Sha3State {
    state: [u64; PLEN],
}

impl Sha3State {
    /// XOR one rate-sized block into the leading lanes and permute.
    #[inline(always)]
    pub(crate) fn absorb_block(&mut self, block: &[u8]) {
        debug_assert_eq!(block.len() % 8, 0);
        for (lane, chunk) in self.state.iter_mut().zip(block.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *lane ^= u64::from_le_bytes(word);
        }
        f1600(&mut self.state);
    }

    /// Copy out the leading `out.len()` state bytes, eight per lane.
    #[inline(always)]
    pub(crate) fn squeeze(&self, out: &mut [u8]) {
        for (chunk, lane) in out.chunks_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&lane.to_le_bytes()[..chunk.len()]);
        }
    }
}
