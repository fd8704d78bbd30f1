use digest::{consts::U64, generic_array::GenericArray};

use crate::consts::{RC, SHIFTS};

pub(crate) type Block = GenericArray<u8, U64>;

/// Message word consumed by round `i`.
#[inline(always)]
fn word_index(i: usize) -> usize {
    match i / 16 {
        0 => i,
        1 => (5 * i + 1) % 16,
        2 => (3 * i + 5) % 16,
        _ => (7 * i) % 16,
    }
}

pub(crate) fn compress(state: &mut [u32; 4], block: &Block) {
    let mut data = [0u32; 16];
    for (o, chunk) in data.iter_mut().zip(block.chunks_exact(4)) {
        *o = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for i in 0..64 {
        let f = match i / 16 {
            0 => (b & c) | (!b & d),
            1 => (b & d) | (c & !d),
            2 => b ^ c ^ d,
            _ => c ^ (b | !d),
        };
        let t = a
            .wrapping_add(f)
            .wrapping_add(RC[i])
            .wrapping_add(data[word_index(i)])
            .rotate_left(SHIFTS[i / 16][i % 4]);
        a = d;
        d = c;
        c = b;
        b = b.wrapping_add(t);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
