use digest::{consts::U64, generic_array::GenericArray};

pub(crate) type Block = GenericArray<u8, U64>;

pub(crate) const DIGEST_BUF_LEN: usize = 5;

pub(crate) const H0: [u32; DIGEST_BUF_LEN] =
    [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476, 0xc3d2_e1f0];

/// Message word selection, left line.
#[rustfmt::skip]
const R_LEFT: [usize; 80] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    7, 4, 13, 1, 10, 6, 15, 3, 12, 0, 9, 5, 2, 14, 11, 8,
    3, 10, 14, 4, 9, 15, 8, 1, 2, 7, 0, 6, 13, 11, 5, 12,
    1, 9, 11, 10, 0, 8, 12, 4, 13, 3, 7, 15, 14, 5, 6, 2,
    4, 0, 5, 9, 7, 12, 2, 10, 14, 1, 3, 8, 11, 6, 15, 13,
];

/// Message word selection, right line.
#[rustfmt::skip]
const R_RIGHT: [usize; 80] = [
    5, 14, 7, 0, 9, 2, 11, 4, 13, 6, 15, 8, 1, 10, 3, 12,
    6, 11, 3, 7, 0, 13, 5, 10, 14, 15, 8, 12, 4, 9, 1, 2,
    15, 5, 1, 3, 7, 14, 6, 9, 11, 8, 12, 2, 10, 0, 4, 13,
    8, 6, 4, 1, 3, 11, 15, 0, 5, 12, 2, 13, 9, 7, 10, 14,
    12, 15, 10, 4, 1, 5, 8, 7, 6, 2, 13, 14, 0, 3, 9, 11,
];

/// Rotate amounts, left line.
#[rustfmt::skip]
const S_LEFT: [u32; 80] = [
    11, 14, 15, 12, 5, 8, 7, 9, 11, 13, 14, 15, 6, 7, 9, 8,
    7, 6, 8, 13, 11, 9, 7, 15, 7, 12, 15, 9, 11, 7, 13, 12,
    11, 13, 6, 7, 14, 9, 13, 15, 14, 8, 13, 6, 5, 12, 7, 5,
    11, 12, 14, 15, 14, 15, 9, 8, 9, 14, 5, 6, 8, 6, 5, 12,
    9, 15, 5, 11, 6, 8, 13, 12, 5, 12, 13, 14, 11, 8, 5, 6,
];

/// Rotate amounts, right line.
#[rustfmt::skip]
const S_RIGHT: [u32; 80] = [
    8, 9, 9, 11, 13, 15, 15, 5, 7, 7, 8, 11, 14, 14, 12, 6,
    9, 13, 15, 7, 12, 8, 9, 11, 7, 7, 12, 7, 6, 15, 13, 11,
    9, 7, 15, 11, 8, 6, 6, 14, 12, 13, 5, 14, 13, 13, 7, 5,
    15, 5, 8, 11, 14, 14, 6, 14, 6, 9, 12, 9, 12, 5, 15, 8,
    8, 5, 12, 9, 12, 5, 14, 6, 8, 13, 6, 5, 15, 13, 11, 11,
];

const K_LEFT: [u32; 5] = [0x0000_0000, 0x5a82_7999, 0x6ed9_eba1, 0x8f1b_bcdc, 0xa953_fd4e];
const K_RIGHT: [u32; 5] = [0x50a2_8be6, 0x5c4d_d124, 0x6d70_3ef3, 0x7a6d_76e9, 0x0000_0000];

/// The five boolean functions; the right line walks them in reverse.
#[inline(always)]
fn f(group: usize, x: u32, y: u32, z: u32) -> u32 {
    match group {
        0 => x ^ y ^ z,
        1 => (x & y) | (!x & z),
        2 => (x | !y) ^ z,
        3 => (x & z) | (y & !z),
        _ => x ^ (y | !z),
    }
}

/// One pipeline step: `[a, b, c, d, e]` becomes `[e, t, b, rol(c, 10), d]`.
#[inline(always)]
fn step(v: &mut [u32; 5], f: u32, x: u32, k: u32, s: u32) {
    let t = v[0]
        .wrapping_add(f)
        .wrapping_add(x)
        .wrapping_add(k)
        .rotate_left(s)
        .wrapping_add(v[4]);
    *v = [v[4], t, v[1], v[2].rotate_left(10), v[3]];
}

pub(crate) fn compress(h: &mut [u32; DIGEST_BUF_LEN], block: &Block) {
    let mut x = [0u32; 16];
    for (o, chunk) in x.iter_mut().zip(block.chunks_exact(4)) {
        *o = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    let mut left = *h;
    let mut right = *h;

    for j in 0..80 {
        let group = j / 16;
        let fl = f(group, left[1], left[2], left[3]);
        step(&mut left, fl, x[R_LEFT[j]], K_LEFT[group], S_LEFT[j]);
        let fr = f(4 - group, right[1], right[2], right[3]);
        step(&mut right, fr, x[R_RIGHT[j]], K_RIGHT[group], S_RIGHT[j]);
    }

    let t = h[1].wrapping_add(left[2]).wrapping_add(right[3]);
    h[1] = h[2].wrapping_add(left[3]).wrapping_add(right[4]);
    h[2] = h[3].wrapping_add(left[4]).wrapping_add(right[0]);
    h[3] = h[4].wrapping_add(left[0]).wrapping_add(right[1]);
    h[4] = h[0].wrapping_add(left[1]).wrapping_add(right[2]);
    h[0] = t;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_tables_are_permutations() {
        for table in [&R_LEFT, &R_RIGHT] {
            for group in table.chunks_exact(16) {
                let mut seen = [false; 16];
                group.iter().for_each(|&i| seen[i] = true);
                assert!(seen.iter().all(|&s| s));
            }
        }
    }

    #[test]
    fn padded_empty_block() {
        let mut block = Block::default();
        block[0] = 0x80;
        let mut h = H0;
        compress(&mut h, &block);
        assert_eq!(h, [0xa585_119c, 0x54fc_e9c5, 0x9708_2861, 0x48f5_e87e, 0x318d_25b2]);
    }
}
