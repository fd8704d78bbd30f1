//! The Keccak-f[1600] permutation.

/// Number of rounds of Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Round constants for the iota step.
pub const RC: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rotation applied to the lane moved at each rho/pi step.
#[rustfmt::skip]
const RHO: [u32; 24] = [
     1,  3,  6, 10, 15, 21, 28, 36, 45, 55,  2, 14,
    27, 41, 56,  8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Destination lane of each rho/pi step, starting from lane 1.
#[rustfmt::skip]
const PI: [usize; 24] = [
    10,  7, 11, 17, 18,  3,  5, 16,  8, 21, 24,  4,
    15, 23, 19, 13, 12,  2, 20, 14, 22,  9,  6,  1,
];

/// Apply Keccak-f[1600] to `a`, lanes indexed as `a[x + 5 * y]`.
pub fn f1600(a: &mut [u64; 25]) {
    for rc in RC.iter() {
        // theta
        let mut c = [0u64; 5];
        for (x, col) in c.iter_mut().enumerate() {
            *col = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                a[x + 5 * y] ^= d;
            }
        }

        // rho and pi
        let mut last = a[1];
        for (&dst, &rot) in PI.iter().zip(RHO.iter()) {
            let next = a[dst];
            a[dst] = last.rotate_left(rot);
            last = next;
        }

        // chi
        for y in 0..5 {
            let mut row = [0u64; 5];
            row.copy_from_slice(&a[5 * y..5 * y + 5]);
            for x in 0..5 {
                a[x + 5 * y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // iota
        a[0] ^= rc;
    }
}
