use blake2::{
    with_output_len, Blake2b256, Blake2b512, DigestFormat, HashError, StreamingHasher,
    MAX_OUTPUT_LEN,
};
use hex_literal::hex;
use proptest::prelude::*;

fn blake2b(data: &[u8], output_len: usize) -> Vec<u8> {
    with_output_len(output_len)
        .unwrap()
        .update(data)
        .finalize_bytes()
}

#[test]
fn blake2b_512_known_vectors() {
    let vectors: &[(&[u8], [u8; 64])] = &[
        (
            b"",
            hex!(
                "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419"
                "d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce"
            ),
        ),
        (
            b"abc",
            hex!(
                "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1"
                "7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923"
            ),
        ),
        (
            b"The quick brown fox jumps over the lazy dog",
            hex!(
                "a8add4bdddfd93e4877d2746e62817b116364a1fa7bc148d95090bc7333b3673"
                "f82401cf7aa2e4cb1ecd90296e3f14cb5413f8ed77be73045b13914cdcd6a918"
            ),
        ),
    ];
    for (input, expected) in vectors {
        assert_eq!(blake2b(input, 64), expected, "input {:?}", input);
        assert_eq!(Blake2b512::default().update(input).finalize_bytes(), expected);
    }
}

#[test]
fn blake2b_block_boundaries() {
    // exactly one block must be compressed as the last block, not before it
    assert_eq!(
        blake2b(&[b'a'; 128], 64),
        hex!(
            "fc6c71f688f43ea7d60817478808f3cac753e61571865c95adbc2d9122c943a7"
            "6b92c2cb1047ef3fe7bf6e436ec1d0a99a9e5b216780bf7fed9d7ca91d3a8f3b"
        )
    );
    assert_eq!(
        blake2b(&[b'a'; 129], 64),
        hex!(
            "55e6e0eb418149a8af92fd9ddc99254781b2f522a131b4f4d984404b71a00e11"
            "67b8124d5dcddd4c6977b299392335d6edd303da6d344d74bbef2d38101b232b"
        )
    );
}

#[test]
fn blake2b_shorter_outputs() {
    assert_eq!(
        blake2b(b"", 32),
        hex!("0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8")
    );
    assert_eq!(
        Blake2b256::default().update(b"abc").finalize_bytes(),
        hex!("bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319")
    );
    assert_eq!(
        blake2b(b"abc", 20),
        hex!("384264f676f39536840523f284921cdc68b6846b")
    );
    assert_eq!(blake2b(b"", 1), hex!("2e"));
}

#[test]
fn blake2b_output_len_is_exact() {
    for len in 1..=MAX_OUTPUT_LEN {
        let hasher = with_output_len(len).unwrap();
        assert_eq!(hasher.output_len(), len);
        let out = hasher.update(b"length check").finish(DigestFormat::Hex);
        assert_eq!(out.as_hex().map(str::len), Some(2 * len));
    }
}

#[test]
fn blake2b_rejects_bad_output_len() {
    for len in [0, MAX_OUTPUT_LEN + 1, 1000] {
        match with_output_len(len) {
            Err(HashError::UnsupportedParameter { value, .. }) => {
                assert_eq!(value, len.to_string())
            }
            other => panic!("output length {} accepted: {:?}", len, other.is_ok()),
        }
    }
}

#[test]
fn blake2b_truncation_is_not_a_prefix() {
    let long = blake2b(b"abc", 64);
    let short = blake2b(b"abc", 32);
    assert_ne!(&long[..32], &short[..]);
}

proptest! {
    #[test]
    fn blake2b_chunking_invariance(
        data in proptest::collection::vec(any::<u8>(), 0..700),
        cut in any::<prop::sample::Index>(),
        len in 1usize..=64,
    ) {
        let at = cut.index(data.len() + 1);
        let parts = with_output_len(len)
            .unwrap()
            .update(&data[..at])
            .update(&data[at..])
            .finalize_bytes();
        prop_assert_eq!(parts, blake2b(&data, len));
    }
}
