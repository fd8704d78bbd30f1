use hex_literal::hex;
use proptest::prelude::*;
use ripemd160::{DigestFormat, Ripemd160, StreamingHasher};

fn rmd(data: &[u8]) -> Vec<u8> {
    Ripemd160::default().update(data).finalize_bytes()
}

#[test]
fn ripemd160_known_vectors() {
    let vectors: &[(&[u8], [u8; 20])] = &[
        (b"", hex!("9c1185a5c5e9fc54612808977ee8f548b2258d31")),
        (b"a", hex!("0bdc9d2d256b3ee9daae347be6f4dc835a467ffe")),
        (b"abc", hex!("8eb208f7e05d987a9b044a8e98c6b087f15a0bfc")),
        (
            b"message digest",
            hex!("5d0689ef49d2fae572b881b123a85ffa21595f36"),
        ),
        (
            b"abcdefghijklmnopqrstuvwxyz",
            hex!("f71c27109c692c1b56bbdceb5b9d2865b3708dbc"),
        ),
        (
            b"The quick brown fox jumps over the lazy dog",
            hex!("37f332f68db77bd9d7edd4969571ad671cf9dd3b"),
        ),
        (
            b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
            hex!("9b752e45573d4b39f4dbd3323cab82bf63326bfb"),
        ),
    ];
    for (input, expected) in vectors {
        assert_eq!(rmd(input), expected, "input {:?}", input);
    }
}

#[test]
fn ripemd160_one_million_a() {
    let chunk = [b'a'; 10_000];
    let hasher = (0..100).fold(Ripemd160::default(), |h, _| h.update(chunk));
    assert_eq!(
        hasher.finish(DigestFormat::Hex).as_hex(),
        Some("52783243c1697bdbe16d37f97f68f08325dc1528")
    );
}

#[test]
fn ripemd160_utf8_text() {
    let out = Ripemd160::default()
        .update_text("héllo".as_bytes())
        .unwrap()
        .finish(DigestFormat::Raw);
    assert_eq!(
        out.as_bytes(),
        Some(&hex!("041e270eda59c3368da0f8750eb47b41b24c2964")[..])
    );
}

#[test]
fn ripemd160_output_len() {
    let hasher = Ripemd160::default();
    assert_eq!(hasher.output_len(), 20);
    let hex = hasher.finish(DigestFormat::Hex);
    assert_eq!(hex.as_hex().map(str::len), Some(40));
}

#[test]
fn ripemd160_byte_at_a_time() {
    let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let hasher = data
        .iter()
        .fold(Ripemd160::default(), |h, b| h.update([*b]));
    assert_eq!(hasher.finalize_bytes(), rmd(&data));
}

proptest! {
    #[test]
    fn ripemd160_chunking_invariance(
        data in proptest::collection::vec(any::<u8>(), 0..400),
        cuts in proptest::collection::vec(any::<prop::sample::Index>(), 0..4),
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|c| c.index(data.len() + 1)).collect();
        points.sort_unstable();
        let mut hasher = Ripemd160::default();
        let mut start = 0;
        for p in points {
            hasher = hasher.update(&data[start..p]);
            start = p;
        }
        hasher = hasher.update(&data[start..]);
        prop_assert_eq!(hasher.finalize_bytes(), rmd(&data));
    }
}
