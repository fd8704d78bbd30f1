use alloc::vec::Vec;
use core::{fmt, str::FromStr};

use blake2::Blake2b512;
use hashkit_traits::{HashError, StreamingHasher};
use md5::Md5;
use ripemd160::Ripemd160;
use sha3::{Keccak, Sha3};

/// Hash algorithms selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Algorithm {
    /// MD5, 16-byte digest.
    Md5,
    /// RIPEMD-160, 20-byte digest.
    Ripemd160,
    /// BLAKE2b with a 64-byte digest.
    Blake2b,
    /// SHA3-224 as the original tool computes it: the Keccak sponge with
    /// domain byte `0x01`. Also parsed from `keccak-224`.
    Keccak224,
    /// SHA3-256 on the `0x01` Keccak sponge.
    Keccak256,
    /// SHA3-384 on the `0x01` Keccak sponge.
    Keccak384,
    /// SHA3-512 on the `0x01` Keccak sponge.
    Keccak512,
    /// FIPS 202 SHA3-224, domain byte `0x06`.
    FipsSha3_224,
    /// FIPS 202 SHA3-256.
    FipsSha3_256,
    /// FIPS 202 SHA3-384.
    FipsSha3_384,
    /// FIPS 202 SHA3-512.
    FipsSha3_512,
}

impl Algorithm {
    /// Every supported algorithm.
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Md5,
        Algorithm::Ripemd160,
        Algorithm::Blake2b,
        Algorithm::Keccak224,
        Algorithm::Keccak256,
        Algorithm::Keccak384,
        Algorithm::Keccak512,
        Algorithm::FipsSha3_224,
        Algorithm::FipsSha3_256,
        Algorithm::FipsSha3_384,
        Algorithm::FipsSha3_512,
    ];

    const ALIASES: [(&'static str, Algorithm); 5] = [
        ("blake2b512", Algorithm::Blake2b),
        ("keccak224", Algorithm::Keccak224),
        ("keccak256", Algorithm::Keccak256),
        ("keccak384", Algorithm::Keccak384),
        ("keccak512", Algorithm::Keccak512),
    ];

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Ripemd160 => "ripemd160",
            Algorithm::Blake2b => "blake2b",
            Algorithm::Keccak224 => "sha3-224",
            Algorithm::Keccak256 => "sha3-256",
            Algorithm::Keccak384 => "sha3-384",
            Algorithm::Keccak512 => "sha3-512",
            Algorithm::FipsSha3_224 => "fips-sha3-224",
            Algorithm::FipsSha3_256 => "fips-sha3-256",
            Algorithm::FipsSha3_384 => "fips-sha3-384",
            Algorithm::FipsSha3_512 => "fips-sha3-512",
        }
    }

    /// Digest length in bytes.
    pub const fn output_len(self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Ripemd160 => 20,
            Algorithm::Keccak224 | Algorithm::FipsSha3_224 => 28,
            Algorithm::Keccak256 | Algorithm::FipsSha3_256 => 32,
            Algorithm::Keccak384 | Algorithm::FipsSha3_384 => 48,
            Algorithm::Blake2b | Algorithm::Keccak512 | Algorithm::FipsSha3_512 => 64,
        }
    }

    /// A fresh engine for this algorithm.
    pub fn hasher(self) -> AnyHasher {
        match self {
            Algorithm::Md5 => AnyHasher::Md5(Md5::default()),
            Algorithm::Ripemd160 => AnyHasher::Ripemd160(Ripemd160::default()),
            Algorithm::Blake2b => AnyHasher::Blake2b(Blake2b512::default()),
            Algorithm::Keccak224 => AnyHasher::Keccak(Keccak::Bits224(Default::default())),
            Algorithm::Keccak256 => AnyHasher::Keccak(Keccak::Bits256(Default::default())),
            Algorithm::Keccak384 => AnyHasher::Keccak(Keccak::Bits384(Default::default())),
            Algorithm::Keccak512 => AnyHasher::Keccak(Keccak::Bits512(Default::default())),
            Algorithm::FipsSha3_224 => AnyHasher::Sha3(Sha3::Bits224(Default::default())),
            Algorithm::FipsSha3_256 => AnyHasher::Sha3(Sha3::Bits256(Default::default())),
            Algorithm::FipsSha3_384 => AnyHasher::Sha3(Sha3::Bits384(Default::default())),
            Algorithm::FipsSha3_512 => AnyHasher::Sha3(Sha3::Bits512(Default::default())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// case and `-`/`_` separators are ignored
fn normalized(name: &str) -> impl Iterator<Item = u8> + '_ {
    name.bytes()
        .filter(|b| !matches!(b, b'-' | b'_'))
        .map(|b| b.to_ascii_lowercase())
}

impl FromStr for Algorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, HashError> {
        let s = s.trim();
        Algorithm::ALL
            .iter()
            .map(|&a| (a.name(), a))
            .chain(Algorithm::ALIASES)
            .find(|(name, _)| normalized(name).eq(normalized(s)))
            .map(|(_, a)| a)
            .ok_or_else(|| HashError::unsupported("algorithm", s))
    }
}

/// An engine for any [`Algorithm`], created by [`Algorithm::hasher`].
#[derive(Clone, Debug)]
pub enum AnyHasher {
    /// MD5 engine.
    Md5(Md5),
    /// RIPEMD-160 engine.
    Ripemd160(Ripemd160),
    /// BLAKE2b-512 engine.
    Blake2b(Blake2b512),
    /// SHA-3 engine.
    Sha3(Sha3),
    /// Original Keccak engine.
    Keccak(Keccak),
}

macro_rules! dispatch {
    ($self:expr, $h:ident => $body:expr) => {
        match $self {
            AnyHasher::Md5($h) => $body,
            AnyHasher::Ripemd160($h) => $body,
            AnyHasher::Blake2b($h) => $body,
            AnyHasher::Sha3($h) => $body,
            AnyHasher::Keccak($h) => $body,
        }
    };
}

impl StreamingHasher for AnyHasher {
    fn output_len(&self) -> usize {
        dispatch!(self, h => h.output_len())
    }

    fn absorb(&mut self, data: &[u8]) {
        dispatch!(self, h => h.absorb(data))
    }

    fn finalize_bytes(self) -> Vec<u8> {
        dispatch!(self, h => h.finalize_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn parsing_is_loose_about_case_and_separators() {
        assert_eq!("SHA3-256".parse::<Algorithm>(), Ok(Algorithm::Keccak256));
        assert_eq!("sha3_512".parse::<Algorithm>(), Ok(Algorithm::Keccak512));
        assert_eq!("Keccak256".parse::<Algorithm>(), Ok(Algorithm::Keccak256));
        assert_eq!("FIPS-SHA3-384".parse::<Algorithm>(), Ok(Algorithm::FipsSha3_384));
        assert_eq!("RIPEMD-160".parse::<Algorithm>(), Ok(Algorithm::Ripemd160));
        assert_eq!(" md5 ".parse::<Algorithm>(), Ok(Algorithm::Md5));
        assert_eq!("BLAKE2b-512".parse::<Algorithm>(), Ok(Algorithm::Blake2b));
    }

    #[test]
    fn unsupported_names_are_rejected() {
        for name in ["sha1", "sha256", "sha384", "sha512", "crc32", "", "sha3"] {
            match name.parse::<Algorithm>() {
                Err(HashError::UnsupportedParameter { parameter, value }) => {
                    assert_eq!(parameter, "algorithm");
                    assert_eq!(value, name);
                }
                other => panic!("{:?} parsed as {:?}", name, other),
            }
        }
    }

    #[test]
    fn engines_report_the_advertised_length() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.hasher().output_len(), algorithm.output_len());
        }
    }
}
