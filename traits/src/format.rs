use alloc::{string::String, vec::Vec};
use core::{fmt, str::FromStr};

use crate::HashError;

/// Rendering requested for a finished digest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DigestFormat {
    /// Lowercase hexadecimal, two digits per byte.
    #[default]
    Hex,
    /// Raw digest bytes.
    Raw,
}

impl DigestFormat {
    /// Name accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for DigestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestFormat {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("hex") {
            Ok(Self::Hex)
        } else if s.eq_ignore_ascii_case("raw") {
            Ok(Self::Raw)
        } else {
            Err(HashError::unsupported("digest format", s))
        }
    }
}

/// A finished digest in the format the caller asked for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DigestOutput {
    /// Raw digest bytes.
    Raw(Vec<u8>),
    /// Lowercase hexadecimal rendering of the digest.
    Hex(String),
}

impl DigestOutput {
    /// Render `bytes` in `format`.
    pub fn new(bytes: Vec<u8>, format: DigestFormat) -> Self {
        match format {
            DigestFormat::Raw => Self::Raw(bytes),
            DigestFormat::Hex => Self::Hex(hex::encode(bytes)),
        }
    }

    /// Format of this output.
    pub fn format(&self) -> DigestFormat {
        match self {
            Self::Raw(_) => DigestFormat::Raw,
            Self::Hex(_) => DigestFormat::Hex,
        }
    }

    /// Digest length in bytes, independent of the rendering.
    pub fn digest_len(&self) -> usize {
        match self {
            Self::Raw(bytes) => bytes.len(),
            Self::Hex(s) => s.len() / 2,
        }
    }

    /// Raw bytes, if this output was requested raw.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Raw(bytes) => Some(bytes.as_slice()),
            Self::Hex(_) => None,
        }
    }

    /// Hex string, if this output was requested as hex.
    pub fn as_hex(&self) -> Option<&str> {
        match self {
            Self::Hex(s) => Some(s.as_str()),
            Self::Raw(_) => None,
        }
    }

    /// Lowercase hex rendering, converting raw output if needed.
    pub fn into_hex(self) -> String {
        match self {
            Self::Hex(s) => s,
            Self::Raw(bytes) => hex::encode(bytes),
        }
    }
}

impl fmt::Display for DigestOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(s) => f.write_str(s),
            Self::Raw(bytes) => bytes.iter().try_for_each(|b| write!(f, "{:02x}", b)),
        }
    }
}
