//! Object hashes.
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A 20 byte SHA-1 object id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHash([u8; 20]);

impl ObjectHash {
    pub const LEN: usize = 20;

    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Canonical 40 character lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Hex without per-byte zero padding, so `0x0a` renders as `a`.
    ///
    /// Lossy; only used where older output expects it (`cat-file` on trees).
    pub fn damaged(&self) -> String {
        self.0.iter().map(|b| format!("{b:x}")).collect()
    }

    /// `objects/` subdirectory and file name for this hash.
    pub(crate) fn loose_path_parts(&self) -> (String, String) {
        let hex = self.to_hex();
        let (dir, file) = hex.split_at(2);
        (dir.to_owned(), file.to_owned())
    }
}

impl FromStr for ObjectHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut bytes = [0; 20];
        if trimmed.len() != 2 * Self::LEN {
            return Err(Error::InvalidHash(s.to_owned()));
        }
        hex::decode_to_slice(trimmed, &mut bytes).map_err(|_| Error::InvalidHash(s.to_owned()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for ObjectHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ObjectHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectHash({self})")
    }
}
