//! Tree object bodies.
//!
//! A tree body is a headerless run of `<mode> <name>\0<20 raw hash bytes>` entries. The hash is
//! binary, so decoding walks a byte cursor instead of splitting strings.
use bytes::Buf;

use crate::error::{Error, Result};
use crate::hash::ObjectHash;
use crate::objects::Kind;

/// Mode of a subdirectory entry.
pub const DIRECTORY_MODE: &str = "40000";
/// Mode of a submodule (gitlink) entry.
pub const GITLINK_MODE: &str = "160000";

/// One line of a tree object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Octal mode as written, e.g. `100644` or `40000`.
    pub mode: String,
    pub name: String,
    pub hash: ObjectHash,
}

impl TreeEntry {
    pub fn is_directory(&self) -> bool {
        self.mode == DIRECTORY_MODE
    }

    /// Kind of object the entry points at, judged from its mode.
    pub fn kind(&self) -> Kind {
        match self.mode.as_str() {
            DIRECTORY_MODE => Kind::Tree,
            GITLINK_MODE => Kind::Commit,
            _ => Kind::Blob,
        }
    }

    /// See [`ObjectHash::damaged`].
    pub fn damaged_hash(&self) -> String {
        self.hash.damaged()
    }
}

/// Decode every entry of a tree body, in on-disk order.
pub fn decode(body: &[u8]) -> Result<Vec<TreeEntry>> {
    let mut cursor = body;
    let mut entries = Vec::new();
    while cursor.has_remaining() {
        let offset = body.len() - cursor.remaining();
        let entry = decode_entry(&mut cursor)
            .map_err(|reason| Error::MalformedTreeEntry { offset, reason })?;
        tracing::trace!(mode = %entry.mode, name = %entry.name, hash = %entry.hash, "tree entry");
        entries.push(entry);
    }
    Ok(entries)
}

fn decode_entry(cursor: &mut &[u8]) -> Result<TreeEntry, &'static str> {
    let space = cursor
        .iter()
        .position(|&b| b == b' ')
        .ok_or("missing space after mode")?;
    let mode = &cursor[..space];
    if mode.is_empty() || !mode.iter().all(|b| (b'0'..=b'7').contains(b)) {
        return Err("mode is not an octal number");
    }
    let mode = String::from_utf8_lossy(mode).into_owned();
    cursor.advance(space + 1);

    let nul = cursor
        .iter()
        .position(|&b| b == 0)
        .ok_or("missing NUL after name")?;
    if nul == 0 {
        return Err("empty name");
    }
    let name = String::from_utf8_lossy(&cursor[..nul]).into_owned();
    cursor.advance(nul + 1);

    if cursor.remaining() < ObjectHash::LEN {
        return Err("truncated hash");
    }
    let mut hash = [0; ObjectHash::LEN];
    cursor.copy_to_slice(&mut hash);

    Ok(TreeEntry {
        mode,
        name,
        hash: ObjectHash::from_bytes(hash),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encode(entries: &[(&str, &str, [u8; 20])]) -> Vec<u8> {
        let mut body = Vec::new();
        for (mode, name, hash) in entries {
            body.extend(mode.as_bytes());
            body.push(b' ');
            body.extend(name.as_bytes());
            body.push(0);
            body.extend(hash);
        }
        body
    }

    #[test]
    fn empty_body_has_no_entries() {
        assert!(decode(b"").unwrap().is_empty());
    }

    #[test]
    fn keeps_on_disk_order() {
        let body = encode(&[
            ("100644", "zeta.txt", [1; 20]),
            ("40000", "alpha", [2; 20]),
            ("100755", "run.sh", [0xff; 20]),
        ]);
        let entries = decode(&body).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["zeta.txt", "alpha", "run.sh"]);
        assert_eq!(entries[1].mode, "40000");
        assert!(entries[1].is_directory());
        assert_eq!(entries[1].kind(), Kind::Tree);
        assert_eq!(entries[2].kind(), Kind::Blob);
        assert_eq!(entries[2].hash.to_hex(), "ff".repeat(20));
    }

    #[test]
    fn hash_bytes_may_contain_space_and_nul() {
        let mut raw = [b' '; 20];
        raw[0] = 0;
        raw[19] = 0;
        let body = encode(&[("100644", "a b", raw), ("100644", "c", [0x0a; 20])]);
        let entries = decode(&body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a b");
        assert_eq!(entries[0].hash.as_bytes(), &raw);
        assert_eq!(entries[1].damaged_hash(), "a".repeat(20));
    }

    #[test]
    fn rejects_truncated_hash() {
        let mut body = encode(&[("100644", "a.txt", [7; 20])]);
        body.extend(b"100644 b.txt\0short");
        let err = decode(&body).unwrap_err();
        assert!(
            matches!(err, Error::MalformedTreeEntry { offset: 33, reason: "truncated hash" }),
            "{err:?}"
        );
    }

    #[test]
    fn rejects_missing_separators() {
        assert!(matches!(
            decode(b"100644"),
            Err(Error::MalformedTreeEntry { offset: 0, .. })
        ));
        assert!(matches!(
            decode(b"100644 name-without-nul"),
            Err(Error::MalformedTreeEntry { offset: 0, reason: "missing NUL after name" })
        ));
        assert!(matches!(
            decode(b"10x644 a\0aaaaaaaaaaaaaaaaaaaa"),
            Err(Error::MalformedTreeEntry { reason: "mode is not an octal number", .. })
        ));
        assert!(matches!(
            decode(b"100644 \0aaaaaaaaaaaaaaaaaaaa"),
            Err(Error::MalformedTreeEntry { reason: "empty name", .. })
        ));
    }

    proptest! {
        #[test]
        fn hashes_survive_decoding(
            raw in prop::collection::vec(prop::array::uniform20(any::<u8>()), 0..8),
        ) {
            let names: Vec<String> = (0..raw.len()).map(|i| format!("file{i}")).collect();
            let input: Vec<(&str, &str, [u8; 20])> = raw
                .iter()
                .zip(&names)
                .map(|(hash, name)| ("100644", name.as_str(), *hash))
                .collect();
            let entries = decode(&encode(&input)).unwrap();
            prop_assert_eq!(entries.len(), raw.len());
            for (entry, hash) in entries.iter().zip(&raw) {
                prop_assert_eq!(entry.hash.as_bytes(), hash);
                prop_assert_eq!(hex::decode(entry.hash.to_hex()).unwrap(), hash.to_vec());
            }
        }
    }
}
