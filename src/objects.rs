//! Git objects definitions.
use std::ffi::CStr;
use std::fmt;
use std::path::{Path, PathBuf};

use flate2::{Decompress, FlushDecompress, Status};

use crate::commit::Commit;
use crate::error::{Error, Result};
use crate::hash::ObjectHash;
use crate::tree::{self, TreeEntry};

/// Git object types
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Kind {
    /// A blob is a file of arbitrary content.
    Blob,
    /// A tree object is a directory listing of a set of objects.
    Tree,
    /// A commit object is a set of metadata and file system changes associated with a particular
    /// snapshot of the project's source code.
    Commit,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Blob => write!(f, "blob"),
            Kind::Tree => write!(f, "tree"),
            Kind::Commit => write!(f, "commit"),
        }
    }
}

/// The `<type> <size>` prefix of every object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub kind: Kind,
    /// Size recorded in the header. Not checked against the body.
    pub declared_size: u64,
}

impl Header {
    /// Split `<type> <size>\0<body>` into the header and the body.
    pub fn split(data: &[u8]) -> Result<(Header, &[u8])> {
        let header = CStr::from_bytes_until_nul(data)
            .map_err(|_| Error::MalformedHeader("no NUL after the header".into()))?;
        let body = &data[header.to_bytes().len() + 1..];
        let header = header
            .to_str()
            .map_err(|_| Error::MalformedHeader("header isn't valid UTF-8".into()))?;
        let Some((kind, size)) = header.split_once(' ') else {
            return Err(Error::MalformedHeader(format!(
                "no space between type and size in '{header}'"
            )));
        };
        let kind = match kind {
            "blob" => Kind::Blob,
            "tree" => Kind::Tree,
            "commit" => Kind::Commit,
            _ => return Err(Error::UnknownObjectType(kind.to_owned())),
        };
        let declared_size = size
            .parse::<u64>()
            .map_err(|_| Error::MalformedHeader(format!("invalid size: '{size}'")))?;
        Ok((
            Header {
                kind,
                declared_size,
            },
            body,
        ))
    }
}

/// A fully decoded object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Blob(String),
    Tree(Vec<TreeEntry>),
    Commit(Commit),
}

impl Object {
    /// Locate, inflate and decode the loose object `hash` under `git_dir`.
    pub fn read(git_dir: &Path, hash: &ObjectHash) -> Result<Object> {
        let data = read_loose(git_dir, hash)?;
        Object::parse(&data)
    }

    /// Decode an already inflated object, header included.
    pub fn parse(data: &[u8]) -> Result<Object> {
        let (header, body) = Header::split(data)?;
        tracing::debug!(kind = %header.kind, size = header.declared_size, "decoding object");
        Ok(match header.kind {
            Kind::Blob => Object::Blob(String::from_utf8_lossy(body).into_owned()),
            Kind::Tree => Object::Tree(tree::decode(body)?),
            Kind::Commit => Object::Commit(Commit::parse(body)?),
        })
    }

    pub fn kind(&self) -> Kind {
        match self {
            Object::Blob(_) => Kind::Blob,
            Object::Tree(_) => Kind::Tree,
            Object::Commit(_) => Kind::Commit,
        }
    }
}

/// The `cat-file` rendering: a `*KIND*` banner followed by the decoded content.
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Blob(content) => write!(f, "*BLOB*\n{content}"),
            Object::Tree(entries) => {
                write!(f, "*TREE*")?;
                for entry in entries {
                    write!(f, "\n{} {} {}", entry.mode, entry.damaged_hash(), entry.name)?;
                }
                Ok(())
            }
            Object::Commit(commit) => write!(f, "*COMMIT*\n{commit}"),
        }
    }
}

/// Path of the loose object file for `hash`.
pub fn loose_path(git_dir: &Path, hash: &ObjectHash) -> PathBuf {
    let (dir, file) = hash.loose_path_parts();
    git_dir.join("objects").join(dir).join(file)
}

/// Read and inflate a loose object file, header included.
pub fn read_loose(git_dir: &Path, hash: &ObjectHash) -> Result<Vec<u8>> {
    let path = loose_path(git_dir, hash);
    tracing::debug!(path = %path.display(), "reading loose object");
    let compressed = std::fs::read(&path).map_err(|e| Error::io(&path, e))?;
    inflate(&compressed).map_err(|reason| Error::Decompression { path, reason })
}

/// Inflate a complete zlib stream. A stream that ends before its end marker is an error.
fn inflate(compressed: &[u8]) -> Result<Vec<u8>, String> {
    let mut z = Decompress::new(true);
    let mut out = Vec::with_capacity(compressed.len() * 2 + 64);
    loop {
        if out.len() == out.capacity() {
            out.reserve(out.capacity());
        }
        let (read, written) = (z.total_in(), z.total_out());
        let input = &compressed[read as usize..];
        let status = z
            .decompress_vec(input, &mut out, FlushDecompress::None)
            .map_err(|e| e.to_string())?;
        match status {
            Status::StreamEnd => return Ok(out),
            Status::Ok | Status::BufError => {
                if z.total_in() == read && z.total_out() == written {
                    return Err(format!(
                        "stream ended early after {} of {} bytes",
                        read,
                        compressed.len()
                    ));
                }
            }
        }
    }
}
