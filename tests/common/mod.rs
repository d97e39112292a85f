//! Builds throw-away loose-object repositories for the integration tests.
#![allow(dead_code)]

use flate2::write::ZlibEncoder;
use flate2::Compression;
use git_internals::ObjectHash;
use sha1::{Digest, Sha1};
use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

pub const AUTHOR: &str = "Test User <test@example.com>";

pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// An empty repository whose HEAD points at `master`.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("objects")).unwrap();
        fs::create_dir_all(dir.path().join("refs").join("heads")).unwrap();
        fs::write(dir.path().join("HEAD"), "ref: refs/heads/master\n").unwrap();
        Self { dir }
    }

    pub fn git_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Store `<kind> <len>\0<body>` under its SHA-1, like `git hash-object -w`.
    pub fn write_object(&self, kind: &str, body: &[u8]) -> ObjectHash {
        let mut data = format!("{kind} {}\0", body.len()).into_bytes();
        data.extend(body);

        let mut hasher = Sha1::new();
        hasher.update(&data);
        let hash = ObjectHash::from_bytes(hasher.finalize().into());

        let mut z = ZlibEncoder::new(Vec::new(), Compression::default());
        z.write_all(&data).unwrap();
        self.write_raw(&hash, &z.finish().unwrap());
        hash
    }

    /// Put arbitrary bytes where the loose object `hash` lives.
    pub fn write_raw(&self, hash: &ObjectHash, bytes: &[u8]) {
        let hex = hash.to_hex();
        let dir = self.git_dir().join("objects").join(&hex[..2]);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(&hex[2..]), bytes).unwrap();
    }

    pub fn blob(&self, content: &str) -> ObjectHash {
        self.write_object("blob", content.as_bytes())
    }

    pub fn tree(&self, entries: &[(&str, &str, ObjectHash)]) -> ObjectHash {
        let mut body = Vec::new();
        for (mode, name, hash) in entries {
            body.extend(mode.as_bytes());
            body.push(b' ');
            body.extend(name.as_bytes());
            body.push(0);
            body.extend(hash.as_bytes());
        }
        self.write_object("tree", &body)
    }

    /// A commit by [`AUTHOR`] at `time` seconds past the epoch, UTC.
    pub fn commit(
        &self,
        tree: ObjectHash,
        parents: &[ObjectHash],
        message: &str,
        time: i64,
    ) -> ObjectHash {
        let mut body = String::new();
        writeln!(body, "tree {tree}").unwrap();
        for parent in parents {
            writeln!(body, "parent {parent}").unwrap();
        }
        writeln!(body, "author {AUTHOR} {time} +0000").unwrap();
        writeln!(body, "committer {AUTHOR} {time} +0000").unwrap();
        writeln!(body).unwrap();
        writeln!(body, "{message}").unwrap();
        self.write_object("commit", body.as_bytes())
    }

    pub fn set_branch(&self, name: &str, hash: ObjectHash) {
        fs::write(
            self.git_dir().join("refs").join("heads").join(name),
            format!("{hash}\n"),
        )
        .unwrap();
    }

    pub fn set_head(&self, content: &str) {
        fs::write(self.git_dir().join("HEAD"), content).unwrap();
    }
}
