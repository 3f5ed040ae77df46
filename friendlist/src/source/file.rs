use std::path::PathBuf;

use crate::query::QueryKey;
use crate::source::{read, FetchError, Payload, Source};

/// A single JSON document on disk, such as a `db.json`. The whole document is the payload for
/// every key.
///
/// The file is read on every fetch, so edits show up after [crate::query::Client::refetch].
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
}

impl File {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl Source for File {
    fn fetch(&self, key: &QueryKey) -> Result<Payload, FetchError> {
        read(key, &self.path)
    }
}
