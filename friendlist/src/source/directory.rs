use std::path::{Path, PathBuf};

use crate::query::QueryKey;
use crate::source::{read, FetchError, Payload, Source};

/// Resolves each key to `<root>/<key>.json`, the way a REST route such as `/friends` maps to a
/// resource.
#[derive(Debug, Clone)]
pub struct Directory {
    root: PathBuf,
}

impl Directory {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, key: &QueryKey) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl Source for Directory {
    fn fetch(&self, key: &QueryKey) -> Result<Payload, FetchError> {
        read(key, &self.path(key))
    }
}
