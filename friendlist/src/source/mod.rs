use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

pub use buffer::Buffer;
pub use directory::Directory;
pub use file::File;
pub use stdin::StdIn;

use crate::query::QueryKey;

mod buffer;
mod directory;
mod file;
mod stdin;

/// A [Source] wraps the external data-fetching collaborator: whatever actually knows where the
/// current user's friends live.
///
/// Sources only fetch. Caching, retries and the observable query state belong to
/// [crate::query::Client], and decoding the returned text belongs to [crate::parser::Parser].
pub trait Source {
    /// Fetch the raw document for `key`.
    fn fetch(&self, key: &QueryKey) -> Result<Payload, FetchError>;
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn fetch(&self, key: &QueryKey) -> Result<Payload, FetchError> {
        (**self).fetch(key)
    }
}

/// Raw, undecoded response of a [Source].
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Payload {
    /// Human readable description of where the data came from, used in diagnostics.
    pub origin: String,
    pub data: String,
}

impl Payload {
    pub fn new(origin: impl ToString, data: impl ToString) -> Self {
        Self {
            origin: origin.to_string(),
            data: data.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("no data for query '{key}' at {location}")]
    NotFound { key: QueryKey, location: String },

    #[error("failed to read {location}: {source}")]
    Io { location: String, source: io::Error },

    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

fn read(key: &QueryKey, path: &Path) -> Result<Payload, FetchError> {
    let location = path.display().to_string();
    match fs::read_to_string(path) {
        Ok(data) => Ok(Payload::new(location, data)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(FetchError::NotFound {
            key: key.clone(),
            location,
        }),
        Err(source) => Err(FetchError::Io { location, source }),
    }
}
