use crate::query::QueryKey;
use crate::source::{FetchError, Payload, Source};

/// Serves the same in-memory document for every key.
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    data: String,
}

impl Buffer {
    pub fn new(data: impl ToString) -> Self {
        Self {
            data: data.to_string(),
        }
    }
}

impl Source for Buffer {
    fn fetch(&self, _: &QueryKey) -> Result<Payload, FetchError> {
        Ok(Payload::new("buffer", &self.data))
    }
}
