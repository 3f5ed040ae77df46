use std::cell::RefCell;
use std::io::{stdin, Read};

use crate::query::QueryKey;
use crate::source::{FetchError, Payload, Source};

/// Reads the document from standard input.
///
/// Stdin can only be consumed once, so the first successful read is kept and served again for
/// every later fetch.
#[derive(Debug, Default)]
pub struct StdIn {
    data: RefCell<Option<String>>,
}

impl Source for StdIn {
    fn fetch(&self, _: &QueryKey) -> Result<Payload, FetchError> {
        if let Some(data) = self.data.borrow().as_ref() {
            return Ok(Payload::new("<stdin>", data));
        }
        let mut data = String::new();
        stdin()
            .read_to_string(&mut data)
            .map_err(|source| FetchError::Io {
                location: "<stdin>".to_string(),
                source,
            })?;
        *self.data.borrow_mut() = Some(data.clone());
        Ok(Payload::new("<stdin>", data))
    }
}
