use std::cell::Cell;
use std::rc::Rc;

use crate::query::QueryKey;
use crate::source::{FetchError, Payload, Source};

/// In-memory [Source] that counts calls and can fail a number of times before succeeding.
#[derive(Debug, Default)]
pub struct FakeSource {
    data: String,
    failures: Cell<usize>,
    calls: Rc<Cell<usize>>,
}

impl FakeSource {
    pub fn new(data: impl ToString) -> Self {
        Self {
            data: data.to_string(),
            ..Default::default()
        }
    }

    /// Fail the next `count` fetches.
    pub fn failing(self, count: usize) -> Self {
        self.failures.set(count);
        self
    }

    /// Shared call counter that stays readable after the source is moved into a client.
    pub fn calls(&self) -> Rc<Cell<usize>> {
        self.calls.clone()
    }
}

impl Source for FakeSource {
    fn fetch(&self, _: &QueryKey) -> Result<Payload, FetchError> {
        self.calls.set(self.calls.get() + 1);
        let failures = self.failures.get();
        if failures > 0 {
            self.failures.set(failures - 1);
            return Err(FetchError::Unavailable("fake outage".to_string()));
        }
        Ok(Payload::new("fake", &self.data))
    }
}
