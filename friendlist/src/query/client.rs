use std::collections::HashMap;

use log::{debug, error, info, warn};

use crate::query::{QueryKey, QueryState};
use crate::source::{FetchError, Payload, Source};

static PENDING: QueryState = QueryState::Pending;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ClientConfig {
    /// Additional attempts after a failed fetch before the query settles in
    /// [QueryState::Error].
    pub retry: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { retry: 3 }
    }
}

/// Read-through cache in front of a [Source].
///
/// Successful results are kept until [Client::invalidate]d. Failed results are observable via
/// [Client::state] but never count as cached, so the next [Client::fetch] goes back to the
/// source.
pub struct Client {
    source: Box<dyn Source>,
    config: ClientConfig,
    entries: HashMap<QueryKey, Entry>,
}

struct Entry {
    state: QueryState,
    stale: bool,
}

impl Client {
    pub fn new(source: impl Source + 'static) -> Self {
        Self::with_config(source, ClientConfig::default())
    }

    pub fn with_config(source: impl Source + 'static, config: ClientConfig) -> Self {
        Self {
            source: Box::new(source),
            config,
            entries: HashMap::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The current state of `key` without fetching.
    pub fn state(&self, key: &QueryKey) -> &QueryState {
        self.entries
            .get(key)
            .map(|entry| &entry.state)
            .unwrap_or(&PENDING)
    }

    /// Returns the cached result for `key` if there is a fresh one, otherwise fetches it from the
    /// source and caches the outcome.
    pub fn fetch(&mut self, key: &QueryKey) -> &QueryState {
        if self.is_fresh(key) {
            debug!("query '{}' served from cache", key);
        } else {
            let state = match self.fetch_with_retry(key) {
                Ok(payload) => QueryState::Ready(payload),
                Err(err) => QueryState::Error(err),
            };
            self.entries.insert(
                key.clone(),
                Entry {
                    state,
                    stale: false,
                },
            );
        }
        self.state(key)
    }

    /// Marks `key` as stale. The previous result stays observable until the next
    /// [Client::fetch] replaces it.
    ///
    /// Returns `false` if there was nothing cached for `key`.
    pub fn invalidate(&mut self, key: &QueryKey) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                debug!("query '{}' invalidated", key);
                entry.stale = true;
                true
            }
            None => false,
        }
    }

    /// Fetches `key` from the source regardless of what is cached.
    pub fn refetch(&mut self, key: &QueryKey) -> &QueryState {
        self.invalidate(key);
        self.fetch(key)
    }

    fn is_fresh(&self, key: &QueryKey) -> bool {
        matches!(
            self.entries.get(key),
            Some(Entry {
                state: QueryState::Ready(_),
                stale: false,
            })
        )
    }

    fn fetch_with_retry(&self, key: &QueryKey) -> Result<Payload, FetchError> {
        let mut attempt = 0;
        loop {
            info!("Fetching query '{}' (attempt {})...", key, attempt + 1);
            match self.source.fetch(key) {
                Ok(payload) => return Ok(payload),
                Err(err) if attempt < self.config.retry => {
                    warn!("fetch of query '{}' failed, retrying: {}", key, err);
                    attempt += 1;
                }
                Err(err) => {
                    error!("fetch of query '{}' failed: {}", key, err);
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use crate::query::{Client, ClientConfig, QueryKey, QueryState};
    use crate::test_util::source::FakeSource;

    fn no_retry() -> ClientConfig {
        ClientConfig { retry: 0 }
    }

    #[test]
    fn pending_before_fetch() {
        let client = Client::new(FakeSource::new("data"));
        assert!(client.state(&QueryKey::FRIENDS).is_pending());
    }

    #[test]
    fn fetch_becomes_ready() -> Result<()> {
        let mut client = Client::new(FakeSource::new("data"));
        let payload = client
            .fetch(&QueryKey::FRIENDS)
            .payload()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("expected ready"))?;
        assert_eq!(payload.data, "data");
        assert!(client.state(&QueryKey::FRIENDS).payload().is_some());
        Ok(())
    }

    #[test]
    fn second_fetch_is_cached() {
        let source = FakeSource::new("data");
        let calls = source.calls();
        let mut client = Client::new(source);
        client.fetch(&QueryKey::FRIENDS);
        client.fetch(&QueryKey::FRIENDS);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn keys_are_cached_separately() {
        let source = FakeSource::new("data");
        let calls = source.calls();
        let mut client = Client::new(source);
        client.fetch(&QueryKey::FRIENDS);
        client.fetch(&QueryKey::new("other"));
        assert_eq!(calls.get(), 2);
        assert!(client.state(&QueryKey::new("third")).is_pending());
    }

    #[test]
    fn invalidate_keeps_stale_result_until_fetch() {
        let source = FakeSource::new("data");
        let calls = source.calls();
        let mut client = Client::new(source);
        client.fetch(&QueryKey::FRIENDS);
        assert!(client.invalidate(&QueryKey::FRIENDS));
        assert!(client.state(&QueryKey::FRIENDS).payload().is_some());
        client.fetch(&QueryKey::FRIENDS);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn invalidate_unknown_key() {
        let mut client = Client::new(FakeSource::new("data"));
        assert!(!client.invalidate(&QueryKey::FRIENDS));
    }

    #[test]
    fn refetch_always_calls_source() {
        let source = FakeSource::new("data");
        let calls = source.calls();
        let mut client = Client::new(source);
        client.fetch(&QueryKey::FRIENDS);
        client.refetch(&QueryKey::FRIENDS);
        client.refetch(&QueryKey::FRIENDS);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn failure_without_retry_is_error() {
        let source = FakeSource::new("data").failing(1);
        let calls = source.calls();
        let mut client = Client::with_config(source, no_retry());
        assert!(matches!(
            client.fetch(&QueryKey::FRIENDS),
            QueryState::Error(_)
        ));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn retries_until_success() {
        let source = FakeSource::new("data").failing(2);
        let calls = source.calls();
        let mut client = Client::with_config(source, ClientConfig { retry: 2 });
        assert!(client.fetch(&QueryKey::FRIENDS).payload().is_some());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn gives_up_after_retries() {
        let source = FakeSource::new("data").failing(10);
        let calls = source.calls();
        let mut client = Client::with_config(source, ClientConfig { retry: 3 });
        assert!(client.fetch(&QueryKey::FRIENDS).error().is_some());
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn error_is_not_cached() {
        let source = FakeSource::new("data").failing(1);
        let calls = source.calls();
        let mut client = Client::with_config(source, no_retry());
        assert!(client.fetch(&QueryKey::FRIENDS).error().is_some());
        assert!(client.state(&QueryKey::FRIENDS).error().is_some());
        assert!(client.fetch(&QueryKey::FRIENDS).payload().is_some());
        assert_eq!(calls.get(), 2);
    }
}
